use askama::Template;
use axum::extract::{Form, State};
use axum::response::{IntoResponse, Response};

use super::{redirect, render};
use crate::error::AppError;
use crate::forms::{LoginForm, SignupForm};
use crate::navigation::Route;
use crate::pages::{self, Submission};
use crate::session::{CookieSession, SessionStore};
use crate::state::SharedState;

#[derive(Template)]
#[template(path = "auth/login.html")]
struct LoginTemplate {
    title: &'static str,
    action: &'static str,
    signup_path: &'static str,
    email: String,
    error: Option<String>,
}

#[derive(Template)]
#[template(path = "auth/signup.html")]
struct SignupTemplate {
    title: &'static str,
    action: &'static str,
    login_path: &'static str,
    name: String,
    email: String,
    error: Option<String>,
}

fn landlord_login_template(email: String, error: Option<String>) -> LoginTemplate {
    LoginTemplate {
        title: "Landlord Login",
        action: "/landlord-login",
        signup_path: "/landlord-signup",
        email,
        error,
    }
}

fn tenant_login_template(email: String, error: Option<String>) -> LoginTemplate {
    LoginTemplate {
        title: "Tenant Login",
        action: "/tenant-login",
        signup_path: "/tenant-signup",
        email,
        error,
    }
}

fn landlord_signup_template(form: SignupForm, error: Option<String>) -> SignupTemplate {
    SignupTemplate {
        title: "Landlord Signup",
        action: "/landlord-signup",
        login_path: "/landlord-login",
        name: form.name,
        email: form.email,
        error,
    }
}

fn tenant_signup_template(form: SignupForm, error: Option<String>) -> SignupTemplate {
    SignupTemplate {
        title: "Tenant Signup",
        action: "/tenant-signup",
        login_path: "/tenant-login",
        name: form.name,
        email: form.email,
        error,
    }
}

pub async fn landlord_login_page() -> Result<impl IntoResponse, AppError> {
    render(&landlord_login_template(String::new(), None))
}

pub async fn tenant_login_page() -> Result<impl IntoResponse, AppError> {
    render(&tenant_login_template(String::new(), None))
}

pub async fn landlord_signup_page() -> Result<impl IntoResponse, AppError> {
    render(&landlord_signup_template(SignupForm::default(), None))
}

pub async fn tenant_signup_page() -> Result<impl IntoResponse, AppError> {
    render(&tenant_signup_template(SignupForm::default(), None))
}

pub async fn landlord_login(
    State(state): State<SharedState>,
    mut session: CookieSession,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    match pages::auth::landlord_login(state.backend.as_ref(), &mut session, &form).await {
        Submission::Navigate(route) => Ok((session.into_jar(), redirect(&route)).into_response()),
        outcome => {
            let template = landlord_login_template(form.email, outcome.error_message());
            Ok(render(&template)?.into_response())
        }
    }
}

pub async fn tenant_login(
    State(state): State<SharedState>,
    mut session: CookieSession,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    match pages::auth::tenant_login(state.backend.as_ref(), &mut session, &form).await {
        Submission::Navigate(route) => Ok((session.into_jar(), redirect(&route)).into_response()),
        outcome => {
            let template = tenant_login_template(form.email, outcome.error_message());
            Ok(render(&template)?.into_response())
        }
    }
}

pub async fn landlord_signup(
    State(state): State<SharedState>,
    Form(form): Form<SignupForm>,
) -> Result<Response, AppError> {
    match pages::auth::landlord_signup(state.backend.as_ref(), &form).await {
        Submission::Navigate(route) => Ok(redirect(&route).into_response()),
        outcome => {
            let error = outcome.error_message();
            Ok(render(&landlord_signup_template(form, error))?.into_response())
        }
    }
}

pub async fn tenant_signup(
    State(state): State<SharedState>,
    Form(form): Form<SignupForm>,
) -> Result<Response, AppError> {
    match pages::auth::tenant_signup(state.backend.as_ref(), &form).await {
        Submission::Navigate(route) => Ok(redirect(&route).into_response()),
        outcome => {
            let error = outcome.error_message();
            Ok(render(&tenant_signup_template(form, error))?.into_response())
        }
    }
}

pub async fn logout(mut session: CookieSession) -> Response {
    session.clear();
    (session.into_jar(), redirect(&Route::Home)).into_response()
}
