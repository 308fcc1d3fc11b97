use crate::api::Backend;
use crate::forms::{LoginForm, SignupForm};
use crate::navigation::Route;
use crate::session::SessionStore;

use super::Submission;

pub async fn landlord_login(
    backend: &dyn Backend,
    session: &mut impl SessionStore,
    form: &LoginForm,
) -> Submission {
    let credentials = match form.validate() {
        Ok(c) => c,
        Err(e) => return Submission::Rejected(e),
    };

    match backend.login_landlord(&credentials).await {
        Ok(login) => {
            tracing::info!(landlord_id = login.landlord_id, "Landlord logged in");
            session.set_landlord_id(login.landlord_id);
            Submission::Navigate(Route::LandlordDashboard { house_id: None })
        }
        Err(e) => {
            tracing::warn!("Landlord login failed: {e}");
            Submission::Failed(format!("Login failed: {}", e.detail()))
        }
    }
}

pub async fn tenant_login(
    backend: &dyn Backend,
    session: &mut impl SessionStore,
    form: &LoginForm,
) -> Submission {
    let credentials = match form.validate() {
        Ok(c) => c,
        Err(e) => return Submission::Rejected(e),
    };

    match backend.login_tenant(&credentials).await {
        Ok(login) => {
            tracing::info!("Tenant logged in");
            session.set_tenant_token(&login.token);
            Submission::Navigate(Route::TenantDashboard)
        }
        Err(e) => {
            tracing::warn!("Tenant login failed: {e}");
            Submission::Failed(format!("Login failed: {}", e.detail()))
        }
    }
}

pub async fn landlord_signup(backend: &dyn Backend, form: &SignupForm) -> Submission {
    let signup = match form.validate() {
        Ok(s) => s,
        Err(e) => return Submission::Rejected(e),
    };

    match backend.signup_landlord(&signup).await {
        Ok(_) => Submission::Navigate(Route::HouseManagement),
        Err(e) => {
            tracing::warn!("Landlord signup failed: {e}");
            Submission::Failed(format!("Signup failed: {}", e.detail()))
        }
    }
}

pub async fn tenant_signup(backend: &dyn Backend, form: &SignupForm) -> Submission {
    let signup = match form.validate() {
        Ok(s) => s,
        Err(e) => return Submission::Rejected(e),
    };

    match backend.signup_tenant(&signup).await {
        Ok(_) => Submission::Navigate(Route::TenantLogin),
        Err(e) => {
            tracing::warn!("Tenant signup failed: {e}");
            Submission::Failed(format!("Signup failed: {}", e.detail()))
        }
    }
}
