use askama::Template;
use axum::extract::{Form, Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use super::{redirect, render};
use crate::error::AppError;
use crate::forms::{ComplaintForm, MoveInForm, MoveOutForm, RentPaymentForm};
use crate::models::House;
use crate::pages::{self, MoveInPage, Submission};
use crate::session::{CookieSession, SessionStore};
use crate::state::SharedState;
use crate::sync::HouseFilter;

#[derive(Template)]
#[template(path = "tenant/dashboard.html")]
struct DashboardTemplate {
    logged_in: bool,
}

#[derive(Template)]
#[template(path = "tenant/move_in.html")]
struct MoveInTemplate {
    query: String,
    max_rent: String,
    form: MoveInForm,
    houses: Vec<House>,
    houses_failed: bool,
    error: Option<String>,
}

/// Filtered house list fragment swapped into `#house-list`.
#[derive(Template)]
#[template(path = "tenant/house_list.html")]
struct HouseListTemplate {
    houses: Vec<House>,
    houses_failed: bool,
}

#[derive(Template)]
#[template(path = "tenant/move_out.html")]
struct MoveOutTemplate {
    form: MoveOutForm,
    error: Option<String>,
}

#[derive(Template)]
#[template(path = "tenant/rent_payment.html")]
struct RentPaymentTemplate {
    form: RentPaymentForm,
    house_id: String,
    error: Option<String>,
}

#[derive(Template)]
#[template(path = "tenant/complaints.html")]
struct ComplaintTemplate {
    form: ComplaintForm,
    error: Option<String>,
}

/// Search inputs (from the GET search form) and move-in fields (from the POST).
#[derive(Debug, Default, Deserialize)]
pub struct MoveInParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub max_rent: String,
    #[serde(default)]
    pub tenant_id: String,
    #[serde(default)]
    pub house_id: String,
}

impl MoveInParams {
    fn into_page(self) -> MoveInPage {
        let filter = HouseFilter::from_inputs(&self.q, &self.max_rent);
        let form = MoveInForm {
            tenant_id: self.tenant_id,
            house_id: self.house_id,
        };
        MoveInPage::new(filter, form)
    }
}

fn move_in_template(page: MoveInPage, max_rent: String, error: Option<String>) -> MoveInTemplate {
    let houses = page.visible_houses().into_iter().cloned().collect();
    MoveInTemplate {
        query: page.filter.query.clone(),
        max_rent,
        houses_failed: page.houses.is_failed(),
        houses,
        form: page.form,
        error,
    }
}

pub async fn dashboard(session: CookieSession) -> Result<impl IntoResponse, AppError> {
    render(&DashboardTemplate {
        logged_in: session.tenant_token().is_some(),
    })
}

pub async fn move_in_page(
    State(state): State<SharedState>,
    Query(params): Query<MoveInParams>,
) -> Result<impl IntoResponse, AppError> {
    let max_rent = params.max_rent.clone();
    let mut page = params.into_page();
    page.mount(state.backend.as_ref()).await;
    render(&move_in_template(page, max_rent, None))
}

/// Re-fetches the full house list on every keystroke and renders the filtered subset.
pub async fn house_list_partial(
    State(state): State<SharedState>,
    Query(params): Query<MoveInParams>,
) -> Result<impl IntoResponse, AppError> {
    let mut page = params.into_page();
    page.mount(state.backend.as_ref()).await;
    let houses = page.visible_houses().into_iter().cloned().collect();
    render(&HouseListTemplate {
        houses,
        houses_failed: page.houses.is_failed(),
    })
}

pub async fn move_in(
    State(state): State<SharedState>,
    Form(params): Form<MoveInParams>,
) -> Result<Response, AppError> {
    let backend = state.backend.as_ref();
    let max_rent = params.max_rent.clone();
    let mut page = params.into_page();

    match page.submit(backend).await {
        Submission::Navigate(route) => Ok(redirect(&route).into_response()),
        outcome => {
            page.mount(backend).await;
            let template = move_in_template(page, max_rent, outcome.error_message());
            Ok(render(&template)?.into_response())
        }
    }
}

pub async fn move_out_page() -> Result<impl IntoResponse, AppError> {
    render(&MoveOutTemplate {
        form: MoveOutForm::default(),
        error: None,
    })
}

pub async fn move_out(
    State(state): State<SharedState>,
    Form(form): Form<MoveOutForm>,
) -> Result<Response, AppError> {
    match pages::tenant::move_out(state.backend.as_ref(), &form).await {
        Submission::Navigate(route) => Ok(redirect(&route).into_response()),
        outcome => {
            let error = outcome.error_message();
            Ok(render(&MoveOutTemplate { form, error })?.into_response())
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RentPaymentQuery {
    #[serde(rename = "tenantId")]
    pub tenant_id: Option<String>,
    #[serde(rename = "houseId")]
    pub house_id: Option<String>,
}

pub async fn rent_payment_page(
    Query(q): Query<RentPaymentQuery>,
) -> Result<impl IntoResponse, AppError> {
    let form = RentPaymentForm {
        tenant_id: q.tenant_id.unwrap_or_default(),
        amount: String::new(),
    };
    render(&RentPaymentTemplate {
        form,
        house_id: q.house_id.unwrap_or_default(),
        error: None,
    })
}

#[derive(Debug, Default, Deserialize)]
pub struct RentPaymentParams {
    #[serde(default)]
    pub tenant_id: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub house_id: String,
}

pub async fn pay_rent(
    State(state): State<SharedState>,
    Form(params): Form<RentPaymentParams>,
) -> Result<Response, AppError> {
    let form = RentPaymentForm {
        tenant_id: params.tenant_id,
        amount: params.amount,
    };
    match pages::tenant::pay_rent(state.backend.as_ref(), &form).await {
        Submission::Navigate(route) => Ok(redirect(&route).into_response()),
        outcome => {
            let template = RentPaymentTemplate {
                form,
                house_id: params.house_id,
                error: outcome.error_message(),
            };
            Ok(render(&template)?.into_response())
        }
    }
}

pub async fn complaints_page() -> Result<impl IntoResponse, AppError> {
    render(&ComplaintTemplate {
        form: ComplaintForm::default(),
        error: None,
    })
}

pub async fn submit_complaint(
    State(state): State<SharedState>,
    Form(form): Form<ComplaintForm>,
) -> Result<Response, AppError> {
    match pages::tenant::submit_complaint(state.backend.as_ref(), &form).await {
        Submission::Navigate(route) => Ok(redirect(&route).into_response()),
        outcome => {
            let error = outcome.error_message();
            Ok(render(&ComplaintTemplate { form, error })?.into_response())
        }
    }
}
