use askama::Template;
use axum::extract::{Form, Query, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use super::{is_htmx, parse_opt_id, redirect, render};
use crate::error::AppError;
use crate::forms::{AddHouseForm, ComplaintStatusForm};
use crate::models::{Complaint, House, RentStatus, Tenant};
use crate::navigation::Route;
use crate::pages::{HouseManagement, LandlordDashboard, Submission};
use crate::session::CookieSession;
use crate::state::SharedState;

#[derive(Template)]
#[template(path = "landlord/dashboard.html")]
struct DashboardTemplate {
    landlord_id: Option<i64>,
    selected_house: Option<i64>,
    houses: Vec<House>,
    houses_failed: bool,
    rent_status: Vec<RentStatus>,
    rent_status_failed: bool,
    tenants: Vec<Tenant>,
    tenants_failed: bool,
    complaints: Vec<Complaint>,
    complaints_failed: bool,
    error: Option<String>,
}

impl DashboardTemplate {
    fn new(page: LandlordDashboard, error: Option<String>) -> Self {
        let landlord_id = page.landlord_id();
        let selected_house = page.selected_house();
        let houses_failed = page.houses.is_failed();
        let rent_status_failed = page.rent_status.is_failed();
        let tenants_failed = page.tenants.is_failed();
        let complaints_failed = page.complaints.is_failed();
        Self {
            landlord_id,
            selected_house,
            houses: page.houses.into_items(),
            houses_failed,
            rent_status: page.rent_status.into_items(),
            rent_status_failed,
            tenants: page.tenants.into_items(),
            tenants_failed,
            complaints: page.complaints.into_items(),
            complaints_failed,
            error,
        }
    }
}

/// Complaints section of the dashboard, swapped in place by HTMX.
#[derive(Template)]
#[template(path = "landlord/complaints.html")]
struct ComplaintsTemplate {
    selected_house: Option<i64>,
    complaints: Vec<Complaint>,
    complaints_failed: bool,
    error: Option<String>,
}

#[derive(Template)]
#[template(path = "landlord/house_management.html")]
struct HouseManagementTemplate {
    landlord_id: Option<i64>,
    houses: Vec<House>,
    houses_failed: bool,
    form: AddHouseForm,
    message: Option<String>,
    error: Option<String>,
}

#[derive(Deserialize)]
pub struct DashboardQuery {
    pub house_id: Option<String>,
}

pub async fn dashboard(
    State(state): State<SharedState>,
    session: CookieSession,
    Query(q): Query<DashboardQuery>,
) -> Result<impl IntoResponse, AppError> {
    let mut page =
        LandlordDashboard::new(&session).with_selected_house(parse_opt_id(q.house_id.as_deref()));
    page.mount(state.backend.as_ref()).await;
    render(&DashboardTemplate::new(page, None))
}

pub async fn update_complaint_status(
    State(state): State<SharedState>,
    session: CookieSession,
    headers: HeaderMap,
    Form(form): Form<ComplaintStatusForm>,
) -> Result<Response, AppError> {
    let backend = state.backend.as_ref();
    let mut page = LandlordDashboard::new(&session).with_selected_house(form.house_id());
    let outcome = page.update_complaint_status(backend, &form).await;

    if !is_htmx(&headers) {
        if let Submission::Refreshed = outcome {
            let route = Route::LandlordDashboard {
                house_id: page.selected_house(),
            };
            return Ok(redirect(&route).into_response());
        }
        page.mount(backend).await;
        return Ok(render(&DashboardTemplate::new(page, outcome.error_message()))?.into_response());
    }

    if outcome.error_message().is_some() {
        // Nothing was re-fetched; show the current list next to the error.
        page.refresh_complaints(backend).await;
    }
    let complaints_failed = page.complaints.is_failed();
    let template = ComplaintsTemplate {
        selected_house: page.selected_house(),
        complaints: page.complaints.into_items(),
        complaints_failed,
        error: outcome.error_message(),
    };
    Ok(render(&template)?.into_response())
}

fn house_management_template(
    page: HouseManagement,
    form: AddHouseForm,
    message: Option<String>,
    error: Option<String>,
) -> HouseManagementTemplate {
    let landlord_id = page.landlord_id();
    let houses_failed = page.houses.is_failed();
    HouseManagementTemplate {
        landlord_id,
        houses: page.houses.into_items(),
        houses_failed,
        form,
        message,
        error,
    }
}

pub async fn house_management(
    State(state): State<SharedState>,
    session: CookieSession,
) -> Result<impl IntoResponse, AppError> {
    let mut page = HouseManagement::new(&session);
    page.mount(state.backend.as_ref()).await;
    render(&house_management_template(
        page,
        AddHouseForm::default(),
        None,
        None,
    ))
}

pub async fn add_house(
    State(state): State<SharedState>,
    session: CookieSession,
    Form(form): Form<AddHouseForm>,
) -> Result<impl IntoResponse, AppError> {
    let backend = state.backend.as_ref();
    let mut page = HouseManagement::new(&session);

    // A successful add already reloads the list.
    let template = match page.add_house(backend, &form).await {
        Submission::Refreshed => house_management_template(
            page,
            AddHouseForm::default(),
            Some("House added successfully!".to_string()),
            None,
        ),
        outcome => {
            page.mount(backend).await;
            let error = outcome.error_message();
            house_management_template(page, form, None, error)
        }
    };
    render(&template)
}
