pub mod auth;
pub mod home;
pub mod landlord;
pub mod tenant;

use askama::Template;
use axum::Router;
use axum::http::HeaderMap;
use axum::response::{Html, Redirect};
use axum::routing::{get, post};

use crate::error::AppError;
use crate::navigation::Route;
use crate::state::SharedState;

pub fn view_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(home::index))
        // Auth
        .route(
            "/landlord-login",
            get(auth::landlord_login_page).post(auth::landlord_login),
        )
        .route("/tenant-login", get(auth::tenant_login_page).post(auth::tenant_login))
        .route(
            "/landlord-signup",
            get(auth::landlord_signup_page).post(auth::landlord_signup),
        )
        .route(
            "/tenant-signup",
            get(auth::tenant_signup_page).post(auth::tenant_signup),
        )
        .route("/logout", post(auth::logout))
        // Landlord
        .route("/landlord-dashboard", get(landlord::dashboard))
        .route(
            "/landlord-dashboard/complaints/status",
            post(landlord::update_complaint_status),
        )
        .route(
            "/landlord-dashboard/house-management",
            get(landlord::house_management).post(landlord::add_house),
        )
        // Tenant
        .route("/tenant-dashboard", get(tenant::dashboard))
        .route(
            "/tenant-dashboard/move-in",
            get(tenant::move_in_page).post(tenant::move_in),
        )
        .route(
            "/tenant-dashboard/move-out",
            get(tenant::move_out_page).post(tenant::move_out),
        )
        .route(
            "/tenant-dashboard/rent-payment",
            get(tenant::rent_payment_page).post(tenant::pay_rent),
        )
        .route(
            "/tenant-dashboard/complaints",
            get(tenant::complaints_page).post(tenant::submit_complaint),
        )
        // HTMX partials
        .route("/htmx/houses", get(tenant::house_list_partial))
}

fn render<T: Template>(template: &T) -> Result<Html<String>, AppError> {
    Ok(Html(template.render()?))
}

fn redirect(route: &Route) -> Redirect {
    Redirect::to(&route.path())
}

fn is_htmx(headers: &HeaderMap) -> bool {
    headers.contains_key("hx-request")
}

/// Parse an optional numeric query parameter, treating junk as absent.
fn parse_opt_id(value: Option<&str>) -> Option<i64> {
    value.and_then(|v| v.trim().parse().ok())
}
