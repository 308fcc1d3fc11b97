use askama::Template;
use axum::response::IntoResponse;

use super::render;
use crate::error::AppError;
use crate::session::{CookieSession, Identity, SessionStore};

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    landlord_id: Option<i64>,
    tenant: bool,
}

pub async fn index(session: CookieSession) -> Result<impl IntoResponse, AppError> {
    let (landlord_id, tenant) = match session.identity() {
        Identity::Landlord(id) => (Some(id), false),
        Identity::Tenant(_) => (None, true),
        Identity::Anonymous => (None, false),
    };
    render(&HomeTemplate {
        landlord_id,
        tenant,
    })
}
