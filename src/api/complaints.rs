use serde::Serialize;
use serde_json::Value;

use super::listing::normalize;
use super::{ApiClient, ApiError};
use crate::models::{Complaint, ComplaintStatus};

#[derive(Debug, Clone, Serialize)]
pub struct NewComplaint {
    pub tenant_id: i64,
    pub complaint: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComplaintStatusUpdate {
    pub complaint_id: i64,
    pub status: ComplaintStatus,
}

/// Which complaints a listing covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplaintScope {
    All,
    Landlord(i64),
    House(i64),
}

impl ComplaintScope {
    fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            ComplaintScope::All => Vec::new(),
            ComplaintScope::Landlord(id) => vec![("landlord_id", id.to_string())],
            ComplaintScope::House(id) => vec![("house_id", id.to_string())],
        }
    }
}

impl ApiClient {
    pub async fn submit_complaint(&self, complaint: &NewComplaint) -> Result<Value, ApiError> {
        self.post_json("/complaints", complaint).await
    }

    pub async fn list_complaints(&self, scope: ComplaintScope) -> Result<Vec<Complaint>, ApiError> {
        normalize(self.get_json("/complaints", &scope.query()).await?)
    }

    pub async fn update_complaint_status(
        &self,
        update: &ComplaintStatusUpdate,
    ) -> Result<Value, ApiError> {
        self.post_json("/complaints/status", update).await
    }
}
