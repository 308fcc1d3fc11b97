use serde::Deserialize;

use super::{FormError, is_blank, parse_id};
use crate::api::{ComplaintStatusUpdate, NewComplaint};
use crate::models::ComplaintStatus;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComplaintForm {
    #[serde(default)]
    pub tenant_id: String,
    #[serde(default)]
    pub complaint: String,
}

impl ComplaintForm {
    pub fn validate(&self) -> Result<NewComplaint, FormError> {
        if is_blank(&self.tenant_id) || is_blank(&self.complaint) {
            return Err("Please enter a valid Tenant ID and Complaint.".into());
        }
        Ok(NewComplaint {
            tenant_id: parse_id(&self.tenant_id, "Tenant ID")?,
            complaint: self.complaint.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComplaintStatusForm {
    #[serde(default)]
    pub complaint_id: String,
    #[serde(default)]
    pub status: String,
    /// House whose complaints are on screen; echoed back so the list can be
    /// re-fetched with the same scope.
    #[serde(default)]
    pub house_id: Option<String>,
}

impl ComplaintStatusForm {
    pub fn validate(&self) -> Result<ComplaintStatusUpdate, FormError> {
        if is_blank(&self.complaint_id) || is_blank(&self.status) {
            return Err("A complaint and a target status are required.".into());
        }
        let status = self
            .status
            .parse::<ComplaintStatus>()
            .map_err(FormError)?;
        Ok(ComplaintStatusUpdate {
            complaint_id: parse_id(&self.complaint_id, "Complaint ID")?,
            status,
        })
    }

    pub fn house_id(&self) -> Option<i64> {
        self.house_id.as_deref().and_then(|id| id.trim().parse().ok())
    }
}
