use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::wire;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Complaint {
    #[serde(deserialize_with = "wire::int")]
    pub id: i64,
    #[serde(default, alias = "tenantId", deserialize_with = "wire::optional_int")]
    pub tenant_id: Option<i64>,
    #[serde(default, alias = "houseId", deserialize_with = "wire::optional_int")]
    pub house_id: Option<i64>,
    #[serde(alias = "complaint", default)]
    pub description: String,
    #[serde(default)]
    pub status: ComplaintStatus,
}

impl Complaint {
    pub fn is_pending(&self) -> bool {
        self.status == ComplaintStatus::Pending
    }
}

/// Two-valued complaint lifecycle, advanced only from the landlord dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplaintStatus {
    #[default]
    #[serde(alias = "pending", alias = "PENDING")]
    Pending,
    #[serde(alias = "resolved", alias = "RESOLVED")]
    Resolved,
}

impl ComplaintStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "Pending",
            ComplaintStatus::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplaintStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(ComplaintStatus::Pending),
            "resolved" => Ok(ComplaintStatus::Resolved),
            other => Err(format!("Unknown complaint status: {other}")),
        }
    }
}
