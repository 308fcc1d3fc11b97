use serde::Deserialize;

use super::wire;

/// Whether a tenant has paid rent for the current period.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RentStatus {
    #[serde(alias = "tenantId", deserialize_with = "wire::int")]
    pub tenant_id: i64,
    #[serde(alias = "tenantName", default)]
    pub tenant_name: String,
    #[serde(alias = "rentPaid", default, deserialize_with = "wire::flag")]
    pub rent_paid: bool,
}
