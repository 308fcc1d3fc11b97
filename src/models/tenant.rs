use serde::Deserialize;

use super::wire;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tenant {
    #[serde(deserialize_with = "wire::int")]
    pub id: i64,
    pub name: String,
    /// `None` while the tenant is not housed.
    #[serde(default, alias = "houseId", deserialize_with = "wire::optional_int")]
    pub house_id: Option<i64>,
}
