use serde::Deserialize;

use super::wire;

/// A rentable building as reported by the backend.
///
/// `vacant_apartments <= num_apartments` is maintained by the backend and is
/// displayed as-is.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct House {
    #[serde(deserialize_with = "wire::int")]
    pub id: i64,
    pub address: String,
    #[serde(alias = "apartmentCount", deserialize_with = "wire::int")]
    pub num_apartments: i64,
    #[serde(alias = "rentPrice", deserialize_with = "wire::float")]
    pub rent_price: f64,
    #[serde(default, alias = "vacantApartments", deserialize_with = "wire::int")]
    pub vacant_apartments: i64,
    #[serde(default, alias = "landlordId", deserialize_with = "wire::optional_int")]
    pub landlord_id: Option<i64>,
}
