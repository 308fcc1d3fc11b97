use serde::Serialize;
use serde_json::Value;

use super::listing::normalize;
use super::{ApiClient, ApiError};
use crate::models::House;

#[derive(Debug, Clone, Serialize)]
pub struct NewHouse {
    pub address: String,
    pub num_apartments: i64,
    pub rent_price: f64,
    pub landlord_id: i64,
}

impl ApiClient {
    /// All houses, or only those owned by `landlord_id`.
    pub async fn list_houses(&self, landlord_id: Option<i64>) -> Result<Vec<House>, ApiError> {
        let query: Vec<(&str, String)> = landlord_id
            .map(|id| vec![("landlord_id", id.to_string())])
            .unwrap_or_default();
        normalize(self.get_json("/houses", &query).await?)
    }

    pub async fn add_house(&self, house: &NewHouse) -> Result<Value, ApiError> {
        self.post_json("/houses", house).await
    }
}
