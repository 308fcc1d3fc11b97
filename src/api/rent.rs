use serde::Serialize;
use serde_json::Value;

use super::listing::normalize;
use super::{ApiClient, ApiError};
use crate::models::RentStatus;

#[derive(Debug, Clone, Serialize)]
pub struct RentPayment {
    pub tenant_id: i64,
    pub amount: f64,
}

impl ApiClient {
    pub async fn pay_rent(&self, payment: &RentPayment) -> Result<Value, ApiError> {
        self.post_json("/rent-payment", payment).await
    }

    pub async fn rent_status(&self, landlord_id: i64) -> Result<Vec<RentStatus>, ApiError> {
        normalize(
            self.get_json("/rent-status", &[("landlord_id", landlord_id.to_string())])
                .await?,
        )
    }
}
