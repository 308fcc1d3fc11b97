use serde::Serialize;
use serde_json::Value;

use super::listing::normalize;
use super::{ApiClient, ApiError};
use crate::models::Tenant;

#[derive(Debug, Clone, Serialize)]
pub struct MoveIn {
    pub tenant_id: i64,
    pub house_id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MoveOut {
    pub tenant_id: i64,
}

impl ApiClient {
    pub async fn list_tenants(&self, house_id: i64) -> Result<Vec<Tenant>, ApiError> {
        normalize(
            self.get_json("/tenants", &[("house_id", house_id.to_string())])
                .await?,
        )
    }

    pub async fn move_in(&self, request: &MoveIn) -> Result<Value, ApiError> {
        self.post_json("/tenants/move-in", request).await
    }

    pub async fn move_out(&self, request: &MoveOut) -> Result<Value, ApiError> {
        self.post_json("/tenants/move-out", request).await
    }
}
