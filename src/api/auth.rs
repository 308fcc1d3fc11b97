use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ApiClient, ApiError};
use crate::models::wire;

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Signup {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LandlordLogin {
    #[serde(
        rename = "landlordId",
        alias = "landlord_id",
        alias = "id",
        deserialize_with = "wire::int"
    )]
    pub landlord_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TenantLogin {
    pub token: String,
}

impl ApiClient {
    pub async fn login_landlord(
        &self,
        credentials: &Credentials,
    ) -> Result<LandlordLogin, ApiError> {
        let body = self.post_json("/login/landlord", credentials).await?;
        serde_json::from_value(body)
            .map_err(|e| ApiError::UnexpectedShape(format!("landlord login response: {e}")))
    }

    pub async fn login_tenant(&self, credentials: &Credentials) -> Result<TenantLogin, ApiError> {
        let body = self.post_json("/login/tenant", credentials).await?;
        let login: TenantLogin = serde_json::from_value(body)
            .map_err(|e| ApiError::UnexpectedShape(format!("tenant login response: {e}")))?;
        if login.token.is_empty() {
            return Err(ApiError::UnexpectedShape(
                "tenant login response carried an empty token".to_string(),
            ));
        }
        Ok(login)
    }

    pub async fn signup_landlord(&self, signup: &Signup) -> Result<Value, ApiError> {
        self.post_json("/signup/landlord", signup).await
    }

    pub async fn signup_tenant(&self, signup: &Signup) -> Result<Value, ApiError> {
        self.post_json("/signup/tenant", signup).await
    }
}
