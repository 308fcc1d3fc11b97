pub mod auth;
pub mod complaints;
pub mod error;
pub mod houses;
pub mod listing;
pub mod rent;
pub mod tenants;

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::models::{Complaint, House, RentStatus, Tenant};

pub use auth::{Credentials, LandlordLogin, Signup, TenantLogin};
pub use complaints::{ComplaintScope, ComplaintStatusUpdate, NewComplaint};
pub use error::ApiError;
pub use houses::NewHouse;
pub use rent::RentPayment;
pub use tenants::{MoveIn, MoveOut};

/// Every backend endpoint the front end consumes.
///
/// Each call is a single independent round trip: no retry, no deduplication
/// of identical in-flight calls.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn login_landlord(&self, credentials: &Credentials) -> Result<LandlordLogin, ApiError>;
    async fn login_tenant(&self, credentials: &Credentials) -> Result<TenantLogin, ApiError>;
    async fn signup_landlord(&self, signup: &Signup) -> Result<Value, ApiError>;
    async fn signup_tenant(&self, signup: &Signup) -> Result<Value, ApiError>;

    async fn list_houses(&self, landlord_id: Option<i64>) -> Result<Vec<House>, ApiError>;
    async fn add_house(&self, house: &NewHouse) -> Result<Value, ApiError>;

    async fn list_tenants(&self, house_id: i64) -> Result<Vec<Tenant>, ApiError>;
    async fn move_in(&self, request: &MoveIn) -> Result<Value, ApiError>;
    async fn move_out(&self, request: &MoveOut) -> Result<Value, ApiError>;

    async fn pay_rent(&self, payment: &RentPayment) -> Result<Value, ApiError>;
    async fn rent_status(&self, landlord_id: i64) -> Result<Vec<RentStatus>, ApiError>;

    async fn submit_complaint(&self, complaint: &NewComplaint) -> Result<Value, ApiError>;
    async fn list_complaints(&self, scope: ComplaintScope) -> Result<Vec<Complaint>, ApiError>;
    async fn update_complaint_status(
        &self,
        update: &ComplaintStatusUpdate,
    ) -> Result<Value, ApiError>;
}

/// JSON-over-HTTP client for the property-management backend.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str, query: &[(&str, String)]) -> String {
        if query.is_empty() {
            return format!("{}{path}", self.base_url);
        }
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())))
            .finish();
        format!("{}{path}?{encoded}", self.base_url)
    }

    /// GET `path` and return the parsed JSON body unchanged.
    pub async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ApiError> {
        let url = self.url(path, query);
        tracing::debug!("GET {url}");
        let resp = self
            .client
            .get(&url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .inspect_err(|e| tracing::warn!("GET {path} failed: {e}"))?;
        read_body("GET", path, resp).await
    }

    /// POST `body` as JSON to `path` and return the parsed JSON body unchanged.
    pub async fn post_json<B: Serialize + ?Sized + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        let url = self.url(path, &[]);
        tracing::debug!("POST {url}");
        let resp = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .inspect_err(|e| tracing::warn!("POST {path} failed: {e}"))?;
        read_body("POST", path, resp).await
    }
}

async fn read_body(method: &str, path: &str, resp: reqwest::Response) -> Result<Value, ApiError> {
    let status = resp.status();
    let text = resp.text().await?;

    if !status.is_success() {
        let message = error::error_message(&text);
        tracing::warn!("{method} {path} returned {status}: {message}");
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }

    if text.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(&text).map_err(|e| {
        tracing::warn!("{method} {path} returned a non-JSON body: {e}");
        ApiError::UnexpectedShape(format!("response body is not JSON: {e}"))
    })
}

#[async_trait]
impl Backend for ApiClient {
    async fn login_landlord(&self, credentials: &Credentials) -> Result<LandlordLogin, ApiError> {
        ApiClient::login_landlord(self, credentials).await
    }

    async fn login_tenant(&self, credentials: &Credentials) -> Result<TenantLogin, ApiError> {
        ApiClient::login_tenant(self, credentials).await
    }

    async fn signup_landlord(&self, signup: &Signup) -> Result<Value, ApiError> {
        ApiClient::signup_landlord(self, signup).await
    }

    async fn signup_tenant(&self, signup: &Signup) -> Result<Value, ApiError> {
        ApiClient::signup_tenant(self, signup).await
    }

    async fn list_houses(&self, landlord_id: Option<i64>) -> Result<Vec<House>, ApiError> {
        ApiClient::list_houses(self, landlord_id).await
    }

    async fn add_house(&self, house: &NewHouse) -> Result<Value, ApiError> {
        ApiClient::add_house(self, house).await
    }

    async fn list_tenants(&self, house_id: i64) -> Result<Vec<Tenant>, ApiError> {
        ApiClient::list_tenants(self, house_id).await
    }

    async fn move_in(&self, request: &MoveIn) -> Result<Value, ApiError> {
        ApiClient::move_in(self, request).await
    }

    async fn move_out(&self, request: &MoveOut) -> Result<Value, ApiError> {
        ApiClient::move_out(self, request).await
    }

    async fn pay_rent(&self, payment: &RentPayment) -> Result<Value, ApiError> {
        ApiClient::pay_rent(self, payment).await
    }

    async fn rent_status(&self, landlord_id: i64) -> Result<Vec<RentStatus>, ApiError> {
        ApiClient::rent_status(self, landlord_id).await
    }

    async fn submit_complaint(&self, complaint: &NewComplaint) -> Result<Value, ApiError> {
        ApiClient::submit_complaint(self, complaint).await
    }

    async fn list_complaints(&self, scope: ComplaintScope) -> Result<Vec<Complaint>, ApiError> {
        ApiClient::list_complaints(self, scope).await
    }

    async fn update_complaint_status(
        &self,
        update: &ComplaintStatusUpdate,
    ) -> Result<Value, ApiError> {
        ApiClient::update_complaint_status(self, update).await
    }
}
