use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use rentdesk::api::{
    ApiError, Backend, ComplaintScope, ComplaintStatusUpdate, Credentials, LandlordLogin, MoveIn,
    MoveOut, NewComplaint, NewHouse, RentPayment, Signup, TenantLogin,
};
use rentdesk::models::{Complaint, ComplaintStatus, House, RentStatus, Tenant};

/// One backend call as seen by [`MemoryBackend`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    LoginLandlord(String),
    LoginTenant(String),
    SignupLandlord(String),
    SignupTenant(String),
    ListHouses(Option<i64>),
    AddHouse(String),
    ListTenants(i64),
    MoveIn(i64, i64),
    MoveOut(i64),
    PayRent(i64),
    RentStatus(i64),
    SubmitComplaint(i64, String),
    ListComplaints(ComplaintScope),
    UpdateComplaintStatus(i64, ComplaintStatus),
}

#[derive(Default)]
pub struct MemoryState {
    pub houses: Vec<House>,
    pub tenants: Vec<Tenant>,
    pub complaints: Vec<Complaint>,
    pub rent_status: Vec<RentStatus>,
    pub calls: Vec<Call>,
    /// Endpoints (by method name) that answer with a 500.
    pub failing: HashSet<&'static str>,
}

/// In-process [`Backend`] for driving page controllers without HTTP.
#[derive(Default)]
pub struct MemoryBackend {
    pub state: Mutex<MemoryState>,
}

pub fn house(id: i64, address: &str, rent_price: f64, landlord_id: i64) -> House {
    House {
        id,
        address: address.to_string(),
        num_apartments: 4,
        rent_price,
        vacant_apartments: 2,
        landlord_id: Some(landlord_id),
    }
}

pub fn complaint(id: i64, house_id: i64, description: &str) -> Complaint {
    Complaint {
        id,
        tenant_id: Some(5),
        house_id: Some(house_id),
        description: description.to_string(),
        status: ComplaintStatus::Pending,
    }
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Three houses (Elm 900, Oak 1500, Pine 2000) and a few tenants and
    /// complaints around them.
    pub fn seeded() -> Self {
        let backend = Self::new();
        {
            let mut s = backend.state.lock().unwrap();
            s.houses = vec![
                house(1, "1 Elm St", 900.0, 42),
                house(2, "2 Oak Ave", 1500.0, 42),
                house(3, "3 Pine Rd", 2000.0, 42),
            ];
            s.tenants = vec![
                Tenant { id: 5, name: "Ada".to_string(), house_id: Some(3) },
                Tenant { id: 6, name: "Grace".to_string(), house_id: Some(1) },
            ];
            s.complaints = vec![
                complaint(11, 3, "Leaking tap"),
                complaint(12, 1, "Broken heater"),
            ];
            s.rent_status = vec![RentStatus {
                tenant_id: 5,
                tenant_name: "Ada".to_string(),
                rent_paid: true,
            }];
        }
        backend
    }

    pub fn fail(&self, endpoint: &'static str) {
        self.state.lock().unwrap().failing.insert(endpoint);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    fn record(&self, endpoint: &'static str, call: Call) -> Result<(), ApiError> {
        let mut s = self.state.lock().unwrap();
        s.calls.push(call);
        if s.failing.contains(endpoint) {
            return Err(ApiError::Status {
                status: 500,
                message: format!("{endpoint} is down"),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl Backend for MemoryBackend {
    async fn login_landlord(&self, credentials: &Credentials) -> Result<LandlordLogin, ApiError> {
        self.record("login_landlord", Call::LoginLandlord(credentials.email.clone()))?;
        Ok(LandlordLogin { landlord_id: 42 })
    }

    async fn login_tenant(&self, credentials: &Credentials) -> Result<TenantLogin, ApiError> {
        self.record("login_tenant", Call::LoginTenant(credentials.email.clone()))?;
        Ok(TenantLogin {
            token: "memory-token".to_string(),
        })
    }

    async fn signup_landlord(&self, signup: &Signup) -> Result<Value, ApiError> {
        self.record("signup_landlord", Call::SignupLandlord(signup.email.clone()))?;
        Ok(json!({ "message": "ok" }))
    }

    async fn signup_tenant(&self, signup: &Signup) -> Result<Value, ApiError> {
        self.record("signup_tenant", Call::SignupTenant(signup.email.clone()))?;
        Ok(json!({ "message": "ok" }))
    }

    async fn list_houses(&self, landlord_id: Option<i64>) -> Result<Vec<House>, ApiError> {
        self.record("list_houses", Call::ListHouses(landlord_id))?;
        let s = self.state.lock().unwrap();
        Ok(s.houses
            .iter()
            .filter(|h| landlord_id.is_none() || h.landlord_id == landlord_id)
            .cloned()
            .collect())
    }

    async fn add_house(&self, new: &NewHouse) -> Result<Value, ApiError> {
        self.record("add_house", Call::AddHouse(new.address.clone()))?;
        let mut s = self.state.lock().unwrap();
        let id = s.houses.len() as i64 + 1;
        s.houses.push(House {
            id,
            address: new.address.clone(),
            num_apartments: new.num_apartments,
            rent_price: new.rent_price,
            vacant_apartments: new.num_apartments,
            landlord_id: Some(new.landlord_id),
        });
        Ok(json!({ "id": id }))
    }

    async fn list_tenants(&self, house_id: i64) -> Result<Vec<Tenant>, ApiError> {
        self.record("list_tenants", Call::ListTenants(house_id))?;
        Ok(self.state.lock().unwrap().tenants.clone())
    }

    async fn move_in(&self, request: &MoveIn) -> Result<Value, ApiError> {
        self.record("move_in", Call::MoveIn(request.tenant_id, request.house_id))?;
        Ok(json!({ "message": "ok" }))
    }

    async fn move_out(&self, request: &MoveOut) -> Result<Value, ApiError> {
        self.record("move_out", Call::MoveOut(request.tenant_id))?;
        Ok(json!({ "message": "ok" }))
    }

    async fn pay_rent(&self, payment: &RentPayment) -> Result<Value, ApiError> {
        self.record("pay_rent", Call::PayRent(payment.tenant_id))?;
        Ok(json!({ "message": "ok" }))
    }

    async fn rent_status(&self, landlord_id: i64) -> Result<Vec<RentStatus>, ApiError> {
        self.record("rent_status", Call::RentStatus(landlord_id))?;
        Ok(self.state.lock().unwrap().rent_status.clone())
    }

    async fn submit_complaint(&self, complaint: &NewComplaint) -> Result<Value, ApiError> {
        self.record(
            "submit_complaint",
            Call::SubmitComplaint(complaint.tenant_id, complaint.complaint.clone()),
        )?;
        Ok(json!({ "message": "ok" }))
    }

    async fn list_complaints(&self, scope: ComplaintScope) -> Result<Vec<Complaint>, ApiError> {
        self.record("list_complaints", Call::ListComplaints(scope))?;
        let s = self.state.lock().unwrap();
        Ok(s.complaints
            .iter()
            .filter(|c| match scope {
                ComplaintScope::House(id) => c.house_id == Some(id),
                ComplaintScope::Landlord(_) | ComplaintScope::All => true,
            })
            .cloned()
            .collect())
    }

    async fn update_complaint_status(
        &self,
        update: &ComplaintStatusUpdate,
    ) -> Result<Value, ApiError> {
        self.record(
            "update_complaint_status",
            Call::UpdateComplaintStatus(update.complaint_id, update.status),
        )?;
        let mut s = self.state.lock().unwrap();
        match s.complaints.iter_mut().find(|c| c.id == update.complaint_id) {
            Some(c) => {
                c.status = update.status;
                Ok(json!({ "id": c.id }))
            }
            None => Err(ApiError::Status {
                status: 404,
                message: "Complaint not found".to_string(),
            }),
        }
    }
}
