use crate::api::Backend;
use crate::forms::{ComplaintForm, MoveInForm, MoveOutForm, RentPaymentForm};
use crate::models::House;
use crate::navigation::Route;
use crate::sync::{HouseFilter, ListView};

use super::Submission;

/// House search with the move-in form.
pub struct MoveInPage {
    pub houses: ListView<House>,
    pub filter: HouseFilter,
    pub form: MoveInForm,
}

impl MoveInPage {
    pub fn new(filter: HouseFilter, form: MoveInForm) -> Self {
        Self {
            houses: ListView::new("houses"),
            filter,
            form,
        }
    }

    pub async fn mount(&mut self, backend: &dyn Backend) {
        self.houses.load(backend.list_houses(None)).await;
    }

    pub fn visible_houses(&self) -> Vec<&House> {
        self.filter.apply(self.houses.items())
    }

    /// Copy a house id into the form. Does not navigate.
    pub fn select_house(&mut self, house_id: i64) {
        self.form.house_id = house_id.to_string();
    }

    pub async fn submit(&self, backend: &dyn Backend) -> Submission {
        let request = match self.form.validate() {
            Ok(r) => r,
            Err(e) => return Submission::Rejected(e),
        };

        match backend.move_in(&request).await {
            Ok(_) => {
                tracing::info!(
                    tenant_id = request.tenant_id,
                    house_id = request.house_id,
                    "Tenant moved in"
                );
                Submission::Navigate(Route::RentPayment {
                    tenant_id: Some(request.tenant_id),
                    house_id: Some(request.house_id),
                })
            }
            Err(e) => {
                tracing::warn!(tenant_id = request.tenant_id, "Move-in failed: {e}");
                Submission::Failed(format!("Failed to move in: {}", e.detail()))
            }
        }
    }
}

pub async fn move_out(backend: &dyn Backend, form: &MoveOutForm) -> Submission {
    let request = match form.validate() {
        Ok(r) => r,
        Err(e) => return Submission::Rejected(e),
    };

    match backend.move_out(&request).await {
        Ok(_) => {
            tracing::info!(tenant_id = request.tenant_id, "Tenant moved out");
            Submission::Navigate(Route::TenantDashboard)
        }
        Err(e) => {
            tracing::warn!(tenant_id = request.tenant_id, "Move-out failed: {e}");
            Submission::Failed(format!("Failed to move out: {}", e.detail()))
        }
    }
}

pub async fn pay_rent(backend: &dyn Backend, form: &RentPaymentForm) -> Submission {
    let payment = match form.validate() {
        Ok(p) => p,
        Err(e) => return Submission::Rejected(e),
    };

    match backend.pay_rent(&payment).await {
        Ok(_) => {
            tracing::info!(tenant_id = payment.tenant_id, amount = payment.amount, "Rent paid");
            Submission::Navigate(Route::TenantDashboard)
        }
        Err(e) => {
            tracing::warn!(tenant_id = payment.tenant_id, "Rent payment failed: {e}");
            Submission::Failed(format!("Payment failed: {}", e.detail()))
        }
    }
}

pub async fn submit_complaint(backend: &dyn Backend, form: &ComplaintForm) -> Submission {
    let complaint = match form.validate() {
        Ok(c) => c,
        Err(e) => return Submission::Rejected(e),
    };

    match backend.submit_complaint(&complaint).await {
        Ok(_) => {
            tracing::info!(tenant_id = complaint.tenant_id, "Complaint submitted");
            Submission::Navigate(Route::TenantDashboard)
        }
        Err(e) => {
            tracing::warn!(tenant_id = complaint.tenant_id, "Complaint submission failed: {e}");
            Submission::Failed(format!("Failed to submit complaint: {}", e.detail()))
        }
    }
}
