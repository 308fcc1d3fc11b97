use crate::api::{Backend, ComplaintScope};
use crate::forms::{AddHouseForm, ComplaintStatusForm, FormError};
use crate::models::{Complaint, House, RentStatus, Tenant};
use crate::session::SessionStore;
use crate::sync::ListView;

use super::Submission;

/// Landlord overview: owned houses, rent status, complaints, and the tenants
/// and complaints of one selected house.
pub struct LandlordDashboard {
    landlord_id: Option<i64>,
    selected_house: Option<i64>,
    pub houses: ListView<House>,
    pub rent_status: ListView<RentStatus>,
    pub complaints: ListView<Complaint>,
    pub tenants: ListView<Tenant>,
}

impl LandlordDashboard {
    pub fn new(session: &impl SessionStore) -> Self {
        Self {
            landlord_id: session.landlord_id(),
            selected_house: None,
            houses: ListView::new("houses"),
            rent_status: ListView::new("rent status"),
            complaints: ListView::new("complaints"),
            tenants: ListView::new("tenants"),
        }
    }

    /// Preselect a house without fetching anything.
    pub fn with_selected_house(mut self, house_id: Option<i64>) -> Self {
        self.selected_house = house_id;
        self
    }

    pub fn landlord_id(&self) -> Option<i64> {
        self.landlord_id
    }

    pub fn selected_house(&self) -> Option<i64> {
        self.selected_house
    }

    /// Initial load. Landlord-scoped lists are skipped without a landlord
    /// session.
    pub async fn mount(&mut self, backend: &dyn Backend) {
        if let Some(landlord_id) = self.landlord_id {
            self.houses.load(backend.list_houses(Some(landlord_id))).await;
            self.rent_status.load(backend.rent_status(landlord_id)).await;
        } else {
            tracing::debug!("No landlord session; skipping dashboard fetches");
        }

        if self.selected_house.is_some() {
            self.load_house_details(backend).await;
        } else {
            self.refresh_complaints(backend).await;
        }
    }

    /// Switch the selected house and re-fetch its tenants and complaints.
    pub async fn select_house(&mut self, backend: &dyn Backend, house_id: Option<i64>) {
        self.selected_house = house_id;
        if house_id.is_some() {
            self.load_house_details(backend).await;
        } else {
            self.tenants.reset();
            self.refresh_complaints(backend).await;
        }
    }

    async fn load_house_details(&mut self, backend: &dyn Backend) {
        let Some(house_id) = self.selected_house else {
            return;
        };
        // The backend may ignore the filter; keep only tenants of this house.
        let ticket = self.tenants.begin_fetch();
        let tenants = backend.list_tenants(house_id).await.map(|all| {
            all.into_iter()
                .filter(|t| t.house_id == Some(house_id))
                .collect()
        });
        self.tenants.commit(ticket, tenants);
        self.refresh_complaints(backend).await;
    }

    fn complaint_scope(&self) -> Option<ComplaintScope> {
        match (self.selected_house, self.landlord_id) {
            (Some(house_id), _) => Some(ComplaintScope::House(house_id)),
            (None, Some(landlord_id)) => Some(ComplaintScope::Landlord(landlord_id)),
            (None, None) => None,
        }
    }

    /// Re-fetch complaints for the selected house, or all of the landlord's.
    pub async fn refresh_complaints(&mut self, backend: &dyn Backend) {
        match self.complaint_scope() {
            Some(scope) => {
                self.complaints.load(backend.list_complaints(scope)).await;
            }
            None => tracing::debug!("No house or landlord selected; skipping complaints"),
        }
    }

    /// Change a complaint's status, then re-fetch the complaints on screen.
    pub async fn update_complaint_status(
        &mut self,
        backend: &dyn Backend,
        form: &ComplaintStatusForm,
    ) -> Submission {
        let update = match form.validate() {
            Ok(u) => u,
            Err(e) => return Submission::Rejected(e),
        };

        if let Err(e) = backend.update_complaint_status(&update).await {
            tracing::warn!(
                complaint_id = update.complaint_id,
                "Failed to update complaint status: {e}"
            );
            return Submission::Failed(format!(
                "Failed to update complaint status: {}",
                e.detail()
            ));
        }

        tracing::info!(
            complaint_id = update.complaint_id,
            status = %update.status,
            "Complaint status updated"
        );
        self.refresh_complaints(backend).await;
        Submission::Refreshed
    }
}

/// The landlord's house list with the add-house form.
pub struct HouseManagement {
    landlord_id: Option<i64>,
    pub houses: ListView<House>,
}

impl HouseManagement {
    pub fn new(session: &impl SessionStore) -> Self {
        Self {
            landlord_id: session.landlord_id(),
            houses: ListView::new("houses"),
        }
    }

    pub fn landlord_id(&self) -> Option<i64> {
        self.landlord_id
    }

    pub async fn mount(&mut self, backend: &dyn Backend) {
        match self.landlord_id {
            Some(landlord_id) => {
                self.houses.load(backend.list_houses(Some(landlord_id))).await;
            }
            None => tracing::debug!("No landlord session; skipping house fetch"),
        }
    }

    /// Create a house for the logged-in landlord and refresh the list.
    pub async fn add_house(&mut self, backend: &dyn Backend, form: &AddHouseForm) -> Submission {
        let Some(landlord_id) = self.landlord_id else {
            return Submission::Rejected(FormError::new("Log in as a landlord to add houses."));
        };
        let house = match form.validate(landlord_id) {
            Ok(h) => h,
            Err(e) => return Submission::Rejected(e),
        };

        if let Err(e) = backend.add_house(&house).await {
            tracing::warn!(landlord_id, "Failed to add house: {e}");
            return Submission::Failed(format!("Failed to add house: {}", e.detail()));
        }

        tracing::info!(landlord_id, address = %house.address, "House added");
        self.houses.load(backend.list_houses(Some(landlord_id))).await;
        Submission::Refreshed
    }
}
