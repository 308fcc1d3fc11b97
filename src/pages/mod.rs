//! Page controllers.
//!
//! Each page owns its list views and turns form input into at most one
//! mutation, followed by a navigation or a re-fetch. Controllers know nothing
//! about HTTP serving; the `views` module mounts them per request.

pub mod auth;
pub mod landlord;
pub mod tenant;

use crate::forms::FormError;
use crate::navigation::Route;

pub use landlord::{HouseManagement, LandlordDashboard};
pub use tenant::MoveInPage;

/// Result of submitting a form.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Mutation succeeded; continue at the given page.
    Navigate(Route),
    /// Mutation succeeded and the owning list was re-fetched in place.
    Refreshed,
    /// Client-side validation failed; nothing was sent.
    Rejected(FormError),
    /// The backend refused or could not be reached.
    Failed(String),
}

impl Submission {
    /// Inline message to display, if the submission did not go through.
    pub fn error_message(&self) -> Option<String> {
        match self {
            Submission::Rejected(e) => Some(e.to_string()),
            Submission::Failed(msg) => Some(msg.clone()),
            Submission::Navigate(_) | Submission::Refreshed => None,
        }
    }
}
