//! Form input as typed by the user, and its validation into backend requests.
//!
//! Validation runs before any network call; a failing form never reaches the
//! transport layer.

pub mod auth;
pub mod complaint;
pub mod house;
pub mod tenancy;

use std::fmt;

pub use auth::{LoginForm, SignupForm};
pub use complaint::{ComplaintForm, ComplaintStatusForm};
pub use house::AddHouseForm;
pub use tenancy::{MoveInForm, MoveOutForm, RentPaymentForm};

/// Inline message shown next to a rejected form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormError(pub String);

impl FormError {
    pub fn new(message: impl Into<String>) -> Self {
        FormError(message.into())
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FormError {
    fn from(s: &str) -> Self {
        FormError(s.to_string())
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn parse_id(value: &str, label: &str) -> Result<i64, FormError> {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| FormError(format!("{label} must be a positive number.")))
}

fn parse_positive(value: &str, label: &str) -> Result<f64, FormError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n > 0.0)
        .ok_or_else(|| FormError(format!("{label} must be greater than zero.")))
}
