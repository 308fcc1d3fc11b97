use serde::Deserialize;

use super::{FormError, is_blank, parse_id, parse_positive};
use crate::api::{MoveIn, MoveOut, RentPayment};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MoveInForm {
    #[serde(default)]
    pub tenant_id: String,
    #[serde(default)]
    pub house_id: String,
}

impl MoveInForm {
    pub fn validate(&self) -> Result<MoveIn, FormError> {
        if is_blank(&self.tenant_id) || is_blank(&self.house_id) {
            return Err("Please provide both Tenant ID and House ID.".into());
        }
        Ok(MoveIn {
            tenant_id: parse_id(&self.tenant_id, "Tenant ID")?,
            house_id: parse_id(&self.house_id, "House ID")?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MoveOutForm {
    #[serde(default)]
    pub tenant_id: String,
}

impl MoveOutForm {
    pub fn validate(&self) -> Result<MoveOut, FormError> {
        if is_blank(&self.tenant_id) {
            return Err("Please enter a valid Tenant ID.".into());
        }
        Ok(MoveOut {
            tenant_id: parse_id(&self.tenant_id, "Tenant ID")?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RentPaymentForm {
    #[serde(default)]
    pub tenant_id: String,
    #[serde(default)]
    pub amount: String,
}

impl RentPaymentForm {
    pub fn validate(&self) -> Result<RentPayment, FormError> {
        if is_blank(&self.tenant_id) || is_blank(&self.amount) {
            return Err("Please enter a valid Tenant ID and rent amount.".into());
        }
        Ok(RentPayment {
            tenant_id: parse_id(&self.tenant_id, "Tenant ID")?,
            amount: parse_positive(&self.amount, "Rent amount")?,
        })
    }
}
