use serde::Deserialize;

use super::{FormError, is_blank, parse_positive};
use crate::api::NewHouse;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddHouseForm {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub num_apartments: String,
    #[serde(default)]
    pub rent_price: String,
}

impl AddHouseForm {
    pub fn validate(&self, landlord_id: i64) -> Result<NewHouse, FormError> {
        if is_blank(&self.address) || is_blank(&self.num_apartments) || is_blank(&self.rent_price) {
            return Err("Please enter the address, number of apartments and rent price.".into());
        }

        let num_apartments = self
            .num_apartments
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| {
                FormError::new("Number of apartments must be a positive whole number.")
            })?;
        let rent_price = parse_positive(&self.rent_price, "Rent price")?;

        Ok(NewHouse {
            address: self.address.trim().to_string(),
            num_apartments,
            rent_price,
            landlord_id,
        })
    }
}
