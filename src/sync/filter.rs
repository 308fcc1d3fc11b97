use crate::models::House;

/// Client-side house search: address substring plus an optional rent ceiling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HouseFilter {
    pub query: String,
    pub max_rent: Option<f64>,
}

impl HouseFilter {
    pub fn new(query: &str, max_rent: Option<f64>) -> Self {
        Self {
            query: query.to_string(),
            max_rent,
        }
    }

    /// Build from raw text inputs. A blank or unparsable ceiling admits all.
    pub fn from_inputs(query: &str, max_rent: &str) -> Self {
        let max_rent = max_rent.trim().parse::<f64>().ok().filter(|m| m.is_finite());
        Self::new(query, max_rent)
    }

    pub fn matches(&self, house: &House) -> bool {
        let needle = self.query.to_lowercase();
        let address_matches = house.address.to_lowercase().contains(&needle);
        let rent_matches = self.max_rent.is_none_or(|max| house.rent_price <= max);
        address_matches && rent_matches
    }

    pub fn apply<'a>(&self, houses: &'a [House]) -> Vec<&'a House> {
        houses.iter().filter(|house| self.matches(house)).collect()
    }
}
