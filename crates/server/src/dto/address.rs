use screener::repository::Address;
use serde::Serialize;

use crate::dto::round_weight;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    #[serde(rename = "entityID")]
    pub entity_id: String,
    #[serde(rename = "addressID")]
    pub address_id: String,
    pub address: String,
    pub city_state_province_postal_code: String,
    pub country: String,
    pub address_remarks: String,
    #[serde(rename = "match")]
    pub weight: f64,
}

impl AddressDto {
    pub fn from(address: &Address, weight: f64) -> Self {
        Self {
            entity_id: address.entity_id.to_string(),
            address_id: address.address_id.to_string(),
            address: address.address.to_string(),
            city_state_province_postal_code: address
                .city_state_province_postal_code
                .to_string(),
            country: address.country.to_string(),
            address_remarks: address.remarks.to_string(),
            weight: round_weight(weight),
        }
    }
}
