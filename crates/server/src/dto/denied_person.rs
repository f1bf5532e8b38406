use screener::repository::DeniedPerson;
use serde::Serialize;

use crate::dto::round_weight;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeniedPersonDto {
    pub name: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    pub effective_date: String,
    pub expiration_date: String,
    pub standard_order: String,
    pub last_update: String,
    pub action: String,
    pub fr_citation: String,
    #[serde(rename = "match")]
    pub weight: f64,
}

impl DeniedPersonDto {
    pub fn from(person: &DeniedPerson, weight: f64) -> Self {
        Self {
            name: person.name.to_string(),
            street_address: person.street_address.to_string(),
            city: person.city.to_string(),
            state: person.state.to_string(),
            country: person.country.to_string(),
            postal_code: person.postal_code.to_string(),
            effective_date: person.effective_date.to_string(),
            expiration_date: person.expiration_date.to_string(),
            standard_order: person.standard_order.to_string(),
            last_update: person.last_update.to_string(),
            action: person.action.to_string(),
            fr_citation: person.fr_citation.to_string(),
            weight: round_weight(weight),
        }
    }
}
