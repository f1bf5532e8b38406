use screener::repository::AlternateIdentity;
use serde::Serialize;

use crate::dto::round_weight;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AltDto {
    #[serde(rename = "entityID")]
    pub entity_id: String,
    #[serde(rename = "alternateID")]
    pub alternate_id: String,
    pub alternate_type: String,
    pub alternate_name: String,
    pub alternate_remarks: String,
    #[serde(rename = "match")]
    pub weight: f64,
}

impl AltDto {
    pub fn from(alt: &AlternateIdentity, weight: f64) -> Self {
        Self {
            entity_id: alt.entity_id.to_string(),
            alternate_id: alt.alternate_id.to_string(),
            alternate_type: alt.alternate_type.to_string(),
            alternate_name: alt.name.to_string(),
            alternate_remarks: alt.remarks.to_string(),
            weight: round_weight(weight),
        }
    }
}
