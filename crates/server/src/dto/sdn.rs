use screener::repository::Sdn;
use serde::Serialize;

use crate::dto::round_weight;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SdnDto {
    #[serde(rename = "entityID")]
    pub entity_id: String,
    pub sdn_name: String,
    pub sdn_type: String,
    pub program: String,
    pub title: String,
    pub call_sign: String,
    pub vessel_type: String,
    pub tonnage: String,
    pub gross_registered_tonnage: String,
    pub vessel_flag: String,
    pub vessel_owner: String,
    pub remarks: String,
    #[serde(rename = "match")]
    pub weight: f64,
}

impl SdnDto {
    pub fn from(sdn: &Sdn, weight: f64) -> Self {
        Self {
            entity_id: sdn.entity_id.to_string(),
            sdn_name: sdn.name.to_string(),
            sdn_type: sdn.sdn_type.to_string(),
            program: sdn.program.to_string(),
            title: sdn.title.to_string(),
            call_sign: sdn.call_sign.to_string(),
            vessel_type: sdn.vessel_type.to_string(),
            tonnage: sdn.tonnage.to_string(),
            gross_registered_tonnage: sdn.gross_registered_tonnage.to_string(),
            vessel_flag: sdn.vessel_flag.to_string(),
            vessel_owner: sdn.vessel_owner.to_string(),
            remarks: sdn.remarks.to_string(),
            weight: round_weight(weight),
        }
    }
}
