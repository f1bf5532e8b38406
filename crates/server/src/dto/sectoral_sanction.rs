use screener::repository::SectoralSanction;
use serde::Serialize;

use crate::dto::{round_weight, strings};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectoralSanctionDto {
    #[serde(rename = "entityID")]
    pub entity_id: String,
    #[serde(rename = "type")]
    pub entity_type: String,
    pub programs: Vec<String>,
    pub name: String,
    pub addresses: Vec<String>,
    pub remarks: Vec<String>,
    pub alternate_names: Vec<String>,
    pub ids: Vec<String>,
    #[serde(rename = "sourceListURL")]
    pub source_list_url: String,
    #[serde(rename = "sourceInfoURL")]
    pub source_info_url: String,
    #[serde(rename = "match")]
    pub weight: f64,
}

impl SectoralSanctionDto {
    pub fn from(sanction: &SectoralSanction, weight: f64) -> Self {
        Self {
            entity_id: sanction.entity_id.to_string(),
            entity_type: sanction.entity_type.to_string(),
            programs: strings(&sanction.programs),
            name: sanction.name.to_string(),
            addresses: strings(&sanction.addresses),
            remarks: strings(&sanction.remarks),
            alternate_names: strings(&sanction.alternate_names),
            ids: strings(&sanction.ids),
            source_list_url: sanction.source_list_url.to_string(),
            source_info_url: sanction.source_info_url.to_string(),
            weight: round_weight(weight),
        }
    }
}
