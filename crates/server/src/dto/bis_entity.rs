use screener::repository::BisEntity;
use serde::Serialize;

use crate::dto::{round_weight, strings};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BisEntityDto {
    pub name: String,
    pub alternate_names: Vec<String>,
    pub addresses: Vec<String>,
    pub start_date: String,
    pub license_requirement: String,
    pub license_policy: String,
    #[serde(rename = "FRNotice")]
    pub federal_register_notice: String,
    #[serde(rename = "sourceListURL")]
    pub source_list_url: String,
    #[serde(rename = "sourceInfoURL")]
    pub source_info_url: String,
    #[serde(rename = "match")]
    pub weight: f64,
}

impl BisEntityDto {
    pub fn from(entity: &BisEntity, weight: f64) -> Self {
        Self {
            name: entity.name.to_string(),
            alternate_names: strings(&entity.alternate_names),
            addresses: strings(&entity.addresses),
            start_date: entity.start_date.to_string(),
            license_requirement: entity.license_requirement.to_string(),
            license_policy: entity.license_policy.to_string(),
            federal_register_notice: entity.federal_register_notice.to_string(),
            source_list_url: entity.source_list_url.to_string(),
            source_info_url: entity.source_info_url.to_string(),
            weight: round_weight(weight),
        }
    }
}
