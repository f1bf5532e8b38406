mod address;
mod alt;
mod bis_entity;
mod denied_person;
mod sdn;
mod sectoral_sanction;

pub use address::*;
pub use alt::*;
pub use bis_entity::*;
pub use denied_person::*;
pub use sdn::*;
pub use sectoral_sanction::*;

use serde::Serialize;

/// The search response always carries all six lists; collections that were
/// not part of the query stay empty rather than absent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResponse {
    #[serde(rename = "SDNs")]
    pub sdns: Vec<SdnDto>,
    #[serde(rename = "altNames")]
    pub alt_names: Vec<AltDto>,
    pub addresses: Vec<AddressDto>,
    #[serde(rename = "deniedPersons")]
    pub denied_persons: Vec<DeniedPersonDto>,
    #[serde(rename = "sectoralSanctions")]
    pub sectoral_sanctions: Vec<SectoralSanctionDto>,
    #[serde(rename = "bisEntities")]
    pub bis_entities: Vec<BisEntityDto>,
}

/// Match weights go over the wire rounded to five decimal places.
pub(crate) fn round_weight(weight: f64) -> f64 {
    (weight * 100_000.0).round() / 100_000.0
}

pub(crate) fn strings(values: &[std::sync::Arc<str>]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
