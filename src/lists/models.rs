use std::sync::Arc;

use serde::Deserialize;

use crate::{
    lists::config::{EL_INFO_URL, EL_LIST_URL, SSI_INFO_URL, SSI_LIST_URL},
    repository::{
        Address, AlternateIdentity, BisEntity, DeniedPerson, SectoralSanction, Sdn,
    },
    shared::normalize::{precompute, reorder_sdn_name},
};

/// The SDN files mark empty columns with a literal `-0-`.
fn scrub(value: String) -> Arc<str> {
    let trimmed = value.trim();
    if trimmed == "-0-" {
        return "".into();
    }
    trimmed.into()
}

/// Multi-valued columns in the SSI and EL exports are `;`-separated.
fn split_multi(value: &str) -> Vec<Arc<str>> {
    value
        .split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty() && *part != "-0-")
        .map(Into::into)
        .collect()
}

/// One row of the header-less `sdn.csv`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SdnRow {
    pub entity_id: String,
    pub name: String,
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
}

impl From<SdnRow> for Sdn {
    fn from(row: SdnRow) -> Self {
        // Keyed twice: the name as listed, and with an inverted
        // individual name put back in natural order.
        let name_key = precompute(&row.name);
        let match_key = precompute(&reorder_sdn_name(&row.name, &row.sdn_type));
        Self {
            entity_id: scrub(row.entity_id),
            name: scrub(row.name),
            sdn_type: scrub(row.sdn_type),
            program: scrub(row.program),
            title: scrub(row.title),
            call_sign: scrub(row.call_sign),
            vessel_type: scrub(row.vessel_type),
            tonnage: scrub(row.tonnage),
            gross_registered_tonnage: scrub(row.gross_registered_tonnage),
            vessel_flag: scrub(row.vessel_flag),
            vessel_owner: scrub(row.vessel_owner),
            remarks: scrub(row.remarks),
            name_key: name_key.into(),
            match_key: match_key.into(),
        }
    }
}

/// One row of the header-less `add.csv`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressRow {
    pub entity_id: String,
    pub address_id: String,
    pub address: String,
    pub city_state_province_postal_code: String,
    pub country: String,
    pub remarks: String,
}

impl From<AddressRow> for Address {
    fn from(row: AddressRow) -> Self {
        let address_key = precompute(&row.address);
        let city_state_key = precompute(&row.city_state_province_postal_code);
        let country_key = precompute(&row.country);
        Self {
            entity_id: scrub(row.entity_id),
            address_id: scrub(row.address_id),
            address: scrub(row.address),
            city_state_province_postal_code: scrub(row.city_state_province_postal_code),
            country: scrub(row.country),
            remarks: scrub(row.remarks),
            address_key: address_key.into(),
            city_state_key: city_state_key.into(),
            country_key: country_key.into(),
        }
    }
}

/// One row of the header-less `alt.csv`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AltRow {
    pub entity_id: String,
    pub alternate_id: String,
    pub alternate_type: String,
    pub name: String,
    pub remarks: String,
}

impl From<AltRow> for AlternateIdentity {
    fn from(row: AltRow) -> Self {
        let match_key = precompute(&row.name);
        Self {
            entity_id: scrub(row.entity_id),
            alternate_id: scrub(row.alternate_id),
            alternate_type: scrub(row.alternate_type),
            name: scrub(row.name),
            remarks: scrub(row.remarks),
            match_key: match_key.into(),
        }
    }
}

/// One row of the tab-separated Denied Persons List.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeniedPersonRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Street_Address")]
    pub street_address: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Postal_Code")]
    pub postal_code: String,
    #[serde(rename = "Effective_Date")]
    pub effective_date: String,
    #[serde(rename = "Expiration_Date")]
    pub expiration_date: String,
    #[serde(rename = "Standard_Order")]
    pub standard_order: String,
    #[serde(rename = "Last_Update")]
    pub last_update: String,
    #[serde(rename = "Action")]
    pub action: String,
    #[serde(rename = "FR_Citation")]
    pub fr_citation: String,
}

impl From<DeniedPersonRow> for DeniedPerson {
    fn from(row: DeniedPersonRow) -> Self {
        let match_key = precompute(&row.name);
        Self {
            name: scrub(row.name),
            street_address: scrub(row.street_address),
            city: scrub(row.city),
            state: scrub(row.state),
            country: scrub(row.country),
            postal_code: scrub(row.postal_code),
            effective_date: scrub(row.effective_date),
            expiration_date: scrub(row.expiration_date),
            standard_order: scrub(row.standard_order),
            last_update: scrub(row.last_update),
            action: scrub(row.action),
            fr_citation: scrub(row.fr_citation),
            match_key: match_key.into(),
        }
    }
}

/// One row of the header-less Sectoral Sanctions Identifications export.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectoralSanctionRow {
    pub entity_id: String,
    pub entity_type: String,
    pub programs: String,
    pub name: String,
    pub addresses: String,
    pub remarks: String,
    pub alternate_names: String,
    pub ids: String,
}

impl From<SectoralSanctionRow> for SectoralSanction {
    fn from(row: SectoralSanctionRow) -> Self {
        let match_key = precompute(&row.name);
        Self {
            entity_id: scrub(row.entity_id),
            entity_type: scrub(row.entity_type),
            programs: split_multi(&row.programs),
            name: scrub(row.name),
            addresses: split_multi(&row.addresses),
            remarks: split_multi(&row.remarks),
            alternate_names: split_multi(&row.alternate_names),
            ids: split_multi(&row.ids),
            source_list_url: SSI_LIST_URL.into(),
            source_info_url: SSI_INFO_URL.into(),
            match_key: match_key.into(),
        }
    }
}

/// One row of the tab-separated Entity List export.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BisEntityRow {
    pub name: String,
    pub alternate_names: String,
    pub addresses: String,
    pub start_date: String,
    pub license_requirement: String,
    pub license_policy: String,
    pub federal_register_notice: String,
}

impl From<BisEntityRow> for BisEntity {
    fn from(row: BisEntityRow) -> Self {
        let match_key = precompute(&row.name);
        let alternate_names = split_multi(&row.alternate_names);
        let alternate_keys = alternate_names
            .iter()
            .map(|name| precompute(name).into())
            .collect();
        Self {
            name: scrub(row.name),
            alternate_names,
            alternate_keys,
            addresses: split_multi(&row.addresses),
            start_date: scrub(row.start_date),
            license_requirement: scrub(row.license_requirement),
            license_policy: scrub(row.license_policy),
            federal_register_notice: scrub(row.federal_register_notice),
            source_list_url: EL_LIST_URL.into(),
            source_info_url: EL_INFO_URL.into(),
            match_key: match_key.into(),
        }
    }
}
