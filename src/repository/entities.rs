use std::sync::Arc;

use crate::shared::Searchable;

/// A Specially Designated National from the OFAC SDN list.
#[derive(Debug, Default, Clone)]
pub struct Sdn {
    /// The unique listing identifier (ent_num).
    pub entity_id: Arc<str>,
    /// The listed name of the specially designated national.
    pub name: Arc<str>,
    /// Entity category (individual, entity, vessel, aircraft, ...).
    pub sdn_type: Arc<str>,
    /// The sanctions program the entity is flagged under.
    pub program: Arc<str>,
    pub title: Arc<str>,
    pub call_sign: Arc<str>,
    pub vessel_type: Arc<str>,
    pub tonnage: Arc<str>,
    pub gross_registered_tonnage: Arc<str>,
    pub vessel_flag: Arc<str>,
    pub vessel_owner: Arc<str>,
    pub remarks: Arc<str>,
    /// Normalized form of `name` exactly as listed.
    pub name_key: Arc<str>,
    /// Normalized form of `name` with an inverted individual name put
    /// back in natural order. Both keys are derived once at load time;
    /// ranking keeps the better score of the two.
    pub match_key: Arc<str>,
}

impl Searchable for Sdn {
    fn match_key(&self) -> &str {
        &self.match_key
    }
}

/// A known address of an SDN. `(entity_id, address_id)` is unique.
#[derive(Debug, Default, Clone)]
pub struct Address {
    pub entity_id: Arc<str>,
    pub address_id: Arc<str>,
    pub address: Arc<str>,
    /// City, state/province and zip/postal code as one concatenated field,
    /// the way the upstream file ships it.
    pub city_state_province_postal_code: Arc<str>,
    pub country: Arc<str>,
    pub remarks: Arc<str>,
    /// Normalized street address.
    pub address_key: Arc<str>,
    /// Normalized city/state/province/postal field.
    pub city_state_key: Arc<str>,
    /// Normalized country.
    pub country_key: Arc<str>,
}

impl Searchable for Address {
    fn match_key(&self) -> &str {
        &self.address_key
    }
}

/// An aka/fka/nka identity linked to an SDN.
#[derive(Debug, Default, Clone)]
pub struct AlternateIdentity {
    pub entity_id: Arc<str>,
    pub alternate_id: Arc<str>,
    /// One of aka, fka or nka.
    pub alternate_type: Arc<str>,
    pub name: Arc<str>,
    pub remarks: Arc<str>,
    pub match_key: Arc<str>,
}

impl Searchable for AlternateIdentity {
    fn match_key(&self) -> &str {
        &self.match_key
    }
}

/// An entry of the BIS Denied Persons List. Carries no entity id.
#[derive(Debug, Default, Clone)]
pub struct DeniedPerson {
    pub name: Arc<str>,
    pub street_address: Arc<str>,
    pub city: Arc<str>,
    pub state: Arc<str>,
    pub country: Arc<str>,
    pub postal_code: Arc<str>,
    pub effective_date: Arc<str>,
    /// Blank when the denial has no expiration.
    pub expiration_date: Arc<str>,
    pub standard_order: Arc<str>,
    pub last_update: Arc<str>,
    pub action: Arc<str>,
    pub fr_citation: Arc<str>,
    pub match_key: Arc<str>,
}

impl Searchable for DeniedPerson {
    fn match_key(&self) -> &str {
        &self.match_key
    }
}

/// An entry of the Sectoral Sanctions Identifications list.
#[derive(Debug, Default, Clone)]
pub struct SectoralSanction {
    pub entity_id: Arc<str>,
    pub entity_type: Arc<str>,
    pub programs: Vec<Arc<str>>,
    pub name: Arc<str>,
    pub addresses: Vec<Arc<str>>,
    pub remarks: Vec<Arc<str>>,
    pub alternate_names: Vec<Arc<str>>,
    /// Forms of identification on file for the entity.
    pub ids: Vec<Arc<str>>,
    pub source_list_url: Arc<str>,
    pub source_info_url: Arc<str>,
    pub match_key: Arc<str>,
}

impl Searchable for SectoralSanction {
    fn match_key(&self) -> &str {
        &self.match_key
    }
}

/// An entry of the BIS Entity List.
#[derive(Debug, Default, Clone)]
pub struct BisEntity {
    pub name: Arc<str>,
    pub alternate_names: Vec<Arc<str>>,
    /// Normalized forms of `alternate_names`, index-aligned, so alias hits
    /// rank an entity as well as its primary name does.
    pub alternate_keys: Vec<Arc<str>>,
    pub addresses: Vec<Arc<str>>,
    pub start_date: Arc<str>,
    pub license_requirement: Arc<str>,
    pub license_policy: Arc<str>,
    pub federal_register_notice: Arc<str>,
    pub source_list_url: Arc<str>,
    pub source_info_url: Arc<str>,
    pub match_key: Arc<str>,
}

impl Searchable for BisEntity {
    fn match_key(&self) -> &str {
        &self.match_key
    }
}
