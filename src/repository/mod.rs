use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Utc};
use serde::Serialize;

mod entities;
pub use entities::*;
mod source;

use crate::shared::{self, fuzzy, normalize};

type IdToIndex = HashMap<Arc<str>, usize>;
type IdToIndexes = HashMap<Arc<str>, Arc<[usize]>>;

/// Boxed per-field address scorer, composable with [`multi_address_compare`].
pub type AddressScorer = Box<dyn Fn(&Address) -> f64 + Send + Sync>;

/// The in-memory index over every watchlist.
///
/// All collections are immutable once built; a refresh produces a whole
/// new `Repository` and installs it in one assignment. Cloning is cheap
/// (the fields are shared handles) and yields a consistent snapshot that
/// keeps serving the generation it was taken from.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    pub(crate) sdns: Arc<[Sdn]>,
    pub(crate) addresses: Arc<[Address]>,
    pub(crate) alts: Arc<[AlternateIdentity]>,
    pub(crate) denied_persons: Arc<[DeniedPerson]>,
    pub(crate) sectoral_sanctions: Arc<[SectoralSanction]>,
    pub(crate) bis_entities: Arc<[BisEntity]>,

    // Lookup tables
    sdn_lookup: Arc<IdToIndex>,
    entity_to_addresses: Arc<IdToIndexes>,
    entity_to_alts: Arc<IdToIndexes>,

    last_refreshed_at: Option<DateTime<Utc>>,
}

/// Per-list record counts published after a successful refresh. The
/// caller decides whether to persist them.
#[derive(Debug, Clone, Serialize)]
pub struct RefreshStats {
    #[serde(rename = "SDNs")]
    pub sdns: usize,
    #[serde(rename = "altNames")]
    pub alt_names: usize,
    #[serde(rename = "addresses")]
    pub addresses: usize,
    #[serde(rename = "deniedPersons")]
    pub denied_persons: usize,
    #[serde(rename = "sectoralSanctions")]
    pub sectoral_sanctions: usize,
    #[serde(rename = "bisEntities")]
    pub bis_entities: usize,
    #[serde(rename = "lastRefreshedAt")]
    pub last_refreshed_at: Option<DateTime<Utc>>,
}

impl Repository {
    pub fn new() -> Self {
        Default::default()
    }

    /// When the current indexes were built, if they ever were.
    pub fn last_refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.last_refreshed_at
    }

    pub fn stats(&self) -> RefreshStats {
        RefreshStats {
            sdns: self.sdns.len(),
            alt_names: self.alts.len(),
            addresses: self.addresses.len(),
            denied_persons: self.denied_persons.len(),
            sectoral_sanctions: self.sectoral_sanctions.len(),
            bis_entities: self.bis_entities.len(),
            last_refreshed_at: self.last_refreshed_at,
        }
    }

    /// Does a fuzzy search on all SDNs. Each record is compared through
    /// both of its keys, the name as listed and the reordered form, and
    /// ranks by the better score, so queries phrased in list order and in
    /// natural order both land.
    pub fn top_sdns(&self, limit: usize, query: &str) -> Vec<(f64, &Sdn)> {
        let needle = normalize::precompute(query);
        shared::rank(&self.sdns, limit, |sdn: &Sdn| {
            fuzzy::jaro_winkler(&needle, &sdn.match_key)
                .max(fuzzy::jaro_winkler(&needle, &sdn.name_key))
        })
    }

    /// Does a fuzzy search on all SDN alternate identities.
    pub fn top_alt_names(&self, limit: usize, query: &str) -> Vec<(f64, &AlternateIdentity)> {
        let needle = normalize::precompute(query);
        shared::rank_by_key(&self.alts, limit, &needle)
    }

    /// Does a fuzzy search on all addresses, comparing the street address.
    pub fn top_addresses(&self, limit: usize, query: &str) -> Vec<(f64, &Address)> {
        let needle = normalize::precompute(query);
        shared::rank_by_key(&self.addresses, limit, &needle)
    }

    /// Ranks the address collection with a caller-supplied scorer, letting
    /// the HTTP layer compose per-field comparisons.
    pub fn top_addresses_fn<F>(&self, limit: usize, compare: F) -> Vec<(f64, &Address)>
    where
        F: Fn(&Address) -> f64 + Send + Sync,
    {
        shared::rank(&self.addresses, limit, compare)
    }

    /// Does a fuzzy search on the Denied Persons List.
    pub fn top_dps(&self, limit: usize, query: &str) -> Vec<(f64, &DeniedPerson)> {
        let needle = normalize::precompute(query);
        shared::rank_by_key(&self.denied_persons, limit, &needle)
    }

    /// Does a fuzzy search on the Sectoral Sanctions list.
    pub fn top_ssis(&self, limit: usize, query: &str) -> Vec<(f64, &SectoralSanction)> {
        let needle = normalize::precompute(query);
        shared::rank_by_key(&self.sectoral_sanctions, limit, &needle)
    }

    /// Does a fuzzy search on the Entity List. An entity ranks by its best
    /// key, primary name or any alternate name.
    pub fn top_els(&self, limit: usize, query: &str) -> Vec<(f64, &BisEntity)> {
        let needle = normalize::precompute(query);
        shared::rank(&self.bis_entities, limit, |entity: &BisEntity| {
            entity
                .alternate_keys
                .iter()
                .map(|key| fuzzy::jaro_winkler(&needle, key))
                .fold(fuzzy::jaro_winkler(&needle, &entity.match_key), f64::max)
        })
    }

    /// Gets the unique SDN with the given entity id.
    pub fn find_sdn(&self, entity_id: &str) -> Option<&Sdn> {
        let index = self.sdn_lookup.get(entity_id)?;
        Some(&self.sdns[*index])
    }

    /// Returns up to `limit` addresses belonging to the given entity.
    pub fn find_addresses(&self, limit: usize, entity_id: &str) -> Vec<&Address> {
        match self.entity_to_addresses.get(entity_id) {
            Some(indexes) => indexes
                .iter()
                .take(limit)
                .map(|index| &self.addresses[*index])
                .collect(),
            None => Vec::new(),
        }
    }

    /// Returns up to `limit` alternate identities of the given entity.
    pub fn find_alts(&self, limit: usize, entity_id: &str) -> Vec<&AlternateIdentity> {
        match self.entity_to_alts.get(entity_id) {
            Some(indexes) => indexes
                .iter()
                .take(limit)
                .map(|index| &self.alts[*index])
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Scores the street address field against the query.
pub fn address_line_scorer(query: &str) -> AddressScorer {
    let needle = normalize::precompute(query);
    Box::new(move |address: &Address| fuzzy::jaro_winkler(&needle, &address.address_key))
}

/// Scores the combined city/state/province/postal-code field. The record
/// stores those as one string, so the city, state, providence and zip
/// query fields all compare against this same key.
pub fn city_state_scorer(query: &str) -> AddressScorer {
    let needle = normalize::precompute(query);
    Box::new(move |address: &Address| fuzzy::jaro_winkler(&needle, &address.city_state_key))
}

/// Scores the country field against the query.
pub fn country_scorer(query: &str) -> AddressScorer {
    let needle = normalize::precompute(query);
    Box::new(move |address: &Address| fuzzy::jaro_winkler(&needle, &address.country_key))
}

/// Folds several per-field scorers into one weight: the arithmetic mean of
/// their contributions. Callers push one scorer per populated query field.
pub fn multi_address_compare(
    compares: Vec<AddressScorer>,
) -> impl Fn(&Address) -> f64 + Send + Sync {
    move |address: &Address| {
        if compares.is_empty() {
            return 0.0;
        }
        let total: f64 = compares.iter().map(|compare| compare(address)).sum();
        total / compares.len() as f64
    }
}
