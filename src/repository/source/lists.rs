use std::{collections::HashMap, sync::Arc, time::Instant};

use chrono::Utc;
use tracing::debug;

use crate::{
    lists::{
        Lists,
        models::{AddressRow, AltRow, BisEntityRow, DeniedPersonRow, SdnRow, SectoralSanctionRow},
    },
    repository::{
        Address, AlternateIdentity, BisEntity, DeniedPerson, IdToIndex, IdToIndexes, Repository,
        SectoralSanction, Sdn,
    },
};

impl Repository {
    /// Indexes a parsed list bundle into a fresh set of collections.
    ///
    /// This is the precompute pass: every record derives its normalized
    /// match key(s) exactly once here, and the lookup tables are built
    /// alongside. Depending on list sizes this can block for a while, so
    /// callers run it off the request path.
    pub fn load_lists(mut self, lists: Lists) -> Self {
        self.load_sdns(lists.sdns);
        self.load_addresses(lists.addresses);
        self.load_alts(lists.alts);
        self.load_denied_persons(lists.denied_persons);
        self.load_sectoral_sanctions(lists.sectoral_sanctions);
        self.load_bis_entities(lists.bis_entities);
        self.last_refreshed_at = Some(Utc::now());
        self
    }

    fn load_sdns(&mut self, rows: Vec<SdnRow>) {
        debug!("Indexing SDNs...");
        let now = Instant::now();
        let mut sdn_lookup: IdToIndex = HashMap::new();
        let mut sdns: Vec<Sdn> = Vec::with_capacity(rows.len());
        for (i, row) in rows.into_iter().enumerate() {
            let value: Sdn = row.into();
            sdn_lookup.insert(value.entity_id.clone(), i);
            sdns.push(value);
        }
        self.sdns = sdns.into();
        self.sdn_lookup = sdn_lookup.into();
        debug!("Indexing SDNs took {:?}", now.elapsed());
    }

    fn load_addresses(&mut self, rows: Vec<AddressRow>) {
        debug!("Indexing addresses...");
        let now = Instant::now();
        let mut entity_to_addresses: HashMap<Arc<str>, Vec<usize>> = HashMap::new();
        let mut addresses: Vec<Address> = Vec::with_capacity(rows.len());
        for (i, row) in rows.into_iter().enumerate() {
            let value: Address = row.into();
            entity_to_addresses
                .entry(value.entity_id.clone())
                .or_default()
                .push(i);
            addresses.push(value);
        }
        self.addresses = addresses.into();
        let entity_to_addresses: IdToIndexes = entity_to_addresses
            .into_iter()
            .map(|(key, value)| (key, value.into()))
            .collect();
        self.entity_to_addresses = entity_to_addresses.into();
        debug!("Indexing addresses took {:?}", now.elapsed());
    }

    fn load_alts(&mut self, rows: Vec<AltRow>) {
        debug!("Indexing alternate identities...");
        let now = Instant::now();
        let mut entity_to_alts: HashMap<Arc<str>, Vec<usize>> = HashMap::new();
        let mut alts: Vec<AlternateIdentity> = Vec::with_capacity(rows.len());
        for (i, row) in rows.into_iter().enumerate() {
            let value: AlternateIdentity = row.into();
            entity_to_alts
                .entry(value.entity_id.clone())
                .or_default()
                .push(i);
            alts.push(value);
        }
        self.alts = alts.into();
        let entity_to_alts: IdToIndexes = entity_to_alts
            .into_iter()
            .map(|(key, value)| (key, value.into()))
            .collect();
        self.entity_to_alts = entity_to_alts.into();
        debug!("Indexing alternate identities took {:?}", now.elapsed());
    }

    fn load_denied_persons(&mut self, rows: Vec<DeniedPersonRow>) {
        debug!("Indexing denied persons...");
        let now = Instant::now();
        let denied_persons: Vec<DeniedPerson> = rows.into_iter().map(Into::into).collect();
        self.denied_persons = denied_persons.into();
        debug!("Indexing denied persons took {:?}", now.elapsed());
    }

    fn load_sectoral_sanctions(&mut self, rows: Vec<SectoralSanctionRow>) {
        debug!("Indexing sectoral sanctions...");
        let now = Instant::now();
        let sectoral_sanctions: Vec<SectoralSanction> =
            rows.into_iter().map(Into::into).collect();
        self.sectoral_sanctions = sectoral_sanctions.into();
        debug!("Indexing sectoral sanctions took {:?}", now.elapsed());
    }

    fn load_bis_entities(&mut self, rows: Vec<BisEntityRow>) {
        debug!("Indexing entity list...");
        let now = Instant::now();
        let bis_entities: Vec<BisEntity> = rows.into_iter().map(Into::into).collect();
        self.bis_entities = bis_entities.into();
        debug!("Indexing entity list took {:?}", now.elapsed());
    }
}
