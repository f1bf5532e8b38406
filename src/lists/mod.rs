use std::io::Read;

use serde::de::DeserializeOwned;
use thiserror::Error;

mod config;
mod download;
pub mod models;
pub use config::*;
use models::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Download error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected status {status} fetching {url}")]
    Status { url: String, status: u16 },
}

/// The raw rows of every source list, parsed but not yet indexed.
///
/// A bundle is only ever produced whole: if any single list fails to
/// download or parse, the whole acquisition fails and no bundle exists.
#[derive(Debug, Default)]
pub struct Lists {
    pub sdns: Vec<SdnRow>,
    pub addresses: Vec<AddressRow>,
    pub alts: Vec<AltRow>,
    pub denied_persons: Vec<DeniedPersonRow>,
    pub sectoral_sanctions: Vec<SectoralSanctionRow>,
    pub bis_entities: Vec<BisEntityRow>,
}

/// Parses the header-less comma-separated SDN file.
pub fn parse_sdns<R: Read>(reader: R) -> Result<Vec<SdnRow>, Error> {
    parse_csv(csv::ReaderBuilder::new().has_headers(false).from_reader(reader))
}

/// Parses the header-less comma-separated SDN address file.
pub fn parse_addresses<R: Read>(reader: R) -> Result<Vec<AddressRow>, Error> {
    parse_csv(csv::ReaderBuilder::new().has_headers(false).from_reader(reader))
}

/// Parses the header-less comma-separated SDN alternate identity file.
pub fn parse_alts<R: Read>(reader: R) -> Result<Vec<AltRow>, Error> {
    parse_csv(csv::ReaderBuilder::new().has_headers(false).from_reader(reader))
}

/// Parses the tab-separated Denied Persons List. The file carries a header
/// row and stray unbalanced quotes, so quoting is disabled.
pub fn parse_denied_persons<R: Read>(reader: R) -> Result<Vec<DeniedPersonRow>, Error> {
    parse_csv(
        csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .quoting(false)
            .from_reader(reader),
    )
}

/// Parses the header-less comma-separated Sectoral Sanctions file.
pub fn parse_sectoral_sanctions<R: Read>(reader: R) -> Result<Vec<SectoralSanctionRow>, Error> {
    parse_csv(csv::ReaderBuilder::new().has_headers(false).from_reader(reader))
}

/// Parses the tab-separated Entity List export, header row included.
pub fn parse_bis_entities<R: Read>(reader: R) -> Result<Vec<BisEntityRow>, Error> {
    parse_csv(
        csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .quoting(false)
            .from_reader(reader),
    )
}

fn parse_csv<R, T>(mut reader: csv::Reader<R>) -> Result<Vec<T>, Error>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: T = result?;
        rows.push(row);
    }
    Ok(rows)
}
