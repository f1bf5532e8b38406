use reqwest::Client;
use tracing::debug;

use crate::lists::{self, Config, Error, Lists};

impl Lists {
    /// Fetches and parses every source list.
    ///
    /// Each list is fetched from its canonical URL; the first list that
    /// fails to download or parse fails the whole bundle, so callers never
    /// see a partial refresh.
    pub async fn download(client: &Client, config: &Config) -> Result<Self, Error> {
        let sdns = lists::parse_sdns(fetch(client, &config.sdn_url).await?.as_slice())?;
        let addresses =
            lists::parse_addresses(fetch(client, &config.address_url).await?.as_slice())?;
        let alts = lists::parse_alts(fetch(client, &config.alt_url).await?.as_slice())?;
        let denied_persons = lists::parse_denied_persons(
            fetch(client, &config.denied_persons_url).await?.as_slice(),
        )?;
        let sectoral_sanctions = lists::parse_sectoral_sanctions(
            fetch(client, &config.sectoral_sanctions_url).await?.as_slice(),
        )?;
        let bis_entities =
            lists::parse_bis_entities(fetch(client, &config.entity_list_url).await?.as_slice())?;

        Ok(Self {
            sdns,
            addresses,
            alts,
            denied_persons,
            sectoral_sanctions,
            bis_entities,
        })
    }
}

async fn fetch(client: &Client, url: &str) -> Result<Vec<u8>, Error> {
    debug!("Fetching {url}");
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(Error::Status {
            url: url.to_owned(),
            status: response.status().as_u16(),
        });
    }
    Ok(response.bytes().await?.to_vec())
}
