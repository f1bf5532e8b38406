use std::env;

/// Upstream locations of the source lists. Every URL can be overridden
/// with an environment variable so a mirror or a fixture server can stand
/// in for the live endpoints.
#[derive(Debug, Clone)]
pub struct Config {
    pub sdn_url: String,
    pub address_url: String,
    pub alt_url: String,
    pub denied_persons_url: String,
    pub sectoral_sanctions_url: String,
    pub entity_list_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sdn_url: "https://www.treasury.gov/ofac/downloads/sdn.csv".into(),
            address_url: "https://www.treasury.gov/ofac/downloads/add.csv".into(),
            alt_url: "https://www.treasury.gov/ofac/downloads/alt.csv".into(),
            denied_persons_url: "https://www.bis.doc.gov/dpl/dpl.txt".into(),
            sectoral_sanctions_url: "https://www.treasury.gov/ofac/downloads/ssi/ssi.csv".into(),
            entity_list_url: "https://api.trade.gov/static/consolidated_screening_list/entity_list.tsv".into(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        let overrides = [
            ("SDN_DOWNLOAD_URL", &mut config.sdn_url),
            ("ADDRESS_DOWNLOAD_URL", &mut config.address_url),
            ("ALT_DOWNLOAD_URL", &mut config.alt_url),
            ("DPL_DOWNLOAD_URL", &mut config.denied_persons_url),
            ("SSI_DOWNLOAD_URL", &mut config.sectoral_sanctions_url),
            ("EL_DOWNLOAD_URL", &mut config.entity_list_url),
        ];
        for (name, url) in overrides {
            if let Ok(value) = env::var(name) {
                *url = value;
            }
        }
        config
    }
}

/// Official list pages attached to every sectoral sanction record.
pub const SSI_LIST_URL: &str =
    "https://www.treasury.gov/resource-center/sanctions/SDN-List/Pages/ssi_list.aspx";
pub const SSI_INFO_URL: &str =
    "https://www.treasury.gov/resource-center/sanctions/Programs/Pages/ukraine.aspx";

/// Official list pages attached to every entity list record.
pub const EL_LIST_URL: &str =
    "https://www.bis.doc.gov/index.php/policy-guidance/lists-of-parties-of-concern/entity-list";
pub const EL_INFO_URL: &str =
    "https://www.bis.doc.gov/index.php/policy-guidance/lists-of-parties-of-concern";
