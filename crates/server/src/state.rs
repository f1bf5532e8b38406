use reqwest::Client;
use screener::{lists::Config, repository::Repository};
use tokio::sync::{Mutex, RwLock};

pub struct AppState {
    /// Handle to the live indexes. Queries take a short read lock to clone
    /// a snapshot; a refresh installs a whole new value under the write
    /// lock, so readers see either the old generation or the new one,
    /// never a mix.
    pub repository: RwLock<Repository>,
    /// Serializes refreshes so overlapping triggers coalesce.
    pub refresh_guard: Mutex<()>,
    pub client: Client,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            repository: RwLock::new(Repository::new()),
            refresh_guard: Mutex::new(()),
            client: Client::new(),
            config,
        }
    }

    /// Cheap consistent snapshot of the current indexes.
    pub async fn snapshot(&self) -> Repository {
        self.repository.read().await.clone()
    }
}
