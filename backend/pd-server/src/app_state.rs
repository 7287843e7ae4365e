use pd_config::AuthConfig;
use pd_store::RequestStore;

use std::path::PathBuf;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub store: RequestStore,
    pub auth: AuthConfig,
    /// Front-end assets served for paths no API route claims
    pub static_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new(store: RequestStore, auth: AuthConfig) -> Self {
        Self {
            store,
            auth,
            static_dir: None,
        }
    }

    pub fn with_static_dir(mut self, dir: PathBuf) -> Self {
        self.static_dir = Some(dir);
        self
    }
}
