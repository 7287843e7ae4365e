use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ID_OFFSET, DEFAULT_SEED_SAMPLE_DATA, MAX_ID_OFFSET,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Start with the demo request set instead of an empty store
    pub seed_sample_data: bool,
    /// Added to the initial record count to number the first new request
    pub id_offset: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: DEFAULT_SEED_SAMPLE_DATA,
            id_offset: DEFAULT_ID_OFFSET,
        }
    }
}

impl StoreConfig {
    /// The id sequence counts up from the offset, so it needs headroom
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.id_offset > MAX_ID_OFFSET {
            return Err(ConfigError::store(format!(
                "store.id_offset must be at most {}, got {}",
                MAX_ID_OFFSET, self.id_offset
            )));
        }

        Ok(())
    }
}
