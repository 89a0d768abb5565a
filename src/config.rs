//! Store configuration, from flags or the environment (`.env` included).

use clap::Args;
use crate::errors::{InjectError, Result};

pub const DEFAULT_CREATOR_ID: &str = "gammu-outbox";

#[derive(Args, Debug, Clone)]
pub struct StoreConfig {
    /// PostgreSQL URL of the Gammu SMSD database.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,
    /// Maximum number of pooled connections.
    #[arg(long, env = "GAMMU_POOL_SIZE", default_value_t = 4)]
    pub pool_size: u32,
    /// Value written to the outbox `CreatorID` column.
    #[arg(long, env = "GAMMU_CREATOR_ID", default_value = DEFAULT_CREATOR_ID)]
    pub creator_id: String
}
impl StoreConfig {
    pub fn validate(&self) -> Result<()> {
        if self.database_url.trim().is_empty() {
            return Err(InjectError::Config("'database_url' is empty".into()));
        }
        if self.pool_size == 0 {
            return Err(InjectError::Config("'pool_size' must be at least 1".into()));
        }
        if self.creator_id.is_empty() {
            return Err(InjectError::Config("'creator_id' is empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> StoreConfig {
        StoreConfig {
            database_url: "postgres://smsd@localhost/smsd".into(),
            pool_size: 4,
            creator_id: DEFAULT_CREATOR_ID.into()
        }
    }
    #[test]
    fn accepts_sane_config() {
        assert!(config().validate().is_ok());
    }
    #[test]
    fn rejects_empty_pool_and_url() {
        let mut c = config();
        c.pool_size = 0;
        assert!(c.validate().is_err());
        let mut c = config();
        c.database_url = "  ".into();
        assert!(c.validate().is_err());
    }
}
