//! Managing the database pool.

use diesel::PgConnection;
use r2d2_diesel::ConnectionManager;
use std::sync::Arc;
use crate::config::StoreConfig;
use crate::errors::Result;

pub type Pool = Arc<r2d2::Pool<ConnectionManager<PgConnection>>>;

pub fn build_pool(cfg: &StoreConfig) -> Result<Pool> {
    cfg.validate()?;
    let manager: ConnectionManager<PgConnection> = ConnectionManager::new(cfg.database_url.as_str());
    info!("Setting up database pool ({} connections)...", cfg.pool_size);
    let pool = r2d2::Pool::builder()
        .max_size(cfg.pool_size)
        .build(manager)?;
    Ok(Arc::new(pool))
}
