use diesel::prelude::*;
use diesel::PgConnection;
use r2d2::PooledConnection;
use r2d2_diesel::ConnectionManager;
use crate::errors::Result;
use crate::models::{NewOutbox, NewOutboxMultipart};
use crate::pool::Pool;

macro_rules! outbox_insert {
    ($row:expr) => {
        ::diesel::insert_into(crate::schema::outbox::table)
            .values($row)
            .returning(crate::schema::outbox::id)
    }
}
macro_rules! outbox_multipart_insert {
    ($row:expr) => {
        ::diesel::insert_into(crate::schema::outbox_multipart::table)
            .values($row)
            .returning(crate::schema::outbox_multipart::id)
    }
}

/// Write access to Gammu's outbox tables.
///
/// Each insert is a single statement and reports the id the store generated,
/// or `None` if it produced no row. `atomically` runs `f` so that either every
/// insert it made is kept or none is.
pub trait OutboxStore {
    fn insert_outbox(&self, row: &NewOutbox) -> Result<Option<i32>>;
    fn insert_multipart(&self, row: &NewOutboxMultipart) -> Result<Option<i32>>;
    fn atomically<T, F>(&self, f: F) -> Result<T>
        where F: FnOnce(&Self) -> Result<T>;
}
impl OutboxStore for PgConnection {
    fn insert_outbox(&self, row: &NewOutbox) -> Result<Option<i32>> {
        let res = outbox_insert!(row)
            .get_result(self)
            .optional()?;
        Ok(res)
    }
    fn insert_multipart(&self, row: &NewOutboxMultipart) -> Result<Option<i32>> {
        let res = outbox_multipart_insert!(row)
            .get_result(self)
            .optional()?;
        Ok(res)
    }
    fn atomically<T, F>(&self, f: F) -> Result<T>
        where F: FnOnce(&Self) -> Result<T> {
        self.transaction(|| f(self))
    }
}

#[derive(Clone)]
pub struct Store {
    pub(crate) inner: Pool
}
impl Store {
    pub fn new(inner: Pool) -> Self {
        Store { inner }
    }
    pub fn get_conn(&self) -> Result<PooledConnection<ConnectionManager<PgConnection>>> {
        Ok(self.inner.get()?)
    }
}
