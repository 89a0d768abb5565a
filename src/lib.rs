//! Injects outgoing SMS into a Gammu SMSD database.
//!
//! Long messages are split into concatenated parts; the first lands in
//! `outbox`, the rest in `outbox_multipart`, all in one transaction.

#[macro_use] extern crate diesel;
#[macro_use] extern crate failure;
#[macro_use] extern crate log;

pub mod config;
pub mod errors;
pub mod injector;
pub mod models;
pub mod pool;
pub mod schema;
pub mod segment;
pub mod store;
pub mod udh;

pub use crate::config::StoreConfig;
pub use crate::errors::{InjectError, FAILED_INSERT};
pub use crate::injector::{Injector, Message, Segment, SendState};
pub use crate::store::{OutboxStore, Store};
