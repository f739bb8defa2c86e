// Listing Service - API Core
//
// Creates and lists rent/sale listings. Listings are persisted to SQLite and
// every successful creation is announced on NATS.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
