//! Kernel module - server infrastructure and dependencies.

pub mod db;
pub mod deps;
pub mod nats;

pub use db::{connect_database, connect_in_memory, run_migrations};
pub use deps::ServerDeps;
pub use nats::{connect_nats, NatsClientPublisher, NatsPublisher, PublishedMessage, TestNats};
