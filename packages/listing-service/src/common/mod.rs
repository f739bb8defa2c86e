// Common types shared across layers
pub mod nats;
pub mod pagination;

pub use nats::*;
pub use pagination::*;
