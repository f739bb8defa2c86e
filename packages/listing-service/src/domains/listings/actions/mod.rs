//! Listing domain actions - business logic functions
//!
//! Actions are async functions called directly from the HTTP routes. They
//! validate input, touch the store, publish events and return the result.

mod create_listing;
mod list_listings;

pub use create_listing::create_listing;
pub use list_listings::list_listings;
