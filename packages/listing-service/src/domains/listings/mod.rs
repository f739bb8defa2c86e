//! Listings domain - rent/sale listings owned by users
//!
//! Architecture:
//!   HTTP route → action (validate, store, publish) → model (SQL)

pub mod actions;
pub mod data;
pub mod errors;
pub mod events;
pub mod models;

// Re-export commonly used types
pub use actions::{create_listing, list_listings};
pub use data::{CreateListingParams, ListListingsParams, ListingQuery, NewListing, RequestArgs};
pub use errors::{ListingError, ValidationError};
pub use events::{ListingEvent, LISTING_CREATED_SUBJECT};
pub use models::listing::{Listing, ListingType};
