use serde_json::json;

use crate::common::nats::IntoNatsPayload;
use crate::domains::listings::models::Listing;

/// Subject every listing creation is announced on.
pub const LISTING_CREATED_SUBJECT: &str = "listings.created";

/// Listings domain events
/// Events are immutable facts, published after the store write commits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingEvent {
    /// A listing was persisted and assigned its id
    ListingCreated { listing: Listing },
}

impl IntoNatsPayload for ListingEvent {
    fn subject(&self) -> &'static str {
        match self {
            ListingEvent::ListingCreated { .. } => LISTING_CREATED_SUBJECT,
        }
    }

    fn into_payload(&self) -> serde_json::Value {
        match self {
            ListingEvent::ListingCreated { listing } => json!({
                "id": listing.id,
                "user_id": listing.user_id,
                "listing_type": listing.listing_type.as_str(),
                "price": listing.price,
                "created_at": listing.created_at,
                "updated_at": listing.updated_at,
            }),
        }
    }
}
