//! Create listing action - validate, persist, then announce on NATS

use chrono::Utc;
use tracing::{info, warn};

use crate::common::nats::publish_event;
use crate::domains::listings::data::{CreateListingParams, NewListing};
use crate::domains::listings::errors::ListingError;
use crate::domains::listings::events::ListingEvent;
use crate::domains::listings::models::Listing;
use crate::kernel::ServerDeps;

/// Create a listing.
///
/// This action:
/// 1. Validates every field, collecting all violations
/// 2. Inserts the row with `created_at == updated_at == now` (µs)
/// 3. Publishes `ListingCreated` carrying the assigned id
///
/// Returns:
/// - The stored listing on success, even if the publish failed
/// - `ListingError::Validation` before any side effect
/// - `ListingError::Database` / `MissingId` if the insert failed
pub async fn create_listing(
    params: &CreateListingParams,
    deps: &ServerDeps,
) -> Result<Listing, ListingError> {
    let new_listing = NewListing::validate(params)?;
    let now = Utc::now().timestamp_micros();

    let id = Listing::insert(
        new_listing.user_id,
        new_listing.listing_type,
        new_listing.price,
        now,
        now,
        &deps.db_pool,
    )
    .await?;

    let listing = Listing {
        id,
        user_id: new_listing.user_id,
        listing_type: new_listing.listing_type,
        price: new_listing.price,
        created_at: now,
        updated_at: now,
    };
    info!(
        listing_id = listing.id,
        user_id = listing.user_id,
        listing_type = %listing.listing_type,
        "Listing created"
    );

    // The row is committed; a lost event must not fail the request
    let event = ListingEvent::ListingCreated {
        listing: listing.clone(),
    };
    if let Err(e) = publish_event(deps.nats.as_ref(), &event).await {
        warn!(listing_id = listing.id, error = %e, "Failed to publish listing event");
    }

    Ok(listing)
}
