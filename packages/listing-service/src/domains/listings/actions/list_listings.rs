//! List listings action - parse pagination and fetch a page

use tracing::debug;

use crate::domains::listings::data::{ListListingsParams, ListingQuery};
use crate::domains::listings::errors::ListingError;
use crate::domains::listings::models::Listing;
use crate::kernel::ServerDeps;

/// Fetch one page of listings, most recent first.
///
/// Parameters are fully parsed before the store is queried; an empty page is
/// not an error.
pub async fn list_listings(
    params: &ListListingsParams,
    deps: &ServerDeps,
) -> Result<Vec<Listing>, ListingError> {
    let query = ListingQuery::parse(params)?;

    let listings = Listing::query(
        query.user_id,
        query.page.limit(),
        query.page.offset(),
        &deps.db_pool,
    )
    .await?;

    debug!(
        user_id = ?query.user_id,
        page_num = query.page.page_num(),
        page_size = query.page.page_size(),
        returned = listings.len(),
        "Listings fetched"
    );

    Ok(listings)
}
