//! Test fixtures for creating test data.
//!
//! These fixtures use the model methods directly to create test data.

use anyhow::Result;
use listing_core::domains::listings::{Listing, ListingType};
use sqlx::SqlitePool;

/// Insert a listing with an explicit creation time (µs).
pub async fn create_test_listing(
    pool: &SqlitePool,
    user_id: i64,
    listing_type: ListingType,
    price: i64,
    created_at: i64,
) -> Result<i64> {
    let id = Listing::insert(user_id, listing_type, price, created_at, created_at, pool).await?;
    Ok(id)
}
