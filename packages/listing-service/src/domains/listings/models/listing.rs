use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::domains::listings::errors::ListingError;

/// Listing - an item a user offers for rent or sale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Listing {
    pub id: i64,
    pub user_id: i64,
    pub listing_type: ListingType,
    pub price: i64,

    // Microseconds since the Unix epoch
    pub created_at: i64,
    pub updated_at: i64,
}

// =============================================================================
// Enums
// =============================================================================

/// Listing type enum, stored as lowercase text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum ListingType {
    Rent,
    Sale,
}

impl ListingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::Rent => "rent",
            ListingType::Sale => "sale",
        }
    }
}

impl std::fmt::Display for ListingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ListingType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "rent" => Ok(ListingType::Rent),
            "sale" => Ok(ListingType::Sale),
            _ => Err(anyhow::anyhow!("Invalid listing type: {}", s)),
        }
    }
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Listing {
    /// Insert a listing and return its assigned id.
    ///
    /// Inputs are expected to be validated already; only storage-level
    /// constraints are enforced here.
    pub async fn insert(
        user_id: i64,
        listing_type: ListingType,
        price: i64,
        created_at: i64,
        updated_at: i64,
        pool: &SqlitePool,
    ) -> Result<i64, ListingError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO listings (user_id, listing_type, price, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING id",
        )
        .bind(user_id)
        .bind(listing_type)
        .bind(price)
        .bind(created_at)
        .bind(updated_at)
        .fetch_optional(pool)
        .await?;

        id.ok_or(ListingError::MissingId)
    }

    /// Fetch a page of listings, most recent first, optionally for one user.
    ///
    /// `limit` and `offset` are applied exactly as given. Rows created in
    /// the same microsecond are ordered by id, newest first.
    pub async fn query(
        user_id: Option<i64>,
        limit: i64,
        offset: i64,
        pool: &SqlitePool,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let mut sql = String::from(
            "SELECT id, user_id, listing_type, price, created_at, updated_at FROM listings",
        );
        if user_id.is_some() {
            sql.push_str(" WHERE user_id = ?");
        }
        sql.push_str(" ORDER BY created_at DESC, id DESC LIMIT ? OFFSET ?");

        let mut query = sqlx::query_as::<_, Listing>(&sql);
        if let Some(user_id) = user_id {
            query = query.bind(user_id);
        }

        query.bind(limit).bind(offset).fetch_all(pool).await
    }

    /// Find listing by ID
    pub async fn find_by_id(id: i64, pool: &SqlitePool) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Listing>(
            "SELECT id, user_id, listing_type, price, created_at, updated_at
             FROM listings WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Count all stored listings
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM listings")
            .fetch_one(pool)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_type_round_trips_through_text() {
        assert_eq!("rent".parse::<ListingType>().unwrap(), ListingType::Rent);
        assert_eq!("sale".parse::<ListingType>().unwrap(), ListingType::Sale);
        assert_eq!(ListingType::Sale.to_string(), "sale");
    }

    #[test]
    fn listing_type_is_case_sensitive() {
        assert!("Rent".parse::<ListingType>().is_err());
        assert!("lease".parse::<ListingType>().is_err());
        assert!("".parse::<ListingType>().is_err());
    }

    #[test]
    fn listing_serializes_with_wire_field_names() {
        let listing = Listing {
            id: 3,
            user_id: 7,
            listing_type: ListingType::Rent,
            price: 500,
            created_at: 1_700_000_000_000_000,
            updated_at: 1_700_000_000_000_000,
        };

        let value = serde_json::to_value(&listing).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 3,
                "user_id": 7,
                "listing_type": "rent",
                "price": 500,
                "created_at": 1_700_000_000_000_000_i64,
                "updated_at": 1_700_000_000_000_000_i64,
            })
        );
    }
}
