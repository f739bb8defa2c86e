//! Request parameters for the listing endpoints and their validation.
//!
//! Everything arrives as untrusted strings. Parsing happens here, before any
//! store access, so the actions only ever see typed values.

use serde::Deserialize;

use crate::common::pagination::{parse_int, PageRequest};
use crate::domains::listings::errors::ValidationError;
use crate::domains::listings::models::ListingType;

pub const INVALID_USER_ID: &str = "invalid user_id";
pub const INVALID_LISTING_TYPE: &str = "invalid listing_type. Supported values: 'rent', 'sale'";
pub const INVALID_PRICE: &str = "invalid price. Must be an integer";
pub const NON_POSITIVE_PRICE: &str = "price must be greater than 0";

/// Query parameters of `GET /listings`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListListingsParams {
    pub page_num: Option<String>,
    pub page_size: Option<String>,
    pub user_id: Option<String>,
}

/// Form fields of `POST /listings`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateListingParams {
    pub user_id: Option<String>,
    pub listing_type: Option<String>,
    pub price: Option<String>,
}

/// Request arguments as decoded `(key, value)` pairs, in arrival order.
///
/// A key may repeat; the last occurrence wins. Unknown keys are ignored.
pub type RequestArgs = Vec<(String, String)>;

impl ListListingsParams {
    pub fn from_args(args: RequestArgs) -> Self {
        let mut params = Self::default();
        for (key, value) in args {
            match key.as_str() {
                "page_num" => params.page_num = Some(value),
                "page_size" => params.page_size = Some(value),
                "user_id" => params.user_id = Some(value),
                _ => {}
            }
        }
        params
    }
}

impl CreateListingParams {
    pub fn from_args(args: RequestArgs) -> Self {
        let mut params = Self::default();
        for (key, value) in args {
            match key.as_str() {
                "user_id" => params.user_id = Some(value),
                "listing_type" => params.listing_type = Some(value),
                "price" => params.price = Some(value),
                _ => {}
            }
        }
        params
    }
}

/// A parsed listing query: optional owner filter plus the page to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingQuery {
    pub user_id: Option<i64>,
    pub page: PageRequest,
}

impl ListingQuery {
    /// Parse list parameters. The first invalid field is reported, checked in
    /// the order page_num, page_size, user_id.
    pub fn parse(params: &ListListingsParams) -> Result<Self, ValidationError> {
        let page = PageRequest::parse(params.page_num.as_deref(), params.page_size.as_deref())?;

        let user_id = params
            .user_id
            .as_deref()
            .map(|raw| parse_int(raw).ok_or_else(|| ValidationError::single(INVALID_USER_ID)))
            .transpose()?;

        Ok(Self { user_id, page })
    }
}

/// A validated, not yet persisted listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewListing {
    pub user_id: i64,
    pub listing_type: ListingType,
    pub price: i64,
}

impl NewListing {
    /// Validate creation parameters.
    ///
    /// Every rule is evaluated so that all violations are reported together.
    /// Missing fields are validated as empty strings.
    pub fn validate(params: &CreateListingParams) -> Result<Self, ValidationError> {
        let mut errors = Vec::new();

        let user_id = validate_user_id(params.user_id.as_deref().unwrap_or_default(), &mut errors);
        let listing_type =
            validate_listing_type(params.listing_type.as_deref().unwrap_or_default(), &mut errors);
        let price = validate_price(params.price.as_deref().unwrap_or_default(), &mut errors);

        match (user_id, listing_type, price) {
            (Some(user_id), Some(listing_type), Some(price)) if errors.is_empty() => Ok(Self {
                user_id,
                listing_type,
                price,
            }),
            _ => Err(ValidationError::new(errors)),
        }
    }
}

fn validate_user_id(raw: &str, errors: &mut Vec<String>) -> Option<i64> {
    let user_id = parse_int(raw);
    if user_id.is_none() {
        tracing::debug!(user_id = raw, "Error while converting user_id to int");
        errors.push(INVALID_USER_ID.to_string());
    }
    user_id
}

fn validate_listing_type(raw: &str, errors: &mut Vec<String>) -> Option<ListingType> {
    let listing_type = raw.parse::<ListingType>().ok();
    if listing_type.is_none() {
        errors.push(INVALID_LISTING_TYPE.to_string());
    }
    listing_type
}

fn validate_price(raw: &str, errors: &mut Vec<String>) -> Option<i64> {
    let Some(price) = parse_int(raw) else {
        tracing::debug!(price = raw, "Error while converting price to int");
        errors.push(INVALID_PRICE.to_string());
        return None;
    };

    if price < 1 {
        errors.push(NON_POSITIVE_PRICE.to_string());
        return None;
    }
    Some(price)
}
