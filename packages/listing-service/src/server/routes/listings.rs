//! `/listings` endpoints.
//!
//! Response envelopes always carry `result`. Validation failures on the list
//! endpoint report a single message string; on the create endpoint they
//! report the full list of messages.
//!
//! Arguments are read as raw pairs so repeated keys resolve to their last
//! value. `POST` reads the query string as well as the form body, with body
//! values taking precedence. Malformed requests get the same JSON envelope
//! as validation failures.

use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Extension, Form, Query,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domains::listings::{
    create_listing, list_listings, CreateListingParams, ListListingsParams, Listing, ListingError,
    RequestArgs,
};
use crate::server::app::AxumAppState;

pub const LIST_STORAGE_ERROR: &str = "Error while fetching listings from db";
pub const CREATE_STORAGE_ERROR: &str = "Error while adding listing to db";

#[derive(Debug, Serialize)]
pub struct ListingsResponse {
    result: bool,
    listings: Vec<Listing>,
}

#[derive(Debug, Serialize)]
pub struct ListingResponse {
    result: bool,
    listing: Listing,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse<E> {
    result: bool,
    errors: E,
}

impl<E: Serialize> ErrorResponse<E> {
    fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Liveness check
pub async fn ping_handler() -> &'static str {
    "pong!"
}

/// `GET /listings?page_num=&page_size=&user_id=`
pub async fn list_listings_handler(
    Extension(state): Extension<AxumAppState>,
    query: Result<Query<RequestArgs>, QueryRejection>,
) -> Response {
    let params = match query {
        Ok(Query(args)) => ListListingsParams::from_args(args),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected listings query");
            return ErrorResponse {
                result: false,
                errors: rejection.body_text(),
            }
            .into_response_with(StatusCode::BAD_REQUEST);
        }
    };

    match list_listings(&params, &state.deps).await {
        Ok(listings) => Json(ListingsResponse {
            result: true,
            listings,
        })
        .into_response(),
        Err(ListingError::Validation(e)) => ErrorResponse {
            result: false,
            errors: e.to_string(),
        }
        .into_response_with(StatusCode::BAD_REQUEST),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch listings");
            ErrorResponse {
                result: false,
                errors: LIST_STORAGE_ERROR,
            }
            .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// `POST /listings` with form fields `user_id`, `listing_type`, `price`
pub async fn create_listing_handler(
    Extension(state): Extension<AxumAppState>,
    query: Result<Query<RequestArgs>, QueryRejection>,
    form: Result<Form<RequestArgs>, FormRejection>,
) -> Response {
    let params = match collect_create_args(query, form) {
        Ok(args) => CreateListingParams::from_args(args),
        Err(message) => {
            return ErrorResponse {
                result: false,
                errors: [message],
            }
            .into_response_with(StatusCode::BAD_REQUEST);
        }
    };

    match create_listing(&params, &state.deps).await {
        Ok(listing) => Json(ListingResponse {
            result: true,
            listing,
        })
        .into_response(),
        Err(ListingError::Validation(e)) => ErrorResponse {
            result: false,
            errors: e.into_messages(),
        }
        .into_response_with(StatusCode::BAD_REQUEST),
        Err(e) => {
            tracing::error!(error = %e, "Failed to add listing to db");
            ErrorResponse {
                result: false,
                errors: [CREATE_STORAGE_ERROR],
            }
            .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Query-string arguments followed by body arguments.
///
/// A body without a form content type (including no body at all) counts
/// as empty.
fn collect_create_args(
    query: Result<Query<RequestArgs>, QueryRejection>,
    form: Result<Form<RequestArgs>, FormRejection>,
) -> Result<RequestArgs, String> {
    let Query(mut args) = query.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected listing query string");
        rejection.body_text()
    })?;

    match form {
        Ok(Form(body)) => args.extend(body),
        Err(FormRejection::InvalidFormContentType(_)) => {}
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected listing form body");
            return Err(rejection.body_text());
        }
    }

    Ok(args)
}
