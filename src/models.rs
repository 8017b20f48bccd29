// Data structures for the listings API. Records are immutable once
// fetched; every field except `id` is optional because presence
// depends on the `$select` list sent with the request.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One van listing as returned by the posts endpoint.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: u64,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Integer minor currency units (cents).
    pub price: Option<i64>,
    pub currency: Option<String>,
    pub odometer: Option<i64>,
    pub odometer_unit: Option<String>,
    pub year: Option<i32>,
    pub fuel: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub is_sold: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub sold_at: Option<DateTime<Utc>>,
    /// Miles from the configured location; only present when the
    /// request carried the maxDistance modifier.
    pub distance: Option<f64>,
    /// Eager-loaded nested place, when requested via `$eager`.
    pub place: Option<Place>,
}

/// Nested place entity attached to a listing.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub place_name: String,
    pub admin_name1: String,
}

/// JSON envelope around one page of listings.
#[derive(Debug, Deserialize)]
pub struct PostsResponse {
    pub data: Vec<Listing>,
}
