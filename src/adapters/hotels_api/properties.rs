//! Listing pages from `GET /properties/list`.

use async_trait::async_trait;
use chrono::Local;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::search::{PageQuery, RawListing, SortOrder, StayWindow};
use crate::ports::{ApiError, ListingSource};

use super::HotelsApiClient;

/// Results requested per page.
pub const PAGE_SIZE: u32 = 25;
/// Adults per room.
pub const ADULTS: u32 = 1;

#[async_trait]
impl ListingSource for HotelsApiClient {
    async fn fetch_page(&self, query: &PageQuery) -> Result<Vec<RawListing>, ApiError> {
        let window = StayWindow::starting_tomorrow(Local::now().date_naive());
        let params = listing_params(query, window, &self.config.locale, &self.config.currency);
        let response: PropertiesResponse = self.get_json("/properties/list", &params).await?;

        let listings: Vec<RawListing> = response
            .data
            .body
            .search_results
            .results
            .into_iter()
            .map(PropertyDto::into_raw)
            .collect();
        tracing::debug!(
            location = %query.location_id,
            page = query.page,
            count = listings.len(),
            "Fetched listing page"
        );
        Ok(listings)
    }
}

fn sort_order_param(order: SortOrder) -> &'static str {
    match order {
        SortOrder::PriceAscending => "PRICE",
        SortOrder::PriceDescending => "PRICE_HIGHEST_FIRST",
        SortOrder::DistanceFromLandmark => "DISTANCE_FROM_LANDMARK",
    }
}

/// Builds the query string for one listing page.
fn listing_params(
    query: &PageQuery,
    window: StayWindow,
    locale: &str,
    currency: &str,
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("adults1", ADULTS.to_string()),
        ("pageNumber", query.page.to_string()),
        ("destinationId", query.location_id.to_string()),
        ("checkIn", window.check_in.to_string()),
        ("checkOut", window.check_out.to_string()),
        ("locale", locale.to_string()),
        ("pageSize", PAGE_SIZE.to_string()),
        ("currency", currency.to_string()),
        ("sortOrder", sort_order_param(query.sort_order).to_string()),
    ];
    if let Some(range) = query.price_range {
        params.push(("priceMin", range.min.to_string()));
        params.push(("priceMax", range.max.to_string()));
    }
    params
}

/// Prices and distances come back as text, occasionally as bare numbers.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// ----- Hotel API Types -----

#[derive(Debug, Deserialize)]
struct PropertiesResponse {
    data: PropertiesData,
}

#[derive(Debug, Deserialize)]
struct PropertiesData {
    body: PropertiesBody,
}

#[derive(Debug, Deserialize)]
struct PropertiesBody {
    #[serde(rename = "searchResults")]
    search_results: SearchResults,
}

#[derive(Debug, Deserialize)]
struct SearchResults {
    #[serde(default)]
    results: Vec<PropertyDto>,
}

#[derive(Debug, Deserialize)]
struct PropertyDto {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    address: Option<AddressDto>,
    #[serde(default)]
    landmarks: Vec<LandmarkDto>,
    #[serde(rename = "ratePlan", default)]
    rate_plan: Option<RatePlanDto>,
}

#[derive(Debug, Deserialize)]
struct AddressDto {
    #[serde(rename = "streetAddress", default)]
    street_address: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LandmarkDto {
    #[serde(default)]
    distance: Value,
}

#[derive(Debug, Deserialize)]
struct RatePlanDto {
    #[serde(default)]
    price: Option<PriceDto>,
}

#[derive(Debug, Deserialize)]
struct PriceDto {
    #[serde(default)]
    current: Value,
}

impl PropertyDto {
    // Only the first landmark is read; the provider lists the city center first.
    fn into_raw(self) -> RawListing {
        RawListing {
            name: self.name,
            street_address: self
                .address
                .and_then(|a| a.street_address)
                .unwrap_or_default(),
            first_landmark_distance: self
                .landmarks
                .first()
                .and_then(|landmark| value_text(&landmark.distance)),
            price: self
                .rate_plan
                .and_then(|plan| plan.price)
                .and_then(|price| value_text(&price.current)),
        }
    }
}
