//! Listing Source Port - fetches pages of hotel listings.

use async_trait::async_trait;

use crate::domain::search::{PageQuery, RawListing};

use super::ApiError;

/// Port for fetching one page of listings for a resolved location.
///
/// An empty page marks the end of the results.
#[async_trait]
pub trait ListingSource: Send + Sync {
    async fn fetch_page(&self, query: &PageQuery) -> Result<Vec<RawListing>, ApiError>;
}
