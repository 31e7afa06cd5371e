//! ListingAggregator - pages through a listing source until a search is satisfied.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::search::{format_listings, DistanceRange, Listing, PageQuery, SearchFilter};
use crate::ports::{ApiError, ListingSource};

/// Default cap on pages requested for one search.
pub const DEFAULT_MAX_PAGES: u32 = 50;

/// Errors that abort a search.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("Listing source failed: {0}")]
    Api(#[from] ApiError),

    #[error("Search filter is missing {0}")]
    IncompleteFilter(&'static str),
}

/// Collects listings for a completed search filter.
pub struct ListingAggregator {
    source: Arc<dyn ListingSource>,
    max_pages: u32,
    currency: String,
}

impl ListingAggregator {
    pub fn new(source: Arc<dyn ListingSource>, currency: impl Into<String>) -> Self {
        Self {
            source,
            max_pages: DEFAULT_MAX_PAGES,
            currency: currency.into(),
        }
    }

    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    /// Runs the search and renders the result.
    ///
    /// Returns an empty string when nothing matched.
    pub async fn collect(&self, filter: &SearchFilter) -> Result<String, SearchError> {
        let listings = self.collect_listings(filter).await?;
        Ok(format_listings(&listings, &self.currency))
    }

    /// Runs the search and returns the matching listings in source order.
    ///
    /// Pagination ends on an empty page, once the requested count is reached,
    /// or, for range searches, at the first listing beyond the maximum
    /// distance. Listings closer than the minimum distance are skipped.
    #[tracing::instrument(skip(self, filter), fields(mode = %filter.mode()))]
    pub async fn collect_listings(&self, filter: &SearchFilter) -> Result<Vec<Listing>, SearchError> {
        let location_id = filter
            .location_id()
            .ok_or(SearchError::IncompleteFilter("location"))?;
        let wanted = filter
            .hotel_count()
            .ok_or(SearchError::IncompleteFilter("hotel count"))?
            .get();

        let mode = filter.mode();
        let (price_range, distance_range) = if mode.uses_ranges() {
            let prices = filter
                .price_range()
                .ok_or(SearchError::IncompleteFilter("price range"))?;
            let distances = filter
                .distance_range()
                .ok_or(SearchError::IncompleteFilter("distance range"))?;
            (Some(prices), Some(distances))
        } else {
            (None, None)
        };

        let mut collected = Vec::with_capacity(wanted);
        let mut page = 1;

        'pages: loop {
            if page > self.max_pages {
                tracing::warn!(
                    max_pages = self.max_pages,
                    "Page limit reached, returning partial result"
                );
                break;
            }

            let query = PageQuery::new(location_id.clone(), mode.sort_order(), price_range, page);
            let raw_page = self.source.fetch_page(&query).await?;
            tracing::debug!(page, results = raw_page.len(), "Scanning listing page");

            if raw_page.is_empty() {
                break;
            }

            for raw in raw_page {
                let listing = match Listing::try_from_raw(raw) {
                    Ok(listing) => listing,
                    Err(e) => {
                        tracing::warn!(error = %e, "Skipping malformed listing");
                        continue;
                    }
                };

                if let Some(range) = distance_range {
                    match placement(&listing, range) {
                        Placement::TooClose => continue,
                        Placement::TooFar => break 'pages,
                        Placement::Within => {}
                    }
                }

                collected.push(listing);
                if collected.len() >= wanted {
                    break 'pages;
                }
            }

            page += 1;
        }

        tracing::info!(found = collected.len(), "Search finished");
        Ok(collected)
    }
}

enum Placement {
    TooClose,
    Within,
    TooFar,
}

fn placement(listing: &Listing, range: DistanceRange) -> Placement {
    let distance = listing.effective_distance();
    if distance > range.max {
        Placement::TooFar
    } else if distance < range.min {
        Placement::TooClose
    } else {
        Placement::Within
    }
}
