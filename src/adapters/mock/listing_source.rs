//! Mock Listing Source for testing.
//!
//! Serves pre-configured pages in order. Once the queue is exhausted every
//! further request gets an empty page, which ends pagination.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::search::{PageQuery, RawListing};
use crate::ports::{ApiError, ListingSource};

/// Mock listing source for testing.
#[derive(Debug, Clone, Default)]
pub struct MockListingSource {
    pages: Arc<Mutex<VecDeque<Result<Vec<RawListing>, ApiError>>>>,
    queries: Arc<Mutex<Vec<PageQuery>>>,
}

impl MockListingSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a page to the queue.
    pub fn with_page(self, listings: Vec<RawListing>) -> Self {
        self.pages.lock().unwrap().push_back(Ok(listings));
        self
    }

    /// Adds a failing page to the queue.
    pub fn with_error(self, error: ApiError) -> Self {
        self.pages.lock().unwrap().push_back(Err(error));
        self
    }

    /// Returns the number of pages requested.
    pub fn call_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    /// Returns all recorded queries.
    pub fn queries(&self) -> Vec<PageQuery> {
        self.queries.lock().unwrap().clone()
    }

    /// Builds a raw listing with the given distance and price text.
    pub fn listing(name: &str, distance: Option<&str>, price: &str) -> RawListing {
        RawListing {
            name: Some(name.to_string()),
            street_address: format!("{} street", name),
            first_landmark_distance: distance.map(str::to_string),
            price: Some(price.to_string()),
        }
    }
}

#[async_trait]
impl ListingSource for MockListingSource {
    async fn fetch_page(&self, query: &PageQuery) -> Result<Vec<RawListing>, ApiError> {
        self.queries.lock().unwrap().push(query.clone());
        self.pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
