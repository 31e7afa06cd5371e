//! Mock Location Directory for testing.
//!
//! Holds a fixed list of city entities and applies the same matching rule
//! as the HTTP adapter. Errors can be queued to simulate transport faults.
//!
//! # Example
//!
//! ```ignore
//! let directory = MockLocationDirectory::new()
//!     .with_city("1506246", "Paris")
//!     .with_error(ApiError::network("connection reset"));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::foundation::LocationId;
use crate::domain::search::{CityCandidate, CityLookup};
use crate::ports::{ApiError, LocationDirectory};

/// Mock directory for testing.
#[derive(Debug, Clone, Default)]
pub struct MockLocationDirectory {
    cities: Arc<Mutex<Vec<CityCandidate>>>,
    /// Errors returned before any lookups succeed (consumed in order).
    errors: Arc<Mutex<VecDeque<ApiError>>>,
    /// Call history for verification.
    queries: Arc<Mutex<Vec<String>>>,
}

impl MockLocationDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a city-group entity.
    pub fn with_city(self, location_id: impl Into<String>, name: impl Into<String>) -> Self {
        self.cities
            .lock()
            .unwrap()
            .push(CityCandidate::new(LocationId::new(location_id), name));
        self
    }

    /// Queues an error for the next lookup.
    pub fn with_error(self, error: ApiError) -> Self {
        self.errors.lock().unwrap().push_back(error);
        self
    }

    /// Returns the names looked up so far.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl LocationDirectory for MockLocationDirectory {
    async fn resolve_city(&self, name: &str) -> Result<CityLookup, ApiError> {
        self.queries.lock().unwrap().push(name.to_string());

        if let Some(error) = self.errors.lock().unwrap().pop_front() {
            return Err(error);
        }

        let cities = self.cities.lock().unwrap().clone();
        Ok(CityLookup::from_candidates(name, cities))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolves_configured_city_ignoring_case() {
        let directory = MockLocationDirectory::new().with_city("1", "Paris");
        let lookup = directory.resolve_city("pArIs").await.unwrap();
        assert!(lookup.is_found());
        assert_eq!(directory.queries(), vec!["pArIs".to_string()]);
    }

    #[tokio::test]
    async fn queued_error_is_returned_once() {
        let directory = MockLocationDirectory::new()
            .with_city("1", "Paris")
            .with_error(ApiError::status(500, "boom"));

        assert!(directory.resolve_city("Paris").await.is_err());
        assert!(directory.resolve_city("Paris").await.is_ok());
    }
}
