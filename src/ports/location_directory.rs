//! Location Directory Port - resolves free-text city names.

use async_trait::async_trait;

use crate::domain::search::CityLookup;

use super::ApiError;

/// Port for resolving a city name to a canonical location.
#[async_trait]
pub trait LocationDirectory: Send + Sync {
    /// Looks up `name` ignoring case.
    ///
    /// Returns `CityLookup::NotFound` when no city-type entity matches exactly,
    /// and `ApiError` on transport faults or non-success statuses.
    async fn resolve_city(&self, name: &str) -> Result<CityLookup, ApiError>;
}
