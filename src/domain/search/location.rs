//! City lookup results and the matching rule applied to directory entries.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::LocationId;

/// A city entity offered by the location directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityCandidate {
    pub location_id: LocationId,
    pub name: String,
}

impl CityCandidate {
    pub fn new(location_id: LocationId, name: impl Into<String>) -> Self {
        Self {
            location_id,
            name: name.into(),
        }
    }
}

/// Outcome of resolving a free-text city name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CityLookup {
    Found {
        location_id: LocationId,
        canonical_name: String,
    },
    NotFound,
}

impl CityLookup {
    /// Picks the first candidate whose name equals `query` ignoring case.
    ///
    /// A non-empty candidate list without an exact match is still `NotFound`.
    pub fn from_candidates<I>(query: &str, candidates: I) -> Self
    where
        I: IntoIterator<Item = CityCandidate>,
    {
        let wanted = query.to_lowercase();
        candidates
            .into_iter()
            .find(|candidate| candidate.name.to_lowercase() == wanted)
            .map(|candidate| CityLookup::Found {
                location_id: candidate.location_id,
                canonical_name: candidate.name,
            })
            .unwrap_or(CityLookup::NotFound)
    }

    pub fn is_found(&self) -> bool {
        matches!(self, CityLookup::Found { .. })
    }
}
