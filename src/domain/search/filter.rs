//! The per-chat search filter and the value objects it accumulates.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::LocationId;

use super::SearchMode;

/// Inclusive nightly price bounds attached to best-deal queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
}

/// Distance-to-center bounds in kilometres, used by best-deal filtering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceRange {
    pub min: f64,
    pub max: f64,
}

/// How a requested hotel count was adjusted to fit `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountAdjustment {
    Unchanged,
    LoweredToMaximum,
    RaisedToMinimum,
}

/// Number of hotels a search returns at most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelCount(u8);

impl HotelCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn maximum() -> Self {
        Self(Self::MAX)
    }

    /// Fits a user-requested count into the allowed range.
    pub fn from_requested(requested: i64) -> (Self, CountAdjustment) {
        if requested > i64::from(Self::MAX) {
            (Self(Self::MAX), CountAdjustment::LoweredToMaximum)
        } else if requested < i64::from(Self::MIN) {
            (Self(Self::MIN), CountAdjustment::RaisedToMinimum)
        } else {
            (Self(requested as u8), CountAdjustment::Unchanged)
        }
    }

    pub fn get(&self) -> usize {
        usize::from(self.0)
    }
}

/// Parameters collected across one dialogue.
///
/// The mode is fixed at creation. The remaining fields are filled in the
/// order the conversation asks for them; best-deal-only fields stay empty
/// for the other modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchFilter {
    mode: SearchMode,
    location_id: Option<LocationId>,
    location_name: Option<String>,
    min_price: Option<i64>,
    max_price: Option<i64>,
    min_distance: Option<f64>,
    max_distance: Option<f64>,
    hotel_count: Option<HotelCount>,
}

impl SearchFilter {
    pub fn new(mode: SearchMode) -> Self {
        Self {
            mode,
            location_id: None,
            location_name: None,
            min_price: None,
            max_price: None,
            min_distance: None,
            max_distance: None,
            hotel_count: None,
        }
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn location_id(&self) -> Option<&LocationId> {
        self.location_id.as_ref()
    }

    pub fn location_name(&self) -> Option<&str> {
        self.location_name.as_deref()
    }

    pub fn min_price(&self) -> Option<i64> {
        self.min_price
    }

    pub fn max_price(&self) -> Option<i64> {
        self.max_price
    }

    pub fn min_distance(&self) -> Option<f64> {
        self.min_distance
    }

    pub fn max_distance(&self) -> Option<f64> {
        self.max_distance
    }

    pub fn hotel_count(&self) -> Option<HotelCount> {
        self.hotel_count
    }

    /// Both price bounds, once the second one has been collected.
    pub fn price_range(&self) -> Option<PriceRange> {
        Some(PriceRange {
            min: self.min_price?,
            max: self.max_price?,
        })
    }

    /// Both distance bounds, once the second one has been collected.
    pub fn distance_range(&self) -> Option<DistanceRange> {
        Some(DistanceRange {
            min: self.min_distance?,
            max: self.max_distance?,
        })
    }

    pub fn set_location(&mut self, id: LocationId, name: impl Into<String>) {
        self.location_id = Some(id);
        self.location_name = Some(name.into());
    }

    pub fn set_min_price(&mut self, value: i64) {
        self.min_price = Some(value);
    }

    pub fn set_max_price(&mut self, value: i64) {
        self.max_price = Some(value);
    }

    pub fn set_min_distance(&mut self, value: f64) {
        self.min_distance = Some(value);
    }

    pub fn set_max_distance(&mut self, value: f64) {
        self.max_distance = Some(value);
    }

    pub fn set_hotel_count(&mut self, count: HotelCount) {
        self.hotel_count = Some(count);
    }

    /// Sets the location (builder style).
    pub fn with_location(mut self, id: LocationId, name: impl Into<String>) -> Self {
        self.set_location(id, name);
        self
    }

    /// Sets both price bounds (builder style).
    pub fn with_price_range(mut self, min: i64, max: i64) -> Self {
        self.set_min_price(min);
        self.set_max_price(max);
        self
    }

    /// Sets both distance bounds (builder style).
    pub fn with_distance_range(mut self, min: f64, max: f64) -> Self {
        self.set_min_distance(min);
        self.set_max_distance(max);
        self
    }

    /// Sets the hotel count (builder style).
    pub fn with_hotel_count(mut self, count: HotelCount) -> Self {
        self.set_hotel_count(count);
        self
    }
}
