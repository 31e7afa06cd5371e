//! Page queries sent to the listing provider.

use chrono::{Duration, NaiveDate};

use crate::domain::foundation::LocationId;

use super::{PriceRange, SortOrder};

/// Fixed two-night stay used for every search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayWindow {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl StayWindow {
    /// Check-in tomorrow, check-out two nights later.
    pub fn starting_tomorrow(today: NaiveDate) -> Self {
        Self {
            check_in: today + Duration::days(1),
            check_out: today + Duration::days(3),
        }
    }
}

/// One page request for a resolved location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub location_id: LocationId,
    pub sort_order: SortOrder,
    /// Only present for best-deal searches.
    pub price_range: Option<PriceRange>,
    /// 1-based page number.
    pub page: u32,
}

impl PageQuery {
    pub fn new(
        location_id: LocationId,
        sort_order: SortOrder,
        price_range: Option<PriceRange>,
        page: u32,
    ) -> Self {
        Self {
            location_id,
            sort_order,
            price_range,
            page,
        }
    }
}
