//! Search modes and the listing order each one asks the provider for.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three search strategies a user can start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Cheapest hotels first (`/lowprice`).
    Cheapest,
    /// Most expensive hotels first (`/highprice`).
    Priciest,
    /// Hotels inside a price and distance range, closest first (`/bestdeal`).
    BestDeal,
}

/// Order in which the listing provider returns results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    PriceAscending,
    PriceDescending,
    DistanceFromLandmark,
}

impl SearchMode {
    pub const ALL: [SearchMode; 3] = [
        SearchMode::Cheapest,
        SearchMode::Priciest,
        SearchMode::BestDeal,
    ];

    /// Resolves the chat command that starts this mode.
    pub fn from_command(command: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.command() == command)
    }

    /// The chat command that starts this mode.
    pub fn command(&self) -> &'static str {
        match self {
            SearchMode::Cheapest => "/lowprice",
            SearchMode::Priciest => "/highprice",
            SearchMode::BestDeal => "/bestdeal",
        }
    }

    pub fn sort_order(&self) -> SortOrder {
        match self {
            SearchMode::Cheapest => SortOrder::PriceAscending,
            SearchMode::Priciest => SortOrder::PriceDescending,
            SearchMode::BestDeal => SortOrder::DistanceFromLandmark,
        }
    }

    /// Best-deal is the only mode that collects price and distance ranges.
    pub fn uses_ranges(&self) -> bool {
        matches!(self, SearchMode::BestDeal)
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SearchMode::Cheapest => "cheapest",
            SearchMode::Priciest => "priciest",
            SearchMode::BestDeal => "best_deal",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_resolve_to_modes() {
        assert_eq!(SearchMode::from_command("/lowprice"), Some(SearchMode::Cheapest));
        assert_eq!(SearchMode::from_command("/highprice"), Some(SearchMode::Priciest));
        assert_eq!(SearchMode::from_command("/bestdeal"), Some(SearchMode::BestDeal));
    }

    #[test]
    fn commands_match_verbatim_only() {
        assert_eq!(SearchMode::from_command("/LowPrice"), None);
        assert_eq!(SearchMode::from_command("lowprice"), None);
        assert_eq!(SearchMode::from_command("/lowprice now"), None);
    }

    #[test]
    fn sort_order_follows_mode() {
        assert_eq!(SearchMode::Cheapest.sort_order(), SortOrder::PriceAscending);
        assert_eq!(SearchMode::Priciest.sort_order(), SortOrder::PriceDescending);
        assert_eq!(SearchMode::BestDeal.sort_order(), SortOrder::DistanceFromLandmark);
    }

    #[test]
    fn only_best_deal_uses_ranges() {
        assert!(SearchMode::BestDeal.uses_ranges());
        assert!(!SearchMode::Cheapest.uses_ranges());
        assert!(!SearchMode::Priciest.uses_ranges());
    }
}
