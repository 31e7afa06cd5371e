//! Search module - hotel search parameters, listings and city lookups.

mod filter;
mod listing;
mod location;
mod mode;
mod query;

pub use filter::{CountAdjustment, DistanceRange, HotelCount, PriceRange, SearchFilter};
pub use listing::{
    bold_markdown, escape_markdown, format_listings, markdown_to_plain, parse_distance_text,
    parse_price_text, Listing, ListingParseError, RawListing,
};
pub use location::{CityCandidate, CityLookup};
pub use mode::{SearchMode, SortOrder};
pub use query::{PageQuery, StayWindow};
