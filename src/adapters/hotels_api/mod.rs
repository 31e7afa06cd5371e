//! Hotel API Adapters.
//!
//! `HotelsApiClient` implements both remote ports over HTTPS:
//!
//! - `LocationDirectory` - `GET /locations/search`
//! - `ListingSource` - `GET /properties/list`

mod client;
mod locations;
mod properties;
#[cfg(test)]
mod test_server;

pub use client::{HotelsApiClient, HotelsApiConfig};
pub use properties::{ADULTS, PAGE_SIZE};
