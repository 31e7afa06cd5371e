//! Test doubles for every port.
//!
//! - `MockLocationDirectory` - Fixed city list plus injectable errors
//! - `MockListingSource` - Queue of pages plus injectable errors
//! - `RecordingMessenger` - Captures outgoing replies

mod listing_source;
mod location_directory;
mod messenger;

pub use listing_source::MockListingSource;
pub use location_directory::MockLocationDirectory;
pub use messenger::RecordingMessenger;
