//! Market data models
//!
//! - `observation` - A single raw price record from the feed (PriceObservation)

mod observation;

pub use observation::PriceObservation;
