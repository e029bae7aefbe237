// city-domain library entry point
pub mod city;
pub mod error;
pub mod provider;
pub mod segment;

pub use city::CityData;
pub use error::DomainError;
pub use provider::CityDataProvider;
pub use segment::{Segment, SegmentId, SegmentKind};
