//! CAOM2 entity types.
//!
//! These are attribute containers with validating setters. They embed the
//! typed collections from [`crate::typed`] and rely on them to reject
//! wrongly-typed content at the point of insertion.

pub mod observation;
pub mod plane;
pub mod target;
pub mod wcs;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use observation::Observation;
pub use plane::{CalibrationLevel, Plane};
pub use target::{Target, TargetType};
pub use wcs::{CoordFunction1D, RefCoord};

/// Type tag reported by every CAOM2 entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntityType {
    Observation,
    Plane,
    Target,
    RefCoord,
    CoordFunction1D,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
