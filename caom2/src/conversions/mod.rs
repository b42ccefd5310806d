//! Conversion helpers between CAOM2 wire-level representations and Rust types.
//!
//! CAOM-2.0 identified entities with 64-bit integers where later versions use
//! UUIDs, and timestamps travel as IVOA-formatted strings.

pub mod dates;
pub mod ids;

pub use dates::{date_to_ivoa, ivoa_to_date, IVOA_DATE_FORMAT};
pub use ids::{long_to_uuid, uuid_to_long};
