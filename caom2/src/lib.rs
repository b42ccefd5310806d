//! CAOM2 - typed in-memory object model for astronomical observation metadata.
//!
//! The heart of the crate is [`typed`]: lists, sets and key-derived ordered
//! mappings that check the type of every value at the point of insertion.
//! Entity types in [`core`] embed those containers so that malformed metadata
//! is rejected as early as possible.

mod macros;

pub mod config;
pub mod conversions;
pub mod core;
pub mod error;
pub mod typed;
pub mod validation;

pub use error::{Caom2Error, Caom2Result};
pub use typed::{ClassProperty, Keyed, PermittedTypes, Typed, TypedList, TypedOrderedDict, TypedSet};
