//! cappedset: a fixed-capacity key/value set with lowest-value eviction.
//!
//! The crate centers on [`set::CappedSet`], a bounded associative collection
//! that maps unique keys to numeric values and, when an insertion into a full
//! set occurs, evicts the entry holding the smallest value.

pub mod ds;
pub mod error;
pub mod set;
pub mod traits;

pub mod prelude;
