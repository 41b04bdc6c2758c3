//! Error types for the cappedset library.
//!
//! ## Key Components
//!
//! - [`SetError`]: Returned by operations that fail on a missing key or an
//!   out-of-bounds position. These are hard failures: the set is left
//!   unchanged.
//! - [`ConfigError`]: Returned when construction parameters are invalid
//!   (zero capacity).
//! - [`InvariantError`]: Returned when internal data-structure invariants are
//!   violated (`check_invariants` methods, used by tests and fuzzers).
//!
//! ## Example Usage
//!
//! ```
//! use cappedset::error::{ConfigError, SetError};
//! use cappedset::set::CappedSet;
//!
//! // Fallible constructor for user-configurable capacity
//! let set: Result<CappedSet<u64, u64>, ConfigError> = CappedSet::try_new(0);
//! assert!(set.is_err());
//!
//! let set: CappedSet<u64, u64> = CappedSet::new(8);
//! assert_eq!(set.value_of(&1), Err(SetError::KeyNotFound));
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// SetError
// ---------------------------------------------------------------------------

/// Error returned by set operations that reference a missing key or position.
///
/// `update` and `value_of` fail with [`SetError::KeyNotFound`] when the key
/// has no entry; `element_at` fails with [`SetError::PositionOutOfRange`]
/// when the position is not below the current length. `remove` never returns
/// this error: removing an absent key is deliberately a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetError {
    /// The supplied key has no entry in the set.
    KeyNotFound,
    /// The supplied position is not below the current entry count.
    PositionOutOfRange { position: usize, len: usize },
}

impl fmt::Display for SetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetError::KeyNotFound => f.write_str("key not found"),
            SetError::PositionOutOfRange { position, len } => {
                write!(f, "position {position} out of range for length {len}")
            },
        }
    }
}

impl std::error::Error for SetError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when construction parameters are invalid.
///
/// Produced by fallible constructors such as
/// [`CappedSet::try_new`](crate::set::CappedSet::try_new). Carries a
/// human-readable description of which parameter failed validation.
///
/// # Example
///
/// ```
/// use cappedset::set::CappedSet;
///
/// let err = CappedSet::<u64, u64>::try_new(0).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal structural invariants are violated.
///
/// Produced by `check_invariants` methods on
/// [`IndexedPairs`](crate::ds::IndexedPairs) and
/// [`CappedSet`](crate::set::CappedSet). Carries a human-readable description
/// of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- SetError -----------------------------------------------------------

    #[test]
    fn set_error_not_found_display() {
        assert_eq!(SetError::KeyNotFound.to_string(), "key not found");
    }

    #[test]
    fn set_error_out_of_range_display_names_both_numbers() {
        let err = SetError::PositionOutOfRange { position: 7, len: 3 };
        let msg = err.to_string();
        assert!(msg.contains('7'));
        assert!(msg.contains('3'));
    }

    #[test]
    fn set_error_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<SetError>();
    }

    // -- ConfigError ----------------------------------------------------------

    #[test]
    fn config_display_shows_message() {
        let err = ConfigError::new("capacity must be > 0");
        assert_eq!(err.to_string(), "capacity must be > 0");
    }

    #[test]
    fn config_message_accessor() {
        let err = ConfigError::new("test");
        assert_eq!(err.message(), "test");
    }

    #[test]
    fn config_clone_and_eq() {
        let a = ConfigError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }

    // -- InvariantError ---------------------------------------------------

    #[test]
    fn invariant_display_shows_message() {
        let err = InvariantError::new("entry/index length mismatch");
        assert_eq!(err.to_string(), "entry/index length mismatch");
    }

    #[test]
    fn invariant_debug_includes_message() {
        let err = InvariantError::new("bad position");
        let dbg = format!("{:?}", err);
        assert!(dbg.contains("bad position"));
    }

    #[test]
    fn invariant_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<InvariantError>();
    }
}
