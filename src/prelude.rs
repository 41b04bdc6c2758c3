pub use crate::ds::{Entry, IndexedPairs};
pub use crate::error::{ConfigError, InvariantError, SetError};
pub use crate::set::{CappedSet, SetMetrics};
pub use crate::traits::{MinEvictingSet, ReadOnlySet};
