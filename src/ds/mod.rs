pub mod indexed_pairs;

pub use indexed_pairs::{Entry, IndexedPairs};
