// SPDX-License-Identifier: MIT
//! True Damerau-Levenshtein edit distance.
//!
//! The minimum number of single-symbol insertions, deletions, substitutions
//! and transpositions turning one sequence into another, where a transposed
//! pair may be arbitrarily far apart (Lowrance-Wagner). Unlike the optimal
//! string alignment variant this is a metric, so it can key a [`BkTree`].
//!
//! Symbols are Unicode code points. Whitespace is significant unless
//! [`Normalization::Trim`] is requested.
//!
//! ```
//! use truedl::{distance, distance_with, DistanceOptions};
//!
//! assert_eq!(distance("Saturday", "Sunday"), 3);
//! assert_eq!(distance(" abc", "abc"), 1);
//! assert_eq!(distance_with(" abc", "abc", &DistanceOptions::trimmed()), 0);
//! ```

pub mod algorithms;
pub mod config;
pub mod distance;
pub mod error;
pub mod process;
pub mod types;
pub mod utils;

#[cfg(feature = "python")]
mod python;

#[cfg(test)]
mod property_tests;

pub use crate::algorithms::Symbol;
pub use crate::config::{DistanceOptions, NormalizedOptions};
pub use crate::distance::bktree::BkTree;
pub use crate::distance::metrics::{
    distance, distance_seq, distance_with, normalized_distance, normalized_similarity, similarity,
};
pub use crate::error::{Error, Result};
pub use crate::process::{cdist, extract, extract_one, Match};
pub use crate::utils::{default_process, Normalization};
