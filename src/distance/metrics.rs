// SPDX-License-Identifier: MIT
// Text-level scorers built on the Damerau-Levenshtein kernel.
// Each function handles: normalisation policy, score_cutoff, code-point decoding.

use crate::algorithms as alg;
use crate::config::{DistanceOptions, NormalizedOptions};
use crate::dispatch_seq;
use crate::types::Seq;
use crate::utils::Normalization;

/// Distance and symbol-length upper bound of two normalised inputs.
fn raw(s1: &str, s2: &str, normalization: Normalization) -> (usize, usize) {
    let a = Seq::from_str(normalization.apply(s1));
    let b = Seq::from_str(normalization.apply(s2));
    let dist = dispatch_seq!(alg::damerau_levenshtein, &a, &b);
    (dist, alg::max_distance(a.len(), b.len()))
}

/// True Damerau-Levenshtein distance between `s1` and `s2`, compared verbatim.
///
/// Symbols are Unicode code points. The result is `0` iff the inputs are equal.
///
/// ```
/// assert_eq!(truedl::distance("CA", "ABC"), 2);
/// assert_eq!(truedl::distance("kitten", "sitting"), 3);
/// ```
pub fn distance(s1: &str, s2: &str) -> usize {
    distance_with(s1, s2, &DistanceOptions::default())
}

pub fn distance_with(s1: &str, s2: &str, opts: &DistanceOptions) -> usize {
    let (dist, _) = raw(s1, s2, opts.normalization);
    opts.apply_cutoff(dist)
}

/// Distance over arbitrary symbol slices (tokens, ids, bytes).
pub fn distance_seq<T: alg::Symbol>(s1: &[T], s2: &[T]) -> usize {
    alg::damerau_levenshtein(s1, s2)
}

/// `max(len1, len2) - distance`. With a cutoff, similarities below it are `0`.
pub fn similarity(s1: &str, s2: &str, opts: &DistanceOptions) -> usize {
    let (dist, max_v) = raw(s1, s2, opts.normalization);
    let sim = max_v.saturating_sub(dist);
    match opts.score_cutoff {
        Some(c) if sim < c => 0,
        _ => sim,
    }
}

/// Distance divided by the longer input's length, in `[0.0, 1.0]`.
/// With a cutoff, values above it are reported as `1.0`.
pub fn normalized_distance(s1: &str, s2: &str, opts: &NormalizedOptions) -> f64 {
    let (dist, max_v) = raw(s1, s2, opts.normalization());
    let nd = alg::normalized_distance(dist, max_v);
    match opts.score_cutoff() {
        Some(c) if nd > c => 1.0,
        _ => nd,
    }
}

/// `1.0 - normalized_distance`. With a cutoff, values below it are reported as `0.0`.
pub fn normalized_similarity(s1: &str, s2: &str, opts: &NormalizedOptions) -> f64 {
    let (dist, max_v) = raw(s1, s2, opts.normalization());
    let ns = alg::normalized_similarity(dist, max_v);
    match opts.score_cutoff() {
        Some(c) if ns < c => 0.0,
        _ => ns,
    }
}
