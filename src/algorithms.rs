// SPDX-License-Identifier: MIT
// Pure Rust kernel for the true (unrestricted) Damerau-Levenshtein distance.
// Lowrance-Wagner recurrence: O(NM) time, O(NM) space, any transposition span.

use rustc_hash::FxHashMap;

/// A comparable unit of a sequence. Symbols below 256 get a dense table slot.
pub trait Symbol: Copy + Eq + std::hash::Hash {
    fn as_index(&self) -> Option<usize>;
}
impl Symbol for u8 {
    #[inline] fn as_index(&self) -> Option<usize> { Some(*self as usize) }
}
impl Symbol for u32 {
    #[inline] fn as_index(&self) -> Option<usize> { if *self < 256 { Some(*self as usize) } else { None } }
}
impl Symbol for u64 {
    #[inline] fn as_index(&self) -> Option<usize> { if *self < 256 { Some(*self as usize) } else { None } }
}
impl Symbol for char {
    #[inline] fn as_index(&self) -> Option<usize> { (*self as u32).as_index() }
}

/// Last row of `a` (1-based) at which each symbol was seen; 0 means never.
pub struct LastOccurrence<T: Symbol> {
    ascii: [usize; 256],
    fallback: FxHashMap<T, usize>,
}

impl<T: Symbol> LastOccurrence<T> {
    #[inline(always)]
    pub fn new() -> Self {
        LastOccurrence { ascii: [0; 256], fallback: FxHashMap::default() }
    }

    #[inline(always)]
    pub fn get(&self, c: T) -> usize {
        if let Some(idx) = c.as_index() {
            self.ascii[idx]
        } else {
            self.fallback.get(&c).copied().unwrap_or(0)
        }
    }

    #[inline(always)]
    pub fn set(&mut self, c: T, row: usize) {
        if let Some(idx) = c.as_index() {
            self.ascii[idx] = row;
        } else {
            self.fallback.insert(c, row);
        }
    }
}

impl<T: Symbol> Default for LastOccurrence<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Helper: common prefix/suffix lengths
// ---------------------------------------------------------------------------
#[inline]
pub fn common_prefix<T: Symbol>(s1: &[T], s2: &[T]) -> usize {
    s1.iter().zip(s2.iter()).take_while(|(a, b)| a == b).count()
}

#[inline]
pub fn common_suffix<T: Symbol>(s1: &[T], s2: &[T]) -> usize {
    s1.iter()
        .rev()
        .zip(s2.iter().rev())
        .take_while(|(a, b)| a == b)
        .count()
}

// ===========================================================================
// DAMERAU-LEVENSHTEIN (true, with transpositions)
// ===========================================================================

pub fn damerau_levenshtein<T: Symbol>(s1: &[T], s2: &[T]) -> usize {
    let pfx = common_prefix(s1, s2);
    let (s1, s2) = (&s1[pfx..], &s2[pfx..]);
    let sfx = common_suffix(s1, s2);
    let (s1, s2) = (&s1[..s1.len() - sfx], &s2[..s2.len() - sfx]);

    let m = s1.len();
    let n = s2.len();
    if m == 0 { return n; }
    if n == 0 { return m; }

    let max_dist = m + n;
    let mut da: LastOccurrence<T> = LastOccurrence::new();

    // Flat row-major matrix, stride = n+2, so dp[i][j] = flat[i * stride + j].
    let stride = n + 2;
    let mut flat = vec![0usize; (m + 2) * stride];

    // Sentinel borders
    flat[0] = max_dist; // dp[0][0]
    for i in 0..=m {
        flat[(i + 1) * stride] = max_dist; // dp[i+1][0]
        flat[(i + 1) * stride + 1] = i;    // dp[i+1][1]
    }
    for j in 0..=n {
        flat[j + 1] = max_dist;   // dp[0][j+1]
        flat[stride + j + 1] = j; // dp[1][j+1]
    }

    for i in 1..=m {
        let ch1 = s1[i - 1];
        let mut db = 0usize;
        for j in 1..=n {
            let ch2 = s2[j - 1];
            // k < i and l < j always hold, so the gap terms cannot underflow.
            let k = da.get(ch2);
            let l = db;
            let cost = if ch1 == ch2 { db = j; 0 } else { 1 };

            let sub = flat[i * stride + j] + cost;       // dp[i][j] + cost
            let ins = flat[(i + 1) * stride + j] + 1;   // dp[i+1][j] + 1
            let del = flat[i * stride + j + 1] + 1;     // dp[i][j+1] + 1
            let trans = flat[k * stride + l]
                + (i - k - 1) + 1 + (j - l - 1);        // dp[k][l] + gaps
            flat[(i + 1) * stride + j + 1] = sub.min(ins).min(del).min(trans);
        }
        da.set(ch1, i);
    }
    flat[(m + 1) * stride + n + 1]
}

/// Upper bound of the distance between sequences of these lengths.
#[inline]
pub fn max_distance(len1: usize, len2: usize) -> usize {
    len1.max(len2)
}

pub fn normalized_distance(dist: usize, max_dist: usize) -> f64 {
    if max_dist == 0 {
        0.0
    } else {
        dist as f64 / max_dist as f64
    }
}

pub fn normalized_similarity(dist: usize, max_dist: usize) -> f64 {
    1.0 - normalized_distance(dist, max_dist)
}
