// SPDX-License-Identifier: MIT
//! Property-based tests for the distance metric.
//!
//! 1. **Identity of indiscernibles**: `d(a, b) == 0` iff `a == b`
//! 2. **Symmetry**: `d(a, b) == d(b, a)`
//! 3. **Triangle inequality** over all three permutations
//! 4. **Bounds**: `|len(a) - len(b)| <= d(a, b) <= max(len(a), len(b))`
//! 5. **Transpositions**: an adjacent swap costs exactly 1, any swap at most 2
//! 6. **Code points**: the ASCII byte path and the `char` path agree

use proptest::prelude::*;

use crate::algorithms::damerau_levenshtein;
use crate::config::DistanceOptions;
use crate::distance::metrics::{distance, distance_with};

// ============================================================================
// Generators
// ============================================================================

/// A small alphabet mixing one- to four-byte UTF-8 symbols so that repeated
/// symbols, and therefore transpositions, are common.
const ALPHABET: &[char] = &['a', 'b', 'c', 'd', 'é', 'ß', '日', '🦀'];

fn word() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(ALPHABET), 0..12).prop_map(|cs| cs.into_iter().collect())
}

fn ascii_word() -> impl Strategy<Value = String> {
    "[abcd ]{0,12}"
}

/// A non-empty word plus two distinct positions `i < j` within it.
fn word_with_swap() -> impl Strategy<Value = (Vec<char>, usize, usize)> {
    prop::collection::vec(prop::sample::select(ALPHABET), 2..12).prop_flat_map(|cs| {
        let len = cs.len();
        (Just(cs), 0..len - 1).prop_flat_map(move |(cs, i)| (Just(cs), Just(i), (i + 1)..len))
    })
}

fn proptest_config() -> ProptestConfig {
    let default = ProptestConfig::default();
    ProptestConfig {
        cases: default.cases.max(512),
        ..default
    }
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    #![proptest_config(proptest_config())]

    /// Property 1: zero exactly on equal inputs.
    #[test]
    fn identity_of_indiscernibles(a in word(), b in word()) {
        prop_assert_eq!(distance(&a, &a), 0);
        prop_assert_eq!(distance(&a, &b) == 0, a == b);
    }

    /// Property 2: argument order does not matter.
    #[test]
    fn symmetry(a in word(), b in word()) {
        prop_assert_eq!(distance(&a, &b), distance(&b, &a));
    }

    /// Property 3: no detour through a third string is shorter.
    #[test]
    fn triangle_inequality(a in word(), b in word(), c in word()) {
        let ab = distance(&a, &b);
        let bc = distance(&b, &c);
        let ac = distance(&a, &c);
        prop_assert!(ab + bc >= ac, "d({a:?},{b:?})={ab} + d({b:?},{c:?})={bc} < d({a:?},{c:?})={ac}");
        prop_assert!(ab + ac >= bc);
        prop_assert!(ac + bc >= ab);
    }

    /// Property 4: bounded by the length difference and the longer length.
    #[test]
    fn length_bounds(a in word(), b in word()) {
        let (la, lb) = (a.chars().count(), b.chars().count());
        let d = distance(&a, &b);
        prop_assert!(d >= la.abs_diff(lb));
        prop_assert!(d <= la.max(lb));
    }

    /// Property 5a: swapping two adjacent distinct symbols costs exactly 1.
    #[test]
    fn adjacent_swap_costs_one((cs, i, _j) in word_with_swap()) {
        let mut swapped = cs.clone();
        swapped.swap(i, i + 1);
        let expected = usize::from(cs[i] != cs[i + 1]);
        prop_assert_eq!(damerau_levenshtein(&cs, &swapped), expected);
    }

    /// Property 5b: any swap is bounded by the transposition price and by two substitutions.
    #[test]
    fn distant_swap_bound((cs, i, j) in word_with_swap()) {
        let mut swapped = cs.clone();
        swapped.swap(i, j);
        let d = damerau_levenshtein(&cs, &swapped);
        let gap = j - i - 1;
        prop_assert!(d <= 1 + gap + gap);
        prop_assert!(d <= 2);
        prop_assert_eq!(d == 0, cs[i] == cs[j]);
    }

    /// Property 6: ASCII inputs score the same over bytes and over chars.
    #[test]
    fn byte_and_char_paths_agree(a in ascii_word(), b in ascii_word()) {
        let ac: Vec<char> = a.chars().collect();
        let bc: Vec<char> = b.chars().collect();
        prop_assert_eq!(
            damerau_levenshtein(a.as_bytes(), b.as_bytes()),
            damerau_levenshtein(&ac, &bc)
        );
    }

    /// Trimming is the same as comparing pre-trimmed inputs verbatim.
    #[test]
    fn trim_policy_matches_manual_trim(a in ascii_word(), b in ascii_word()) {
        prop_assert_eq!(
            distance_with(&a, &b, &DistanceOptions::trimmed()),
            distance(a.trim(), b.trim())
        );
    }
}
