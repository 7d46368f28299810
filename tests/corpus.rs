// SPDX-License-Identifier: MIT
// Metric axioms over random samples drawn from a word list.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use truedl::{cdist, distance, distance_with, BkTree, DistanceOptions};

const ITERATIONS: usize = 5_000;

fn words() -> Vec<&'static str> {
    include_str!("data/words.txt").lines().filter(|l| !l.is_empty()).collect()
}

fn sample<'a>(rng: &mut StdRng, words: &[&'a str]) -> &'a str {
    words.choose(rng).copied().unwrap_or_default()
}

#[test]
fn non_negative_and_identity() {
    let words = words();
    let mut rng = StdRng::seed_from_u64(0x7d1);
    for _ in 0..ITERATIONS {
        let a = sample(&mut rng, &words);
        let b = sample(&mut rng, &words);
        assert_eq!(distance(a, a), 0, "a={a:?}");
        assert_eq!(distance(a, b) == 0, a == b, "a={a:?} b={b:?}");
    }
}

#[test]
fn symmetry() {
    let words = words();
    let mut rng = StdRng::seed_from_u64(0x5e7);
    for _ in 0..ITERATIONS {
        let a = sample(&mut rng, &words);
        let b = sample(&mut rng, &words);
        assert_eq!(distance(a, b), distance(b, a), "a={a:?} b={b:?}");
    }
}

#[test]
fn triangle_inequality() {
    let words = words();
    let mut rng = StdRng::seed_from_u64(0x3a9);
    for _ in 0..ITERATIONS {
        let a = sample(&mut rng, &words);
        let b = sample(&mut rng, &words);
        let c = sample(&mut rng, &words);
        let (ab, bc, ac) = (distance(a, b), distance(b, c), distance(a, c));
        assert!(ab + bc >= ac, "a={a:?} b={b:?} c={c:?}");
        assert!(ab + ac >= bc, "a={a:?} b={b:?} c={c:?}");
        assert!(ac + bc >= ab, "a={a:?} b={b:?} c={c:?}");
    }
}

#[test]
fn padding_only_matters_without_trim() {
    let words = words();
    let mut rng = StdRng::seed_from_u64(0x71);
    let trimmed = DistanceOptions::trimmed();
    for _ in 0..ITERATIONS / 10 {
        let a = sample(&mut rng, &words);
        let b = sample(&mut rng, &words);
        let padded = format!("  {a}\t");
        assert_eq!(distance_with(&padded, b, &trimmed), distance(a, b));
        assert_eq!(distance(&padded, a), 3);
    }
}

#[test]
fn cdist_matches_pairwise() {
    let words = words();
    let mut rng = StdRng::seed_from_u64(0xcd);
    let queries: Vec<&str> = (0..20).map(|_| sample(&mut rng, &words)).collect();
    let choices: Vec<&str> = (0..30).map(|_| sample(&mut rng, &words)).collect();
    let matrix = cdist(&queries, &choices, &DistanceOptions::default());
    for (q, row) in queries.iter().zip(&matrix) {
        for (c, &d) in choices.iter().zip(row) {
            assert_eq!(d, distance(q, c));
        }
    }
}

#[test]
fn bktree_agrees_with_linear_scan() {
    let words = words();
    let mut tree = BkTree::new();
    for w in &words {
        tree.insert(w.to_string());
    }
    let mut rng = StdRng::seed_from_u64(0xb7);
    for _ in 0..50 {
        let q = sample(&mut rng, &words);
        let mut expected: Vec<(&str, usize)> = words
            .iter()
            .map(|w| (*w, distance(w, q)))
            .filter(|&(_, d)| d <= 2)
            .collect();
        expected.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        expected.dedup();
        assert_eq!(tree.find(q, 2), expected, "query={q:?}");
    }
}
