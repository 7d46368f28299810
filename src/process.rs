// SPDX-License-Identifier: MIT
// Batch scoring of one or many queries against a list of choices.

use log::debug;
use rayon::prelude::*;

use crate::config::DistanceOptions;
use crate::distance::metrics::distance_with;

/// Below this many choices the per-choice work is too small to be worth
/// handing to the thread pool.
const PARALLEL_THRESHOLD: usize = 1_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match<'a> {
    pub index: usize,
    pub choice: &'a str,
    pub distance: usize,
}

fn score_all<'a, S>(query: &str, choices: &'a [S], opts: &DistanceOptions) -> Vec<Match<'a>>
where
    S: AsRef<str> + Sync,
{
    let score = |(index, choice): (usize, &'a S)| {
        let choice = choice.as_ref();
        Match { index, choice, distance: distance_with(query, choice, opts) }
    };

    if choices.len() >= PARALLEL_THRESHOLD {
        choices
            .par_iter()
            .enumerate()
            .map(score)
            .filter(|m| opts.accepts(m.distance))
            .collect()
    } else {
        choices
            .iter()
            .enumerate()
            .map(score)
            .filter(|m| opts.accepts(m.distance))
            .collect()
    }
}

/// Closest choices to `query`, ascending by distance then by index.
/// Choices beyond the cutoff are dropped; `limit = None` keeps all of them.
pub fn extract<'a, S>(
    query: &str,
    choices: &'a [S],
    limit: Option<usize>,
    opts: &DistanceOptions,
) -> Vec<Match<'a>>
where
    S: AsRef<str> + Sync,
{
    let mut results = score_all(query, choices, opts);
    results.sort_by(|a, b| a.distance.cmp(&b.distance).then(a.index.cmp(&b.index)));
    if let Some(limit) = limit {
        results.truncate(limit);
    }
    debug!(
        "extract: {} of {} choices kept (limit {:?}, cutoff {:?})",
        results.len(),
        choices.len(),
        limit,
        opts.score_cutoff
    );
    results
}

/// Single best choice, or `None` when nothing is within the cutoff.
pub fn extract_one<'a, S>(query: &str, choices: &'a [S], opts: &DistanceOptions) -> Option<Match<'a>>
where
    S: AsRef<str> + Sync,
{
    score_all(query, choices, opts)
        .into_iter()
        .min_by(|a, b| a.distance.cmp(&b.distance).then(a.index.cmp(&b.index)))
}

/// Pairwise distance matrix, `result[i][j] = distance(queries[i], choices[j])`.
/// Rows are computed in parallel; cutoffs are applied per cell.
pub fn cdist<Q, C>(queries: &[Q], choices: &[C], opts: &DistanceOptions) -> Vec<Vec<usize>>
where
    Q: AsRef<str> + Sync,
    C: AsRef<str> + Sync,
{
    debug!("cdist: {}x{} matrix", queries.len(), choices.len());
    queries
        .par_iter()
        .map(|q| {
            let q = q.as_ref();
            choices
                .iter()
                .map(|c| distance_with(q, c.as_ref(), opts))
                .collect()
        })
        .collect()
}
