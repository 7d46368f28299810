// SPDX-License-Identifier: MIT
use std::collections::HashMap;

use log::{debug, trace};

use crate::distance::metrics::distance;

// ---------------------------------------------------------------------------
// BK-Tree
// ---------------------------------------------------------------------------

// Pruning by |d(q, node) - d(node, child)| <= threshold is only sound because
// true Damerau-Levenshtein satisfies the triangle inequality.

#[derive(Clone, Debug)]
struct BkNode {
    value: String,
    children: HashMap<usize, usize>,
}

/// Burkhard-Keller tree over strings, keyed by true Damerau-Levenshtein distance.
#[derive(Clone, Debug, Default)]
pub struct BkTree {
    nodes: Vec<BkNode>,
}

impl BkTree {
    pub fn new() -> Self {
        BkTree { nodes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Inserts `item`; returns `false` if an identical string is already present.
    pub fn insert(&mut self, item: String) -> bool {
        if self.nodes.is_empty() {
            self.nodes.push(BkNode {
                value: item,
                children: HashMap::new(),
            });
            return true;
        }

        let mut curr = 0;
        loop {
            let dist = distance(&self.nodes[curr].value, &item);

            if dist == 0 {
                return false; // Already exists
            }

            if let Some(&next_node) = self.nodes[curr].children.get(&dist) {
                curr = next_node;
            } else {
                let new_idx = self.nodes.len();
                self.nodes.push(BkNode {
                    value: item,
                    children: HashMap::new(),
                });
                self.nodes[curr].children.insert(dist, new_idx);
                return true;
            }
        }
    }

    /// All stored strings within `threshold` of `query`, closest first
    /// (ties broken lexicographically).
    pub fn find(&self, query: &str, threshold: usize) -> Vec<(&str, usize)> {
        let mut found = Vec::new();
        if self.nodes.is_empty() {
            return found;
        }

        let mut candidates = vec![0];
        let mut visited = 0usize;
        while let Some(curr) = candidates.pop() {
            visited += 1;
            let node = &self.nodes[curr];
            let dist = distance(&node.value, query);
            if dist <= threshold {
                found.push((node.value.as_str(), dist));
            }

            let min_dist = dist.saturating_sub(threshold);
            let max_dist = dist + threshold;
            for (&child_dist, &child_idx) in &node.children {
                if child_dist >= min_dist && child_dist <= max_dist {
                    candidates.push(child_idx);
                } else {
                    trace!("bktree: pruned subtree at edge {child_dist} (query distance {dist})");
                }
            }
        }
        debug!(
            "bktree: query of length {} visited {visited}/{} nodes, {} hits",
            query.chars().count(),
            self.nodes.len(),
            found.len()
        );

        found.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        found
    }

    /// Whether any stored string lies within `threshold` of `query`.
    pub fn contains_near(&self, query: &str, threshold: usize) -> bool {
        if self.nodes.is_empty() {
            return false;
        }

        let mut candidates = vec![0];
        while let Some(curr) = candidates.pop() {
            let node = &self.nodes[curr];
            let dist = distance(&node.value, query);
            if dist <= threshold {
                return true;
            }

            let min_dist = dist.saturating_sub(threshold);
            let max_dist = dist + threshold;
            for (&child_dist, &child_idx) in &node.children {
                if child_dist >= min_dist && child_dist <= max_dist {
                    candidates.push(child_idx);
                }
            }
        }
        false
    }

    /// Keeps each item unless something already kept lies within `threshold`.
    /// Kept items are inserted into the tree; order of first appearance is preserved.
    pub fn dedupe(&mut self, items: Vec<String>, threshold: usize) -> Vec<String> {
        let mut unique = Vec::new();
        for item in items {
            if !self.contains_near(&item, threshold) {
                self.insert(item.clone());
                unique.push(item);
            }
        }
        unique
    }
}
