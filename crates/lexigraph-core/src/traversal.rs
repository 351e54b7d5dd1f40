//! Transitive closure over the synonym adjacency map

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::word::Word;

/// Adjacency map: word -> direct synonyms
pub(crate) type Adjacency = HashMap<Word, HashSet<Word>>;

/// Traversal statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TraversalStats {
    pub nodes_visited: usize,
    pub edges_traversed: usize,
}

/// Every word reachable from `start`, excluding `start` itself
#[derive(Debug, Clone, Serialize)]
pub struct Closure {
    pub start: Word,
    pub synonyms: Vec<Word>,
    pub stats: TraversalStats,
}

/// Iterative depth-first search from `start`.
///
/// The visited set and stack borrow keys from `adjacency`; only reported
/// words are cloned, so each query is linear in the reachable component.
pub(crate) fn closure(adjacency: &Adjacency, start: &Word) -> Closure {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack: Vec<&str> = vec![start.as_str()];
    let mut synonyms = Vec::new();
    let mut stats = TraversalStats::default();

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        stats.nodes_visited += 1;

        let Some(neighbors) = adjacency.get(current) else {
            continue;
        };

        if current != start.as_str() {
            synonyms.push(Word::from_normalized(current));
        }

        for next in neighbors {
            stats.edges_traversed += 1;
            if !visited.contains(next.as_str()) {
                stack.push(next.as_str());
            }
        }
    }

    tracing::debug!(
        "Closure of {} visited {} nodes, traversed {} edges",
        start,
        stats.nodes_visited,
        stats.edges_traversed
    );

    Closure {
        start: start.clone(),
        synonyms,
        stats,
    }
}
