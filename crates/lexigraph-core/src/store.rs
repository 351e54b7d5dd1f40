//! In-memory synonym store

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::traversal::{self, Adjacency, Closure};
use crate::word::{Term, Word};

/// Size of the relation graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub words: usize,
    pub edges: usize,
}

/// Owns the synonym relation graph.
///
/// Every edge is stored in both directions and a word is present only while
/// it has at least one synonym. A single lock serializes writers against
/// readers, so no caller ever sees one half of an edge.
pub struct SynonymStore {
    adjacency: RwLock<Adjacency>,
}

impl SynonymStore {
    pub fn new() -> Self {
        Self {
            adjacency: RwLock::new(Adjacency::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Adjacency>> {
        self.adjacency
            .read()
            .map_err(|e| Error::Internal(format!("Lock error: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Adjacency>> {
        self.adjacency
            .write()
            .map_err(|e| Error::Internal(format!("Lock error: {}", e)))
    }

    /// Record `word` and `synonym` as direct synonyms of each other
    pub fn add_synonym(&self, word: impl Into<Term>, synonym: impl Into<Term>) -> Result<()> {
        let word = word.into().normalize("word")?;
        let synonym = synonym.into().normalize("synonym")?;

        let mut graph = self.write()?;
        graph
            .entry(word.clone())
            .or_default()
            .insert(synonym.clone());
        graph.entry(synonym.clone()).or_default().insert(word.clone());

        tracing::debug!("Linked {} <-> {}", word, synonym);
        Ok(())
    }

    /// Drop the edge between `word` and `synonym`, if any.
    ///
    /// Words left without synonyms are removed from the graph.
    pub fn remove_synonym(&self, word: impl Into<Term>, synonym: impl Into<Term>) -> Result<()> {
        let word = word.into().normalize("word")?;
        let synonym = synonym.into().normalize("synonym")?;

        let mut graph = self.write()?;
        detach(&mut graph, &word, &synonym);
        detach(&mut graph, &synonym, &word);

        tracing::debug!("Unlinked {} <-> {}", word, synonym);
        Ok(())
    }

    /// All words reachable from `word` through one or more edges
    pub fn find_synonyms(&self, word: impl Into<Term>) -> Result<Vec<Word>> {
        Ok(self.synonyms_with_stats(word)?.synonyms)
    }

    /// Same as [`find_synonyms`](Self::find_synonyms), with traversal stats
    pub fn synonyms_with_stats(&self, word: impl Into<Term>) -> Result<Closure> {
        let word = word.into().normalize("word")?;
        let graph = self.read()?;
        Ok(traversal::closure(&graph, &word))
    }

    /// Direct synonyms of `word` only
    pub fn neighbors(&self, word: impl Into<Term>) -> Result<Vec<Word>> {
        let word = word.into().normalize("word")?;
        let graph = self.read()?;
        Ok(graph
            .get(&word)
            .map(|set| set.iter().filter(|w| **w != word).cloned().collect())
            .unwrap_or_default())
    }

    /// Whether `word` currently has any synonym
    pub fn contains(&self, word: impl Into<Term>) -> Result<bool> {
        let word = word.into().normalize("word")?;
        Ok(self.read()?.contains_key(&word))
    }

    pub fn stats(&self) -> Result<GraphStats> {
        let graph = self.read()?;
        // Each edge appears under both endpoints; self-loops appear once.
        let edges = graph
            .iter()
            .map(|(word, set)| set.iter().filter(|other| word <= *other).count())
            .sum();
        Ok(GraphStats {
            words: graph.len(),
            edges,
        })
    }

    pub fn clear(&self) -> Result<()> {
        self.write()?.clear();
        Ok(())
    }
}

impl Default for SynonymStore {
    fn default() -> Self {
        Self::new()
    }
}

fn detach(graph: &mut Adjacency, from: &Word, to: &Word) {
    let Some(set) = graph.get_mut(from) else {
        return;
    };
    set.remove(to);
    if set.is_empty() {
        graph.remove(from);
    }
}
