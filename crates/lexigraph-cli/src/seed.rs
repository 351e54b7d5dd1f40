//! Seed files: initial word/synonym pairs loaded into a fresh store

use std::path::Path;

use anyhow::Context;
use lexigraph_core::{SynonymStore, Term};
use serde::Deserialize;
use serde_json::Value;

/// One entry of a seed file
#[derive(Debug, Deserialize)]
pub struct SeedPair {
    pub word: Option<Value>,
    pub synonym: Option<Value>,
}

/// Load every pair from the JSON array at `path` into `store`.
///
/// Stops at the first invalid entry; pairs before it stay loaded.
pub fn load_seed(path: &Path, store: &SynonymStore) -> anyhow::Result<usize> {
    tracing::info!("Loading seed file {:?}", path);

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let pairs: Vec<SeedPair> = serde_json::from_str(&content)
        .with_context(|| format!("Seed file {} is not a JSON array of pairs", path.display()))?;

    for (index, pair) in pairs.iter().enumerate() {
        let word = Term::from_json("word", pair.word.clone())
            .with_context(|| format!("Invalid seed entry #{}", index))?;
        let synonym = Term::from_json("synonym", pair.synonym.clone())
            .with_context(|| format!("Invalid seed entry #{}", index))?;
        store
            .add_synonym(word, synonym)
            .with_context(|| format!("Invalid seed entry #{}", index))?;
    }

    tracing::debug!("Loaded {} seed pairs", pairs.len());
    Ok(pairs.len())
}
