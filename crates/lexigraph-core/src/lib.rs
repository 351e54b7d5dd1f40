//! Lexigraph Core - Synonym relation store
//!
//! This crate holds the undirected synonym graph and answers
//! transitive-closure lookups over it.

pub mod error;
pub mod limits;
pub mod store;
pub mod traversal;
pub mod word;

pub use error::{Error, Result};
pub use limits::ValidationError;
pub use store::{GraphStats, SynonymStore};
pub use traversal::{Closure, TraversalStats};
pub use word::{Term, Word};
