//! Lexigraph Server - HTTP API around the synonym store
//!
//! Decodes JSON requests, hands validated terms to
//! [`lexigraph_core::SynonymStore`] and maps its errors onto status codes.

pub mod docs;
pub mod error;
pub mod handlers;
pub mod router;

pub use docs::ApiDoc;
pub use error::ApiError;
pub use handlers::AppState;
pub use router::{create_router, run_server, ServerOptions};
