//! Request handlers for the synonym routes

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use lexigraph_core::{SynonymStore, Term, Word};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::error::{ApiError, ErrorResponse};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SynonymStore>,
}

impl AppState {
    pub fn new(store: Arc<SynonymStore>) -> Self {
        Self { store }
    }
}

/// Body of add and delete requests.
///
/// Fields stay raw JSON so that missing, `null` and wrongly typed values
/// are reported by the store's own validation.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PairRequest {
    /// String or number
    #[schema(value_type = String, example = "clean")]
    pub word: Option<Value>,
    /// String or number
    #[schema(value_type = String, example = "wash")]
    pub synonym: Option<Value>,
}

impl PairRequest {
    fn into_terms(self) -> Result<(Term, Term), ApiError> {
        let word = Term::from_json("word", self.word)?;
        let synonym = Term::from_json("synonym", self.synonym)?;
        Ok((word, synonym))
    }
}

/// Body of lookup requests
#[derive(Debug, Deserialize, ToSchema)]
pub struct WordRequest {
    /// String or number
    #[schema(value_type = String, example = "clean")]
    pub word: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SynonymsResponse {
    /// Every word reachable from the queried one, excluding itself
    #[schema(value_type = Vec<String>)]
    pub synonyms: Vec<Word>,
}

/// POST /api/add-synonym
#[utoipa::path(
    post,
    path = "/api/add-synonym",
    tag = "synonyms",
    request_body = PairRequest,
    responses(
        (status = 201, description = "Synonym added", body = MessageResponse),
        (status = 400, description = "Missing or invalid word", body = ErrorResponse)
    )
)]
pub async fn add_synonym(
    State(state): State<AppState>,
    payload: Result<Json<PairRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let (word, synonym) = request.into_terms()?;

    state.store.add_synonym(word.clone(), synonym.clone())?;
    tracing::info!("Synonym added: \"{}\" for \"{}\"", synonym, word);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: format!("Synonym \"{}\" added for \"{}\".", synonym, word),
        }),
    ))
}

/// POST /api/find-synonym
#[utoipa::path(
    post,
    path = "/api/find-synonym",
    tag = "synonyms",
    request_body = WordRequest,
    responses(
        (status = 200, description = "Transitive synonyms, empty for unknown words", body = SynonymsResponse),
        (status = 400, description = "Missing or invalid word", body = ErrorResponse)
    )
)]
pub async fn find_synonyms(
    State(state): State<AppState>,
    payload: Result<Json<WordRequest>, JsonRejection>,
) -> Result<Json<SynonymsResponse>, ApiError> {
    let Json(request) = payload?;
    let word = Term::from_json("word", request.word)?;

    let synonyms = state.store.find_synonyms(word)?;
    Ok(Json(SynonymsResponse { synonyms }))
}

/// DELETE /api/delete-synonym
#[utoipa::path(
    delete,
    path = "/api/delete-synonym",
    tag = "synonyms",
    request_body = PairRequest,
    responses(
        (status = 200, description = "Synonym removed, or was never present", body = MessageResponse),
        (status = 400, description = "Missing or invalid word", body = ErrorResponse)
    )
)]
pub async fn delete_synonym(
    State(state): State<AppState>,
    payload: Result<Json<PairRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(request) = payload?;
    let (word, synonym) = request.into_terms()?;

    state.store.remove_synonym(word.clone(), synonym.clone())?;
    tracing::info!("Synonym deleted: \"{}\" for \"{}\"", synonym, word);

    Ok(Json(MessageResponse {
        message: format!("Synonym \"{}\" deleted for \"{}\".", synonym, word),
    }))
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let stats = state.store.stats()?;
    Ok(Json(serde_json::json!({
        "status": "ok",
        "server": "lexigraph",
        "version": env!("CARGO_PKG_VERSION"),
        "words": stats.words,
        "edges": stats.edges
    })))
}
