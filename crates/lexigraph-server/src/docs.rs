//! OpenAPI document for the synonym routes

use axum::Json;
use utoipa::OpenApi;

use crate::error::{ErrorDetail, ErrorResponse};
use crate::handlers::{self, MessageResponse, PairRequest, SynonymsResponse, WordRequest};

/// Path the generated document is served under
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lexigraph API",
        description = "Add, remove and transitively look up synonyms"
    ),
    paths(
        handlers::add_synonym,
        handlers::find_synonyms,
        handlers::delete_synonym
    ),
    components(schemas(
        PairRequest,
        WordRequest,
        MessageResponse,
        SynonymsResponse,
        ErrorResponse,
        ErrorDetail
    )),
    tags((name = "synonyms", description = "Synonym graph operations"))
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
