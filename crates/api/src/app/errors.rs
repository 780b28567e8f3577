use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use cerebral_infra::CatalogError;

use crate::app::routes::common::json_message;

/// Map a catalog failure to its HTTP response.
///
/// Not-found deletes answer with a bare JSON string; everything else carries an
/// `{"error": ...}` object. Find-by-style usage errors keep a 200 status.
pub fn catalog_error_to_response(err: CatalogError) -> Response {
    match &err {
        CatalogError::StyleNotFound(_) | CatalogError::BeerNotFound(_) => {
            json_message(StatusCode::NOT_FOUND, err.to_string())
        }
        CatalogError::StyleInUse(_) => json_error(StatusCode::METHOD_NOT_ALLOWED, err.to_string()),
        CatalogError::MissingStyleName | CatalogError::NoBeersOfStyle(_) => {
            json_error(StatusCode::OK, err.to_string())
        }
        CatalogError::InvalidAvailability(_) => json_error(StatusCode::BAD_REQUEST, err.to_string()),
        CatalogError::Validation(_) | CatalogError::UnknownStyle(_) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
        }
        CatalogError::Duplicate(_) => json_error(StatusCode::CONFLICT, err.to_string()),
        CatalogError::Repository(e) => {
            tracing::warn!("catalog storage failure: {e}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

// Extractor failures keep axum's status code (400/415/422) but answer with the
// same `{"error": ...}` body as every other failure.

pub fn json_rejection(rejection: JsonRejection) -> Response {
    json_error(rejection.status(), rejection.body_text())
}

pub fn query_rejection(rejection: QueryRejection) -> Response {
    json_error(rejection.status(), rejection.body_text())
}

pub fn path_rejection(rejection: PathRejection) -> Response {
    json_error(rejection.status(), rejection.body_text())
}
