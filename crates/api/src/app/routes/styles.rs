use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Extension, Path,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::Response,
    routing::{delete, get},
};

use cerebral_core::StyleName;

use crate::app::routes::common::{json_message, json_ok};
use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/styles", get(list_styles).post(create_style))
        .route("/styles/", get(list_styles).post(create_style))
        .route("/styles/:name", delete(delete_style))
}

pub async fn list_styles(Extension(services): Extension<Arc<AppServices>>) -> Response {
    match services.catalog.list_styles().await {
        Ok(styles) => json_ok(styles),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn create_style(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CreateStyleRequest>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection(rejection),
    };
    let style = match body.into_new_style() {
        Ok(s) => s,
        Err(e) => return errors::catalog_error_to_response(e.into()),
    };

    match services.catalog.add_style(style).await {
        Ok(_) => json_message(StatusCode::CREATED, "Beer Style successfully added!"),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

/// The percent-decoded segment is the style name as stored; `+` stays a `+`.
pub async fn delete_style(
    Extension(services): Extension<Arc<AppServices>>,
    name: Result<Path<String>, PathRejection>,
) -> Response {
    let Path(name) = match name {
        Ok(n) => n,
        Err(rejection) => return errors::path_rejection(rejection),
    };

    match services.catalog.delete_style(StyleName::new(name)).await {
        Ok(deleted) => json_message(
            StatusCode::ACCEPTED,
            format!("Style '{deleted}' successfully deleted"),
        ),
        Err(e) => errors::catalog_error_to_response(e),
    }
}
