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

use cerebral_core::BeerName;

use crate::app::routes::common::{json_message, json_ok};
use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/beer", get(list_beers).post(create_beer))
        .route("/beer/", get(list_beers).post(create_beer))
        .route("/beer/:name", delete(delete_beer))
}

pub async fn list_beers(Extension(services): Extension<Arc<AppServices>>) -> Response {
    match services.catalog.list_beers().await {
        Ok(beers) => json_ok(beers),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn create_beer(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CreateBeerRequest>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection(rejection),
    };
    let beer = match body.into_new_beer() {
        Ok(b) => b,
        Err(e) => return errors::catalog_error_to_response(e.into()),
    };

    match services.catalog.add_beer(beer).await {
        Ok(_) => json_message(StatusCode::CREATED, "Beer successfully added!"),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

/// Case-insensitive: `/beer/Trembling+Giant` removes `TREMBLING GIANT`.
pub async fn delete_beer(
    Extension(services): Extension<Arc<AppServices>>,
    name: Result<Path<String>, PathRejection>,
) -> Response {
    let Path(name) = match name {
        Ok(n) => n,
        Err(rejection) => return errors::path_rejection(rejection),
    };

    match services.catalog.delete_beer(BeerName::from_path(&name)).await {
        Ok(deleted) => json_message(
            StatusCode::ACCEPTED,
            format!("Beer '{deleted}' successfully deleted"),
        ),
        Err(e) => errors::catalog_error_to_response(e),
    }
}
