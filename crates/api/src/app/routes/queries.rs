use std::sync::Arc;

use axum::{
    extract::{
        Extension, Path, Query,
        rejection::{PathRejection, QueryRejection},
    },
    response::Response,
};

use crate::app::routes::common::json_ok;
use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// `GET /find_by_style?style_name=India+Pale+Ale`
pub async fn find_by_style(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<dto::FindByStyleQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => return errors::query_rejection(rejection),
    };

    match services.catalog.find_by_style(query.style_name).await {
        Ok(beers) => json_ok(beers),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

/// `GET /currently_available/:flag` where flag is `true` or `false`.
pub async fn currently_available(
    Extension(services): Extension<Arc<AppServices>>,
    flag: Result<Path<String>, PathRejection>,
) -> Response {
    let Path(flag) = match flag {
        Ok(f) => f,
        Err(rejection) => return errors::path_rejection(rejection),
    };

    match services.catalog.currently_available(&flag).await {
        Ok(beers) => json_ok(beers),
        Err(e) => errors::catalog_error_to_response(e),
    }
}
