use axum::{Router, routing::get};

pub mod beer;
pub mod common;
pub mod queries;
pub mod styles;
pub mod system;

/// Path prefix every catalog endpoint lives under.
pub const API_PREFIX: &str = "/api/v1/cerebral_beers";

/// Router for the catalog endpoints (mounted under [`API_PREFIX`]).
///
/// Resource routers register full paths, trailing-slash forms included, and are
/// merged rather than nested.
pub fn router() -> Router {
    Router::new()
        .merge(styles::router())
        .merge(beer::router())
        .route("/find_by_style", get(queries::find_by_style))
        .route("/currently_available/:flag", get(queries::currently_available))
}
