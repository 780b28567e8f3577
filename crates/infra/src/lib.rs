//! Infrastructure layer: storage backends, schema, seed data and the catalog
//! service that composes them.

pub mod catalog_service;
pub mod db;
pub mod repository;
pub mod seed;

#[cfg(test)]
mod integration_tests;

pub use catalog_service::{CatalogError, CatalogService};
pub use repository::{CatalogRepository, InMemoryCatalogRepository, PostgresCatalogRepository, RepositoryError};
