//! Catalog storage abstraction.
//!
//! Handlers never touch a connection directly: a single `CatalogRepository` is
//! built at startup and shared behind an `Arc`. Two implementations exist:
//!
//! - [`InMemoryCatalogRepository`]: dev/test backend, no external services
//! - [`PostgresCatalogRepository`]: persistent backend over a `sqlx::PgPool`
//!
//! Both enforce the same storage constraints (unique names, beers must reference an
//! existing style, a referenced style cannot be removed) so that the service layer
//! behaves identically on either.

use std::sync::Arc;

use thiserror::Error;

use cerebral_catalog::{Beer, NewBeer, NewStyle, Style};
use cerebral_core::{BeerName, StyleName};

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryCatalogRepository;
pub use postgres::PostgresCatalogRepository;

/// Errors raised by a storage backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Unique name constraint violated.
    #[error("{entity} '{name}' already exists")]
    Duplicate { entity: &'static str, name: String },

    /// A beer referenced a style that does not exist.
    #[error("No style '{0}' found in database")]
    UnknownStyle(String),

    /// A style is still referenced by at least one beer.
    #[error("style '{0}' is referenced by beers")]
    StyleInUse(String),

    /// Any other backend failure (connection, decoding, ...).
    #[error("database error: {0}")]
    Database(String),
}

impl RepositoryError {
    pub fn duplicate_style(name: &StyleName) -> Self {
        Self::Duplicate {
            entity: "Style",
            name: name.to_string(),
        }
    }

    pub fn duplicate_beer(name: &BeerName) -> Self {
        Self::Duplicate {
            entity: "Beer",
            name: name.to_string(),
        }
    }
}

/// Data access for styles and beers.
///
/// Listings are returned in insertion order.
#[async_trait::async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn list_styles(&self) -> Result<Vec<Style>, RepositoryError>;

    async fn insert_style(&self, style: NewStyle) -> Result<Style, RepositoryError>;

    /// Remove a style. Returns `false` if no style had that name.
    async fn delete_style(&self, name: &StyleName) -> Result<bool, RepositoryError>;

    async fn list_beers(&self) -> Result<Vec<Beer>, RepositoryError>;

    async fn beers_by_style(&self, style: &StyleName) -> Result<Vec<Beer>, RepositoryError>;

    async fn beers_by_availability(&self, is_available: bool) -> Result<Vec<Beer>, RepositoryError>;

    /// Number of beers that reference `style`.
    async fn count_beers_of_style(&self, style: &StyleName) -> Result<u64, RepositoryError>;

    async fn insert_beer(&self, beer: NewBeer) -> Result<Beer, RepositoryError>;

    /// Remove a beer by its normalized name. Returns `false` if absent.
    async fn delete_beer(&self, name: &BeerName) -> Result<bool, RepositoryError>;

    /// Replace the whole catalog with the given records (styles first).
    async fn reseed(&self, styles: Vec<NewStyle>, beers: Vec<NewBeer>) -> Result<(), RepositoryError>;
}

#[async_trait::async_trait]
impl<R> CatalogRepository for Arc<R>
where
    R: CatalogRepository + ?Sized,
{
    async fn list_styles(&self) -> Result<Vec<Style>, RepositoryError> {
        (**self).list_styles().await
    }

    async fn insert_style(&self, style: NewStyle) -> Result<Style, RepositoryError> {
        (**self).insert_style(style).await
    }

    async fn delete_style(&self, name: &StyleName) -> Result<bool, RepositoryError> {
        (**self).delete_style(name).await
    }

    async fn list_beers(&self) -> Result<Vec<Beer>, RepositoryError> {
        (**self).list_beers().await
    }

    async fn beers_by_style(&self, style: &StyleName) -> Result<Vec<Beer>, RepositoryError> {
        (**self).beers_by_style(style).await
    }

    async fn beers_by_availability(&self, is_available: bool) -> Result<Vec<Beer>, RepositoryError> {
        (**self).beers_by_availability(is_available).await
    }

    async fn count_beers_of_style(&self, style: &StyleName) -> Result<u64, RepositoryError> {
        (**self).count_beers_of_style(style).await
    }

    async fn insert_beer(&self, beer: NewBeer) -> Result<Beer, RepositoryError> {
        (**self).insert_beer(beer).await
    }

    async fn delete_beer(&self, name: &BeerName) -> Result<bool, RepositoryError> {
        (**self).delete_beer(name).await
    }

    async fn reseed(&self, styles: Vec<NewStyle>, beers: Vec<NewBeer>) -> Result<(), RepositoryError> {
        (**self).reseed(styles, beers).await
    }
}
