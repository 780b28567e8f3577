//! Catalog request rules (application-level orchestration).
//!
//! This module owns every decision the HTTP layer exposes; handlers only translate
//! between HTTP and these calls.
//!
//! ## Rules
//!
//! - **Style delete**: refused while any beer references the style, reported as
//!   not found when the style does not exist.
//! - **Beer delete**: the name is normalized to uppercase before lookup, so deletes are
//!   case-insensitive and the returned name is the uppercase form.
//! - **Find by style**: an absent or empty `style_name` is a usage error. Any other value,
//!   whitespace included, is looked up, and an unknown style yields "no beers found"
//!   rather than an empty list.
//! - **Availability filter**: only the literal flags `true` / `false` are accepted.
//!
//! The service holds no state besides the injected repository.

use thiserror::Error;
use tracing::{debug, info};

use cerebral_catalog::{Availability, Beer, NewBeer, NewStyle, Style};
use cerebral_core::{BeerName, DomainError, StyleName};

use crate::repository::{CatalogRepository, RepositoryError};

/// Body of the error returned when a style still has beers attached.
pub const STYLE_IN_USE_MESSAGE: &str = "You're most likely trying to delete a style that has beers attached to it. Please remove those beers first!";

/// Body of the error returned when `find_by_style` is called without `style_name`.
pub const MISSING_STYLE_NAME_MESSAGE: &str = "Request must include 'style_name'. All first letter must be capitalized and spaces replaced by pluses. Example: '/api/v1/cerebral_beers/find_by_style?style_name=India+Pale+Ale'";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("No style '{0}' found in database")]
    StyleNotFound(StyleName),

    #[error("No beer '{0}' found in database")]
    BeerNotFound(BeerName),

    /// Style still referenced by beers.
    #[error("{}", STYLE_IN_USE_MESSAGE)]
    StyleInUse(StyleName),

    #[error("{}", MISSING_STYLE_NAME_MESSAGE)]
    MissingStyleName,

    #[error("No beers found of style: {0}")]
    NoBeersOfStyle(StyleName),

    /// Availability flag other than `true` / `false`.
    #[error("{0}")]
    InvalidAvailability(String),

    /// Malformed or incomplete input.
    #[error("{0}")]
    Validation(String),

    /// A beer referenced a style that does not exist.
    #[error("No style '{0}' found in database")]
    UnknownStyle(String),

    /// A record with the same name already exists.
    #[error("{0}")]
    Duplicate(String),

    /// Storage backend failure.
    #[error("{0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for CatalogError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::Duplicate { .. } => CatalogError::Duplicate(value.to_string()),
            RepositoryError::UnknownStyle(style) => CatalogError::UnknownStyle(style),
            RepositoryError::StyleInUse(style) => CatalogError::StyleInUse(StyleName::new(style)),
            RepositoryError::Database(_) => CatalogError::Repository(value),
        }
    }
}

impl From<DomainError> for CatalogError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::Validation(msg) => CatalogError::Validation(msg),
        }
    }
}

/// Catalog operations over an injected repository.
#[derive(Debug, Clone)]
pub struct CatalogService<R> {
    repo: R,
}

impl<R> CatalogService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

impl<R> CatalogService<R>
where
    R: CatalogRepository,
{
    pub async fn list_styles(&self) -> Result<Vec<Style>, CatalogError> {
        Ok(self.repo.list_styles().await?)
    }

    pub async fn add_style(&self, style: NewStyle) -> Result<Style, CatalogError> {
        let stored = self.repo.insert_style(style).await?;
        info!(style_name = %stored.style_name, id = stored.id, "style added");
        Ok(stored)
    }

    /// Delete a style that no beer references.
    ///
    /// The dependent-beer check runs before the existence check, so a referenced style is
    /// always reported as in use.
    pub async fn delete_style(&self, name: StyleName) -> Result<StyleName, CatalogError> {
        let attached = self.repo.count_beers_of_style(&name).await?;
        if attached > 0 {
            debug!(style_name = %name, attached, "refusing to delete style with beers");
            return Err(CatalogError::StyleInUse(name));
        }

        if !self.repo.delete_style(&name).await? {
            return Err(CatalogError::StyleNotFound(name));
        }

        info!(style_name = %name, "style deleted");
        Ok(name)
    }

    pub async fn list_beers(&self) -> Result<Vec<Beer>, CatalogError> {
        Ok(self.repo.list_beers().await?)
    }

    pub async fn add_beer(&self, beer: NewBeer) -> Result<Beer, CatalogError> {
        let stored = self.repo.insert_beer(beer).await?;
        info!(name = %stored.name, style = %stored.style, id = stored.id, "beer added");
        Ok(stored)
    }

    pub async fn delete_beer(&self, name: BeerName) -> Result<BeerName, CatalogError> {
        if !self.repo.delete_beer(&name).await? {
            return Err(CatalogError::BeerNotFound(name));
        }

        info!(name = %name, "beer deleted");
        Ok(name)
    }

    pub async fn find_by_style(&self, style_name: Option<String>) -> Result<Vec<Beer>, CatalogError> {
        let style = match style_name {
            Some(raw) if !raw.is_empty() => StyleName::new(raw),
            _ => return Err(CatalogError::MissingStyleName),
        };

        let beers = self.repo.beers_by_style(&style).await?;
        if beers.is_empty() {
            return Err(CatalogError::NoBeersOfStyle(style));
        }
        Ok(beers)
    }

    pub async fn currently_available(&self, flag: &str) -> Result<Vec<Beer>, CatalogError> {
        let availability: Availability = flag
            .parse()
            .map_err(|e: DomainError| CatalogError::InvalidAvailability(e.to_string()))?;
        Ok(self.repo.beers_by_availability(availability.as_bool()).await?)
    }
}
