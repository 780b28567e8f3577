//! Deterministic catalog fixture.
//!
//! Three styles and three beers. Two beers share `Brettanomyces Saison`, one
//! belongs to `India Pale Ale`, and `Pilsner2` has no beers so it can be removed.
//! Two beers are currently available, one is not.

use cerebral_catalog::{NewBeer, NewStyle};
use cerebral_core::DomainResult;

use crate::repository::{CatalogRepository, RepositoryError};

const STYLES: &[(&str, &str)] = &[
    (
        "Brettanomyces Saison",
        "Funky farmhouse ale fermented with wild Brettanomyces yeast",
    ),
    ("India Pale Ale", "Hop-forward pale ale with a bitter finish"),
    ("Pilsner2", "Crisp, light lager"),
];

// (name, description, abv, is_available, style)
const BEERS: &[(&str, &str, &str, bool, &str)] = &[
    (
        "Guava-ing Through Dimensions",
        "a very good beer",
        "6.7%",
        true,
        "Brettanomyces Saison",
    ),
    (
        "Tangerine-ing Through Dimensions",
        "an ok beer",
        "6.7%",
        true,
        "Brettanomyces Saison",
    ),
    ("Trembling Giant", "a big hazy IPA", "7.5%", false, "India Pale Ale"),
];

pub fn styles() -> DomainResult<Vec<NewStyle>> {
    STYLES
        .iter()
        .map(|(name, description)| NewStyle::new(*name, *description))
        .collect()
}

pub fn beers() -> DomainResult<Vec<NewBeer>> {
    BEERS
        .iter()
        .map(|(name, description, abv, is_available, style)| {
            NewBeer::new(name, *description, *abv, *is_available, *style)
        })
        .collect()
}

/// Replace the repository contents with the fixture.
pub async fn run<R>(repo: &R) -> Result<(), RepositoryError>
where
    R: CatalogRepository + ?Sized,
{
    let styles = styles().map_err(|e| RepositoryError::Database(format!("invalid seed style: {e}")))?;
    let beers = beers().map_err(|e| RepositoryError::Database(format!("invalid seed beer: {e}")))?;
    tracing::info!(styles = styles.len(), beers = beers.len(), "seeding catalog");
    repo.reseed(styles, beers).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_is_valid() {
        assert_eq!(styles().unwrap().len(), 3);
        let beers = beers().unwrap();
        assert_eq!(beers.len(), 3);
        assert_eq!(beers[0].name.as_str(), "GUAVA-ING THROUGH DIMENSIONS");
        assert_eq!(beers.iter().filter(|b| b.is_available).count(), 2);
    }
}
