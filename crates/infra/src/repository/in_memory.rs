use std::sync::RwLock;

use chrono::Utc;

use cerebral_catalog::{Beer, NewBeer, NewStyle, Style};
use cerebral_core::{BeerName, Entity, StyleName};

use super::{CatalogRepository, RepositoryError};

#[derive(Debug, Default)]
struct CatalogState {
    styles: Vec<Style>,
    beers: Vec<Beer>,
    next_style_id: i64,
    next_beer_id: i64,
}

impl CatalogState {
    fn push_style(&mut self, style: NewStyle) -> Result<Style, RepositoryError> {
        if self.styles.iter().any(|s| s.is(&style.style_name)) {
            return Err(RepositoryError::duplicate_style(&style.style_name));
        }
        self.next_style_id += 1;
        let stored = Style {
            id: self.next_style_id,
            style_name: style.style_name,
            description: style.description,
            created_at: Utc::now(),
        };
        self.styles.push(stored.clone());
        Ok(stored)
    }

    fn push_beer(&mut self, beer: NewBeer) -> Result<Beer, RepositoryError> {
        if !self.styles.iter().any(|s| s.is(&beer.style)) {
            return Err(RepositoryError::UnknownStyle(beer.style.to_string()));
        }
        if self.beers.iter().any(|b| b.is(&beer.name)) {
            return Err(RepositoryError::duplicate_beer(&beer.name));
        }
        self.next_beer_id += 1;
        let stored = Beer {
            id: self.next_beer_id,
            name: beer.name,
            description: beer.description,
            abv: beer.abv,
            is_available: beer.is_available,
            style: beer.style,
            created_at: Utc::now(),
        };
        self.beers.push(stored.clone());
        Ok(stored)
    }
}

/// Drop the record addressed by `key`. Returns whether one was present.
fn remove_by_key<E: Entity>(records: &mut Vec<E>, key: &E::Key) -> bool {
    match records.iter().position(|r| r.is(key)) {
        Some(index) => {
            records.remove(index);
            true
        }
        None => false,
    }
}

/// In-memory catalog store for tests/dev.
///
/// Records live in insertion-ordered vectors; ids are assigned from per-table
/// counters that restart on `reseed`.
#[derive(Debug, Default)]
pub struct InMemoryCatalogRepository {
    inner: RwLock<CatalogState>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, CatalogState>, RepositoryError> {
        self.inner
            .read()
            .map_err(|_| RepositoryError::Database("catalog lock poisoned".to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, CatalogState>, RepositoryError> {
        self.inner
            .write()
            .map_err(|_| RepositoryError::Database("catalog lock poisoned".to_string()))
    }

    fn beers_where(&self, keep: impl Fn(&Beer) -> bool) -> Result<Vec<Beer>, RepositoryError> {
        Ok(self.read()?.beers.iter().filter(|b| keep(b)).cloned().collect())
    }
}

#[async_trait::async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn list_styles(&self) -> Result<Vec<Style>, RepositoryError> {
        Ok(self.read()?.styles.clone())
    }

    async fn insert_style(&self, style: NewStyle) -> Result<Style, RepositoryError> {
        self.write()?.push_style(style)
    }

    async fn delete_style(&self, name: &StyleName) -> Result<bool, RepositoryError> {
        let mut state = self.write()?;
        if state.beers.iter().any(|b| &b.style == name) {
            return Err(RepositoryError::StyleInUse(name.to_string()));
        }
        Ok(remove_by_key(&mut state.styles, name))
    }

    async fn list_beers(&self) -> Result<Vec<Beer>, RepositoryError> {
        Ok(self.read()?.beers.clone())
    }

    async fn beers_by_style(&self, style: &StyleName) -> Result<Vec<Beer>, RepositoryError> {
        self.beers_where(|b| &b.style == style)
    }

    async fn beers_by_availability(&self, is_available: bool) -> Result<Vec<Beer>, RepositoryError> {
        self.beers_where(|b| b.is_available == is_available)
    }

    async fn count_beers_of_style(&self, style: &StyleName) -> Result<u64, RepositoryError> {
        Ok(self.read()?.beers.iter().filter(|b| &b.style == style).count() as u64)
    }

    async fn insert_beer(&self, beer: NewBeer) -> Result<Beer, RepositoryError> {
        self.write()?.push_beer(beer)
    }

    async fn delete_beer(&self, name: &BeerName) -> Result<bool, RepositoryError> {
        Ok(remove_by_key(&mut self.write()?.beers, name))
    }

    async fn reseed(&self, styles: Vec<NewStyle>, beers: Vec<NewBeer>) -> Result<(), RepositoryError> {
        let mut fresh = CatalogState::default();
        for style in styles {
            fresh.push_style(style)?;
        }
        for beer in beers {
            fresh.push_beer(beer)?;
        }
        *self.write()? = fresh;
        Ok(())
    }
}
