//! Postgres-backed catalog repository.
//!
//! ## Error Mapping
//!
//! SQLx errors are mapped to `RepositoryError` as follows:
//!
//! | PostgreSQL Error Code | Operation | RepositoryError |
//! |----------------------|-----------|-----------------|
//! | `23505` (unique violation) | insert | `Duplicate` |
//! | `23503` (foreign key violation) | insert beer | `UnknownStyle` |
//! | `23503` (foreign key violation) | delete style | `StyleInUse` |
//! | Any other / pool / decode errors | any | `Database` |
//!
//! The SQLSTATE half of that table lives in [`classify_violation`].
//!
//! ## Ordering
//!
//! Every listing is `ORDER BY id ASC`, i.e. insertion order.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Row};
use tracing::instrument;

use cerebral_catalog::{Beer, NewBeer, NewStyle, Style};
use cerebral_core::{BeerName, StyleName};

use super::{CatalogRepository, RepositoryError};

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

const BEER_COLUMNS: &str = "id, name, description, abv, is_available, style, created_at";

/// Postgres catalog repository.
///
/// Uses a SQLx connection pool, which is `Send + Sync` and cheap to clone.
#[derive(Debug, Clone)]
pub struct PostgresCatalogRepository {
    pool: Arc<PgPool>,
}

impl PostgresCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    async fn fetch_beers(
        &self,
        operation: &str,
        query: sqlx::query::Query<'_, sqlx::Postgres, sqlx::postgres::PgArguments>,
    ) -> Result<Vec<Beer>, RepositoryError> {
        let rows = query
            .fetch_all(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error(operation, e))?;
        decode_rows::<BeerRow, Beer>(operation, &rows)
    }
}

#[async_trait::async_trait]
impl CatalogRepository for PostgresCatalogRepository {
    #[instrument(skip(self), err)]
    async fn list_styles(&self) -> Result<Vec<Style>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, style_name, description, created_at
            FROM styles
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("list_styles", e))?;

        decode_rows::<StyleRow, Style>("list_styles", &rows)
    }

    #[instrument(skip(self, style), fields(style_name = %style.style_name), err)]
    async fn insert_style(&self, style: NewStyle) -> Result<Style, RepositoryError> {
        let row = sqlx::query(
            r#"
            INSERT INTO styles (style_name, description)
            VALUES ($1, $2)
            RETURNING id, style_name, description, created_at
            "#,
        )
        .bind(style.style_name.as_str())
        .bind(&style.description)
        .fetch_one(&*self.pool)
        .await
        .map_err(|e| map_write_error(Write::InsertStyle(&style.style_name), e))?;

        decode_row::<StyleRow, Style>("insert_style", &row)
    }

    #[instrument(skip(self), fields(style_name = %name), err)]
    async fn delete_style(&self, name: &StyleName) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM styles WHERE style_name = $1")
            .bind(name.as_str())
            .execute(&*self.pool)
            .await
            .map_err(|e| map_write_error(Write::DeleteStyle(name), e))?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self), err)]
    async fn list_beers(&self) -> Result<Vec<Beer>, RepositoryError> {
        let sql = format!("SELECT {BEER_COLUMNS} FROM beers ORDER BY id ASC");
        self.fetch_beers("list_beers", sqlx::query(&sql)).await
    }

    #[instrument(skip(self), fields(style = %style), err)]
    async fn beers_by_style(&self, style: &StyleName) -> Result<Vec<Beer>, RepositoryError> {
        let sql = format!("SELECT {BEER_COLUMNS} FROM beers WHERE style = $1 ORDER BY id ASC");
        self.fetch_beers("beers_by_style", sqlx::query(&sql).bind(style.as_str()))
            .await
    }

    #[instrument(skip(self), err)]
    async fn beers_by_availability(&self, is_available: bool) -> Result<Vec<Beer>, RepositoryError> {
        let sql = format!("SELECT {BEER_COLUMNS} FROM beers WHERE is_available = $1 ORDER BY id ASC");
        self.fetch_beers("beers_by_availability", sqlx::query(&sql).bind(is_available))
            .await
    }

    #[instrument(skip(self), fields(style = %style), err)]
    async fn count_beers_of_style(&self, style: &StyleName) -> Result<u64, RepositoryError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM beers WHERE style = $1")
            .bind(style.as_str())
            .fetch_one(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("count_beers_of_style", e))?;

        let total: i64 = row
            .try_get("total")
            .map_err(|e| RepositoryError::Database(format!("failed to read count: {e}")))?;
        Ok(total.max(0) as u64)
    }

    #[instrument(skip(self, beer), fields(name = %beer.name), err)]
    async fn insert_beer(&self, beer: NewBeer) -> Result<Beer, RepositoryError> {
        let sql = format!(
            "INSERT INTO beers (name, description, abv, is_available, style) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {BEER_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(beer.name.as_str())
            .bind(&beer.description)
            .bind(&beer.abv)
            .bind(beer.is_available)
            .bind(beer.style.as_str())
            .fetch_one(&*self.pool)
            .await
            .map_err(|e| map_write_error(Write::InsertBeer(&beer), e))?;

        decode_row::<BeerRow, Beer>("insert_beer", &row)
    }

    #[instrument(skip(self), fields(name = %name), err)]
    async fn delete_beer(&self, name: &BeerName) -> Result<bool, RepositoryError> {
        // Names are stored normalized, so `BeerName::normalize` alone decides equality.
        let result = sqlx::query("DELETE FROM beers WHERE name = $1")
            .bind(name.as_str())
            .execute(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_beer", e))?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, styles, beers), fields(styles = styles.len(), beers = beers.len()), err)]
    async fn reseed(&self, styles: Vec<NewStyle>, beers: Vec<NewBeer>) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error("reseed.begin", e))?;

        sqlx::query("TRUNCATE beers, styles RESTART IDENTITY")
            .execute(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error("reseed.truncate", e))?;

        for style in &styles {
            sqlx::query("INSERT INTO styles (style_name, description) VALUES ($1, $2)")
                .bind(style.style_name.as_str())
                .bind(&style.description)
                .execute(&mut *tx)
                .await
                .map_err(|e| map_sqlx_error("reseed.styles", e))?;
        }

        for beer in &beers {
            sqlx::query(
                "INSERT INTO beers (name, description, abv, is_available, style) VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(beer.name.as_str())
            .bind(&beer.description)
            .bind(&beer.abv)
            .bind(beer.is_available)
            .bind(beer.style.as_str())
            .execute(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error("reseed.beers", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| map_sqlx_error("reseed.commit", e))
    }
}

// -------------------------
// Row mapping
// -------------------------

struct StyleRow {
    id: i64,
    style_name: String,
    description: String,
    created_at: DateTime<Utc>,
}

impl<'r> FromRow<'r, PgRow> for StyleRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(StyleRow {
            id: row.try_get("id")?,
            style_name: row.try_get("style_name")?,
            description: row.try_get("description")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

impl From<StyleRow> for Style {
    fn from(row: StyleRow) -> Self {
        Style {
            id: row.id,
            style_name: StyleName::new(row.style_name),
            description: row.description,
            created_at: row.created_at,
        }
    }
}

struct BeerRow {
    id: i64,
    name: String,
    description: String,
    abv: String,
    is_available: bool,
    style: String,
    created_at: DateTime<Utc>,
}

impl<'r> FromRow<'r, PgRow> for BeerRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(BeerRow {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            abv: row.try_get("abv")?,
            is_available: row.try_get("is_available")?,
            style: row.try_get("style")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

impl From<BeerRow> for Beer {
    fn from(row: BeerRow) -> Self {
        Beer {
            id: row.id,
            name: BeerName::new(row.name),
            description: row.description,
            abv: row.abv,
            is_available: row.is_available,
            style: StyleName::new(row.style),
            created_at: row.created_at,
        }
    }
}

fn decode_row<R, T>(operation: &str, row: &PgRow) -> Result<T, RepositoryError>
where
    R: for<'r> FromRow<'r, PgRow> + Into<T>,
{
    R::from_row(row)
        .map(Into::into)
        .map_err(|e| RepositoryError::Database(format!("failed to decode row in {operation}: {e}")))
}

fn decode_rows<R, T>(operation: &str, rows: &[PgRow]) -> Result<Vec<T>, RepositoryError>
where
    R: for<'r> FromRow<'r, PgRow> + Into<T>,
{
    rows.iter().map(|row| decode_row::<R, T>(operation, row)).collect()
}

/// A write whose constraint violations have a catalog meaning.
#[derive(Debug, Clone, Copy)]
enum Write<'a> {
    InsertStyle(&'a StyleName),
    DeleteStyle(&'a StyleName),
    InsertBeer(&'a NewBeer),
}

impl Write<'_> {
    fn operation(self) -> &'static str {
        match self {
            Write::InsertStyle(_) => "insert_style",
            Write::DeleteStyle(_) => "delete_style",
            Write::InsertBeer(_) => "insert_beer",
        }
    }
}

/// Map a SQLSTATE raised by `write` to its catalog error, if it has one.
fn classify_violation(code: Option<&str>, write: Write<'_>) -> Option<RepositoryError> {
    match (code?, write) {
        (UNIQUE_VIOLATION, Write::InsertStyle(name)) => Some(RepositoryError::duplicate_style(name)),
        (UNIQUE_VIOLATION, Write::InsertBeer(beer)) => Some(RepositoryError::duplicate_beer(&beer.name)),
        (FOREIGN_KEY_VIOLATION, Write::InsertBeer(beer)) => {
            Some(RepositoryError::UnknownStyle(beer.style.to_string()))
        }
        (FOREIGN_KEY_VIOLATION, Write::DeleteStyle(name)) => {
            Some(RepositoryError::StyleInUse(name.to_string()))
        }
        _ => None,
    }
}

fn map_write_error(write: Write<'_>, err: sqlx::Error) -> RepositoryError {
    match classify_violation(db_code(&err).as_deref(), write) {
        Some(classified) => classified,
        None => map_sqlx_error(write.operation(), err),
    }
}

/// SQLSTATE of a database error, if any.
fn db_code(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().map(|c| c.into_owned()),
        _ => None,
    }
}

fn map_sqlx_error(operation: &str, err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::Database(db_err) => {
            RepositoryError::Database(format!("database error in {}: {}", operation, db_err.message()))
        }
        sqlx::Error::PoolClosed => {
            RepositoryError::Database(format!("connection pool closed in {}", operation))
        }
        sqlx::Error::RowNotFound => {
            RepositoryError::Database(format!("unexpected row not found in {}", operation))
        }
        _ => RepositoryError::Database(format!("sqlx error in {}: {}", operation, err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beer() -> NewBeer {
        NewBeer::new("trembling giant", "hazy", "7.5%", false, "India Pale Ale").unwrap()
    }

    #[test]
    fn unique_violations_become_duplicates() {
        let style = StyleName::new("Pilsner2");
        assert_eq!(
            classify_violation(Some("23505"), Write::InsertStyle(&style)),
            Some(RepositoryError::duplicate_style(&style))
        );

        let beer = beer();
        let err = classify_violation(Some("23505"), Write::InsertBeer(&beer)).unwrap();
        assert_eq!(err.to_string(), "Beer 'TREMBLING GIANT' already exists");
    }

    #[test]
    fn foreign_key_violations_depend_on_the_write() {
        let beer = beer();
        assert_eq!(
            classify_violation(Some("23503"), Write::InsertBeer(&beer)),
            Some(RepositoryError::UnknownStyle("India Pale Ale".to_string()))
        );

        let style = StyleName::new("Brettanomyces Saison");
        assert_eq!(
            classify_violation(Some("23503"), Write::DeleteStyle(&style)),
            Some(RepositoryError::StyleInUse("Brettanomyces Saison".to_string()))
        );
    }

    #[test]
    fn other_codes_are_left_to_the_generic_mapping() {
        let style = StyleName::new("Gose");
        assert_eq!(classify_violation(None, Write::InsertStyle(&style)), None);
        assert_eq!(classify_violation(Some("23503"), Write::InsertStyle(&style)), None);
        assert_eq!(classify_violation(Some("23505"), Write::DeleteStyle(&style)), None);
        assert_eq!(classify_violation(Some("40001"), Write::InsertBeer(&beer())), None);
    }

    #[test]
    fn non_database_errors_become_database_errors() {
        let style = StyleName::new("Gose");
        assert_eq!(
            map_write_error(Write::InsertStyle(&style), sqlx::Error::PoolClosed),
            RepositoryError::Database("connection pool closed in insert_style".to_string())
        );
        assert_eq!(
            map_sqlx_error("list_beers", sqlx::Error::RowNotFound),
            RepositoryError::Database("unexpected row not found in list_beers".to_string())
        );
    }
}
