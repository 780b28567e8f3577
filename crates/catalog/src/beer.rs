use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cerebral_core::{BeerName, DomainError, DomainResult, Entity, StyleName};

/// A beer record, referencing its style by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beer {
    pub id: i64,
    pub name: BeerName,
    pub description: String,
    /// Alcohol by volume as entered, e.g. `"6.7%"`. Not validated.
    pub abv: String,
    pub is_available: bool,
    pub style: StyleName,
    pub created_at: DateTime<Utc>,
}

impl Entity for Beer {
    type Key = BeerName;

    fn key(&self) -> &Self::Key {
        &self.name
    }
}

/// Validated input for inserting a beer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBeer {
    pub name: BeerName,
    pub description: String,
    pub abv: String,
    pub is_available: bool,
    pub style: StyleName,
}

impl NewBeer {
    /// Expected JSON shape, used in validation messages.
    pub const FORMAT: &'static str = "{ name: <String>, description: <String>, abv: <String>, is_available: <Boolean>, style: <String> }";

    pub fn new(
        name: impl AsRef<str>,
        description: impl Into<String>,
        abv: impl Into<String>,
        is_available: bool,
        style: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = BeerName::new(name);
        if name.is_blank() {
            return Err(DomainError::validation("name must not be empty"));
        }
        let style = StyleName::new(style);
        if style.is_blank() {
            return Err(DomainError::validation("style must not be empty"));
        }
        Ok(Self {
            name,
            description: description.into(),
            abv: abv.into(),
            is_available,
            style,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_beer_normalizes_name_only() {
        let beer = NewBeer::new(
            "freddies secret beer",
            "omg so amazing wow",
            "110%",
            true,
            "Brettanomyces Saison",
        )
        .unwrap();
        assert_eq!(beer.name.as_str(), "FREDDIES SECRET BEER");
        assert_eq!(beer.style.as_str(), "Brettanomyces Saison");
        assert_eq!(beer.abv, "110%");
    }

    #[test]
    fn new_beer_requires_style() {
        let err = NewBeer::new("x", "d", "5%", false, "").unwrap_err();
        assert_eq!(err, DomainError::validation("style must not be empty"));
    }

    #[test]
    fn beer_is_keyed_by_its_normalized_name() {
        let beer = Beer {
            id: 7,
            name: BeerName::new("trembling giant"),
            description: String::new(),
            abv: "7.5%".to_string(),
            is_available: false,
            style: StyleName::new("India Pale Ale"),
            created_at: Utc::now(),
        };
        assert_eq!(beer.key().as_str(), "TREMBLING GIANT");
        assert!(beer.is(&BeerName::new("Trembling Giant")));
    }
}
