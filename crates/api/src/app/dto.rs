use serde::Deserialize;

use cerebral_catalog::{NewBeer, NewStyle, missing_property};
use cerebral_core::DomainResult;

// -------------------------
// Request DTOs
// -------------------------

/// `POST /styles` body. Fields are optional so a missing one can be reported by name.
#[derive(Debug, Deserialize)]
pub struct CreateStyleRequest {
    pub style_name: Option<String>,
    pub description: Option<String>,
}

impl CreateStyleRequest {
    pub fn into_new_style(self) -> DomainResult<NewStyle> {
        let missing = |property| missing_property(NewStyle::FORMAT, property);
        let style_name = self.style_name.ok_or_else(|| missing("style_name"))?;
        let description = self.description.ok_or_else(|| missing("description"))?;
        NewStyle::new(style_name, description)
    }
}

/// `POST /beer` body.
#[derive(Debug, Deserialize)]
pub struct CreateBeerRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub abv: Option<String>,
    pub is_available: Option<bool>,
    pub style: Option<String>,
}

impl CreateBeerRequest {
    pub fn into_new_beer(self) -> DomainResult<NewBeer> {
        let missing = |property| missing_property(NewBeer::FORMAT, property);
        let name = self.name.ok_or_else(|| missing("name"))?;
        let description = self.description.ok_or_else(|| missing("description"))?;
        let abv = self.abv.ok_or_else(|| missing("abv"))?;
        let is_available = self.is_available.ok_or_else(|| missing("is_available"))?;
        let style = self.style.ok_or_else(|| missing("style"))?;
        NewBeer::new(name, description, abv, is_available, style)
    }
}

/// `GET /find_by_style` query string. Unknown parameters are ignored.
#[derive(Debug, Deserialize)]
pub struct FindByStyleQuery {
    pub style_name: Option<String>,
}
