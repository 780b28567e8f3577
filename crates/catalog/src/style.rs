use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cerebral_core::{DomainError, DomainResult, Entity, StyleName};

/// A named beer category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    /// Store-assigned, increases with insertion order.
    pub id: i64,
    pub style_name: StyleName,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Entity for Style {
    type Key = StyleName;

    fn key(&self) -> &Self::Key {
        &self.style_name
    }
}

/// Validated input for inserting a style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStyle {
    pub style_name: StyleName,
    pub description: String,
}

impl NewStyle {
    /// Expected JSON shape, used in validation messages.
    pub const FORMAT: &'static str = "{ style_name: <String>, description: <String> }";

    pub fn new(style_name: impl Into<String>, description: impl Into<String>) -> DomainResult<Self> {
        let style_name = StyleName::new(style_name);
        if style_name.is_blank() {
            return Err(DomainError::validation("style_name must not be empty"));
        }
        Ok(Self {
            style_name,
            description: description.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_style_keeps_name_verbatim() {
        let style = NewStyle::new("freddies secret style", "omg so amazing wow").unwrap();
        assert_eq!(style.style_name.as_str(), "freddies secret style");
        assert_eq!(style.description, "omg so amazing wow");
    }

    #[test]
    fn new_style_rejects_blank_name() {
        let err = NewStyle::new("  ", "desc").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn style_serializes_with_flat_name() {
        let style = Style {
            id: 1,
            style_name: StyleName::new("Pilsner2"),
            description: "crisp".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(json["style_name"], "Pilsner2");
        assert_eq!(json["description"], "crisp");
    }
}
