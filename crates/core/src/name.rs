//! Catalog names.
//!
//! Beers and styles are addressed by name rather than by a surrogate id. Beer
//! names are case-insensitive and always travel in their uppercase form; style
//! names are kept exactly as entered, including in URL paths (`+` is literal).

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Decode a name taken from a URL path segment.
///
/// Clients address records as `/beer/Trembling+Giant`, so `+` stands for a space.
/// Percent-decoding has already been done by the router at this point.
pub fn decode_path_segment(raw: &str) -> String {
    raw.replace('+', " ")
}

/// Normalized beer name (uppercase).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct BeerName(String);

impl BeerName {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(Self::normalize(raw.as_ref()))
    }

    /// The single normalization rule for beer names: storage, lookup and
    /// response messages all go through here.
    pub fn normalize(raw: &str) -> String {
        raw.to_uppercase()
    }

    /// Build a beer name from a URL path segment.
    pub fn from_path(raw: &str) -> Self {
        Self::new(decode_path_segment(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<String> for BeerName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<BeerName> for String {
    fn from(value: BeerName) -> Self {
        value.0
    }
}

impl core::fmt::Display for BeerName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl ValueObject for BeerName {}

/// Style name, stored verbatim (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleName(String);

impl StyleName {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for StyleName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl core::fmt::Display for StyleName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl ValueObject for StyleName {}
