//! Identity for catalog records.
//!
//! Styles and beers carry a numeric `id` for ordering only. They are looked up,
//! referenced and deleted by name, so the name is what identifies them.

/// A record addressed by a natural key.
pub trait Entity {
    /// The name the record is addressed by (`StyleName`, `BeerName`).
    type Key: Clone + Eq + core::fmt::Display;

    fn key(&self) -> &Self::Key;

    /// Whether this record is the one `key` addresses.
    fn is(&self, key: &Self::Key) -> bool {
        self.key() == key
    }
}
