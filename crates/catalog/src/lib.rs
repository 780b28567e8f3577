//! Beer catalog domain module.
//!
//! This crate contains the catalog records (styles and beers) and the small
//! amount of input validation that belongs to them. No IO, no HTTP, no storage.

pub mod availability;
pub mod beer;
pub mod style;

pub use availability::Availability;
pub use beer::{Beer, NewBeer};
pub use style::{NewStyle, Style};

use cerebral_core::DomainError;

/// Build the validation error returned when a create payload lacks a property.
///
/// `format` lists the expected payload shape, e.g. `{ style_name: <String>, description: <String> }`.
pub fn missing_property(format: &str, property: &str) -> DomainError {
    DomainError::validation(format!(
        "Expected format: {format}. You're missing a \"{property}\" property."
    ))
}
