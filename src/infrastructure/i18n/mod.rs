//! Localization
//!
//! Built-in message catalog implementing the Localizer port.

mod catalog;

pub use catalog::Catalog;
