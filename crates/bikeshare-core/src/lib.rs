//! Shared building blocks for the bikeshare explorer.
//!
//! Holds the dataset registry (cities, months, weekdays), the trip data
//! model, the error taxonomy, CLI settings and display formatting helpers.

pub mod error;
pub mod formatting;
pub mod models;
pub mod registry;
pub mod settings;
pub mod time_utils;

pub use error::{BikeshareError, Result};
