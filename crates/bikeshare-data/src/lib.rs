//! Data pipeline for the bikeshare explorer.
//!
//! Loads a city's trip-record CSV, narrows it with a month/day filter and
//! computes the descriptive statistics shown to the user.

pub mod filter;
pub mod frequency;
pub mod loader;
pub mod stats;
