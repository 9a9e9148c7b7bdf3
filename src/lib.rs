//! Catalog Synth Library
//!
//! A synthetic music catalog generator: builds a referentially consistent
//! in-memory dataset of categories, artists, albums, tracks, users and
//! playlists with randomized values but a fixed, always-resolvable
//! relationship shape.

pub mod catalog;
pub mod dataset;
pub mod generator;
pub mod user;
pub mod validation;

// Re-export commonly used types for convenience
pub use dataset::Dataset;
pub use generator::{generate, GeneratorConfig};
pub use validation::{validate, ValidationError};
