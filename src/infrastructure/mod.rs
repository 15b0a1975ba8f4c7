//! Infrastructure layer: storage integrations.

pub mod persistence;
