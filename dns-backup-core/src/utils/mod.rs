//! Utility helpers

pub mod json;
