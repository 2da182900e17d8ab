//! Shared wire types for the Gemini model listing.

pub mod errors;
pub mod models;
