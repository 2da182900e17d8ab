//! Client for listing the Gemini models an API key can access.

pub mod client;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;

#[cfg(test)]
mod test_support;

pub use genai_lister_types as types;

pub use client::{Client, ClientBuilder, ClientConfig, HttpOptions};
pub use error::{Error, Result};
pub use types::models::{ModelDescriptor, ModelList};
