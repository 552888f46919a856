//! Simulated niche idea search for NicheHunt.
//!
//! This crate provides:
//! - The static idea catalog, parameterised by profession
//! - The search engine that filters the catalog behind a simulated delay
//! - Injectable latency and request-id generation

mod catalog;
mod engine;
mod error;
mod id;
mod latency;

pub use catalog::*;
pub use engine::*;
pub use error::*;
pub use id::*;
pub use latency::*;

/// Default simulated search latency in milliseconds.
pub const DEFAULT_SEARCH_LATENCY_MS: u64 = 800;
