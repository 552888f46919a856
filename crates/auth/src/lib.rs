//! Demo authentication and user persistence for NicheHunt.
//!
//! This crate provides:
//! - A local key-value storage abstraction with memory and file backends
//! - Persistence of the signed-in user under a single fixed key
//! - The demo sign-in flow, which accepts any well-formed credentials

mod demo;
mod error;
mod persistence;
mod storage;

pub use demo::*;
pub use error::*;
pub use persistence::*;
pub use storage::*;

/// Key the signed-in user is stored under.
pub const STORAGE_KEY: &str = "nichehunt-demo-auth";

/// Default simulated sign-in latency in milliseconds.
pub const DEFAULT_AUTH_LATENCY_MS: u64 = 600;
