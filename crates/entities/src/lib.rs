//! Core entity definitions for NicheHunt.
//!
//! This crate defines the data types shared by the search engine, the
//! application store and the interactive shell: users and their plans, niche
//! ideas, search requests/results and search history entries.

mod history;
mod niche;
mod pricing;
mod user;

pub use history::*;
pub use niche::*;
pub use pricing::*;
pub use user::*;
