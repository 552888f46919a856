//! Session-wide application state for NicheHunt.
//!
//! This crate provides the application store holding the signed-in user,
//! the search history and the saved ideas, together with the search session
//! that runs searches on behalf of the dashboard and records their history.
//!
//! State transitions are pure ([`AppState::apply`]); the store wraps them
//! with user persistence and change notification.

mod error;
mod session;
mod state;
mod store;

pub use error::*;
pub use session::*;
pub use state::*;
pub use store::*;
