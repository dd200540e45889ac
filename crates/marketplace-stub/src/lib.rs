//! In-memory stand-in for the marketplace item API.
//!
//! Answers the same five endpoints with the same status codes and body
//! shapes as the real service, so the contract suite can run offline.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod store;
pub mod validation;

pub use error::ErrorResponse;
pub use server::{AppState, create_app_state, serve, start_server};
