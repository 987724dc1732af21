//! Local HTTP API.
//!
//! A composable axum router serving the chat contract plus the dashboard,
//! log, and preference surfaces the shell consumes. CORS is open: the
//! frontend dev server runs on a different origin.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::{start_api_server, ApiServer};
