//! Web server module (Axum + API).

pub mod api;
pub mod response;
pub mod router;
pub mod server;

pub use router::{create_app_router, AppState};
pub use server::{run_server, serve};
