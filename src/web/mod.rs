//! HTTP API for clubauth.
//!
//! Exposes signup and login for club members and club admins, a health
//! check and the OpenAPI document, all under `/api`.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use handlers::AppState;
pub use router::create_router;
pub use server::WebServer;
