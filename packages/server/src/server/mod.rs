// HTTP server setup (Axum + HTML form)
pub mod app;
pub mod routes;
pub mod templates;

pub use app::*;
