//! Sinkhole DNS HTTP surface
//!
//! A thin read-only facade over the classification service, meant for
//! manual testing of filtering decisions without a DNS client.

pub mod dto;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_api_routes;
pub use state::AppState;
