//! Sinkhole DNS Infrastructure Layer
//!
//! Concrete adapters behind the application ports: the SQLite verdict
//! store, the built-in threat assessors and the UDP resolver loop.

pub mod assessor;
pub mod database;
pub mod dns;
pub mod repositories;
