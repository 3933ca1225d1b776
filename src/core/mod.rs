//! Core orchestration machinery shared by all engines

pub mod chunk;
pub mod client;
pub mod config;
pub mod errors;
pub mod language;
pub mod models;
pub mod session;
pub mod transport;
