//! BLANQ CRM Core
//!
//! Layered like the rest of the app:
//! - domain: entities and business rules
//! - repository: in-memory data access
//! - query: per-page filters and sort keys
//! - board: the collaborative task board
//! - csv, validation, auth, search, stats, activity: page services
//! - config, seed: bundled settings and mock data

pub mod domain;
pub mod repository;
pub mod query;
pub mod board;
pub mod csv;
pub mod validation;
pub mod auth;
pub mod search;
pub mod stats;
pub mod activity;
pub mod routes;
pub mod config;
pub mod seed;

pub use config::AppConfig;
pub use seed::SeedData;
