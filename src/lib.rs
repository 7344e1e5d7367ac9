//! # product-api
//!
//! Product lookup API over Postgres.
//!
//! Settings are layered (base file, environment file, environment variables)
//! and the database connection is resolved by one explicit strategy: runtime
//! for the server, or a design-time strategy for schema maintenance.

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod model;
pub mod repository;
pub mod telemetry;
