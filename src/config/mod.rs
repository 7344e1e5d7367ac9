//! Environment resolution, layered settings, and connection resolution.
//!
//! The process environment is captured once at startup; everything below
//! works from that snapshot so resolution is deterministic.

pub mod connection;
pub mod environment;
pub mod settings;

pub use connection::{
    ConnectionDescriptor, ConnectionResolver, MIGRATIONS_OWNER, PRODUCTS_DB, ResolutionStrategy,
    StrategyKind,
};
pub use environment::{EnvironmentName, ProcessEnv};
pub use settings::{ConfigurationRoot, ConfigurationService, ServerSettings, TelemetrySettings};
