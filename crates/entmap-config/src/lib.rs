//! # entmap Config
//!
//! Configuration management for the entmap framework.
//!
//! The host sets the registrar's configuration surface here before
//! initialization: a delimited `base_package` string naming search
//! locations, and an explicit `entities` list.

pub mod error;
pub mod loader;
pub mod schema;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::{Config, RegistrarConfig};
