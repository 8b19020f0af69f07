//! Core domain types for Atelier.
//!
//! Defines the [`Creation`] record consumed by the catalog pipeline, the
//! seed catalog loader, and the env-driven application configuration.

pub mod app_config;
pub mod catalog;
pub mod config;
pub mod creation;
pub mod error;

pub use app_config::AppConfig;
pub use catalog::{load_catalog, CatalogFile};
pub use config::{load_app_config, load_app_config_from_env};
pub use creation::{Creation, CreationMetadata, CreationStatus, CreationType};
pub use error::{CatalogError, ConfigError};
