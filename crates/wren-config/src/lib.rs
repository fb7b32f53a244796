//! Typed configuration for Wren.
//!
//! - TOML and JSON configuration files
//! - `.env` files and environment variable overrides
//! - Strict validation (fails on unknown fields)
//! - Layered configuration (defaults → file → env)
//!
//! Each section converts into the runtime type of the crate it configures:
//!
//! | Section | Runtime type |
//! |---------|--------------|
//! | [`RouterSection`] | [`wren_router::RouterSettings`] |
//! | [`QuerySection`] | [`wren_extract::QueryOptions`] |
//! | [`LoggingSection`] | [`wren_telemetry::LogConfig`] |
//!
//! # Example
//!
//! ```no_run
//! use wren_config::ConfigLoader;
//! use wren_router::RouterTree;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigLoader::new()
//!     .with_optional_file("wren.toml")?
//!     .with_dotenv()?
//!     .with_env_prefix(wren_config::DEFAULT_ENV_PREFIX)
//!     .load()?;
//!
//! wren_telemetry::init_logging(&config.log_config())?;
//! let tree: RouterTree<&str> = RouterTree::with_settings(config.router_settings());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration File Format
//!
//! ```toml
//! [router]
//! strict_use = true
//!
//! [query]
//! max_keys = 1000
//!
//! [logging]
//! enabled = true
//! level = "info"
//! format = "json"
//! include_location = false
//! ```

mod config;
mod error;
mod loader;
mod schema;

pub use config::{WrenConfig, WrenConfigBuilder};
pub use error::ConfigError;
pub use loader::{ConfigLoader, DEFAULT_ENV_PREFIX};
pub use schema::{LoggingSection, QuerySection, RouterSection};
