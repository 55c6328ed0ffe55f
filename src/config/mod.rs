//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! TOML file
//!     → loader.rs (read, parse)
//!     → validation.rs (semantic checks, all errors collected)
//!     → schema.rs types, frozen for the process lifetime
//! ```
//!
//! # Design Decisions
//! - Every section has defaults; an absent file means a default config
//! - Validation runs before the config is accepted into the system
//! - The action set itself is registered in code, not configured; config
//!   covers only the serving environment around it

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::ServerConfig;
