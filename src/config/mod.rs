//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize, env overrides)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → shared via Arc to all handlers
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no hot reload
//! - All fields have defaults to allow minimal configs
//! - The backend base URL and environment flag are resolved exactly once at
//!   startup; handlers never read process environment themselves

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::BackendSettings;
pub use schema::Environment;
pub use schema::GatewayConfig;
pub use schema::ListenerConfig;
