//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Init metrics → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C or test trigger → broadcast → stop accepting → drain → exit
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
