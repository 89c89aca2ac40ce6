//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, per-resource routes)
//!     → routes::* (one handler per logical resource)
//!     → proxy::* (resolve, project, invoke, translate)
//!     → Send envelope to client
//! ```

pub mod server;

pub use server::{AppState, HttpServer};
