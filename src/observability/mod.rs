//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All handlers produce:
//!     → tracing events (structured fields: request_id, resource, status)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - The request ID flows through every log line for one request
//! - Metrics are cheap (atomic increments)

pub mod metrics;
