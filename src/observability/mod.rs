//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and the upstream client produce:
//!     → logging.rs (structured log events, request spans)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (pretty, compact or JSON)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every log line via the request span
//! - Metrics are cheap when no exporter is installed

pub mod logging;
pub mod metrics;
