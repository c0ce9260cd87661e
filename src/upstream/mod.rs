//! Upstream PDDIKTI access.
//!
//! # Data Flow
//! ```text
//! handler
//!     → client.rs (URL building, headers, timeouts)
//!     → PDDIKTI API
//!     → client.rs (status mapping, lenient body decoding)
//!     → Option<serde_json::Value> back to the handler
//! ```
//!
//! # Design Decisions
//! - 404 means "absent", not an error; handlers decide what absent means
//! - No retries: one upstream call per logical lookup
//! - Every call is timed and counted in metrics

pub mod client;
pub mod endpoints;
pub mod error;

pub use client::PddiktiClient;
pub use endpoints::{
    InvalidCategory, NationalCount, PortfolioKind, SearchScope, UniversityFigure,
    VisualizationCategory, VisualizationSeries,
};
pub use error::{UpstreamError, UpstreamResult};
