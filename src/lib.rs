//! PDDIKTI REST API library.
//!
//! A thin HTTP façade over Indonesia's national higher-education database.
//! Requests are validated, forwarded to the upstream PDDIKTI API, and the
//! answers reshaped into a uniform `{success, message, data}` envelope.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod normalize;
pub mod observability;
pub mod upstream;

pub use config::ApiConfig;
pub use http::ApiServer;
pub use lifecycle::Shutdown;
pub use upstream::PddiktiClient;
