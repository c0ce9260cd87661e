//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, span, query extraction)
//!     → handlers/ (validate input, call upstream, normalize)
//!     → response.rs / error.rs (envelope)
//!     → Send to client
//! ```

pub mod error;
pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use error::ApiError;
pub use request::{ApiPath, ApiQuery, UuidRequestId, X_REQUEST_ID};
pub use response::{error_response, ApiResponse};
pub use server::{build_router, ApiServer, AppState};
