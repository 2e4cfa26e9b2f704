//! Transport layer for the web tools server.
//!
//! The server is exposed over HTTP only:
//! - `http.rs` - router, handlers and the listener loop
//! - `middleware.rs` - request IDs, request tracing and CORS
//! - `config.rs` - bind address and CORS settings
//!
//! Handlers translate between HTTP and the domain services; the tool
//! dispatcher itself never sees a request or a status code.

mod config;
mod error;
pub mod http;
pub mod middleware;

pub use config::{CorsConfig, HttpConfig};
pub use error::{TransportError, TransportResult};
pub use http::{ApiError, HttpTransport, build_router};
