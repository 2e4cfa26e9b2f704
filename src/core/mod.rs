//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the server,
//! including error handling, configuration, server lifecycle management,
//! and the HTTP transport.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::{Config, LogFormat};
pub use error::{Error, Result};
pub use server::WebToolsServer;
pub use transport::{HttpConfig, HttpTransport};
