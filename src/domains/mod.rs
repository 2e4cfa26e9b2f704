//! Domains module containing business logic organized by bounded contexts.
//!
//! - **tools**: the text transforms and the processing dispatcher
//! - **catalog**: persisted tool descriptors
//! - **settings**: placeholder user settings

pub mod catalog;
pub mod settings;
pub mod tools;
