//! Shared building blocks for `pkgview`.
//!
//! Everything in here is free of IO: the catalog models, the route state
//! handed from the router to the controller, the checkmark filter used while
//! rendering, configuration, and the error type every repository adapter returns.

pub mod config;
pub mod error;
pub mod filter;
pub mod macros;
pub mod models;

#[doc(hidden)]
pub use tracing;
