//! # Adapters
//!
//! Concrete [`PackageRepository`](crate::ports::PackageRepository) implementations.
//!
//! * **[`http`]**: the catalog server, over reqwest.
//! * **[`archive_dir`]**: a local mirror laid out like the server.

pub mod archive_dir;
pub mod http;
