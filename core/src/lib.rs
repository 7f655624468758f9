//! # pkgview core
//!
//! The package view, arranged as ports and adapters:
//!
//! * **[`ports`]**: the [`ports::PackageRepository`] trait the controller talks to.
//! * **[`adapters`]**: concrete repositories (HTTP, local archive mirror).
//! * **[`endpoint`]**: the one place that knows the catalog's URL layout.
//! * **[`router`]**: ordered route table with a fallback redirect.
//! * **[`controller`]**: turns route params into a [`PackageView`](pkgview_common::models::view::PackageView).
//! * **[`navigator`]**: ties router and controller together and drops stale activations.
//! * **[`probe`]**: checks which archive tarballs are actually downloadable.

pub mod adapters;
pub mod controller;
pub mod endpoint;
pub mod navigator;
pub mod ports;
pub mod probe;
pub mod router;
