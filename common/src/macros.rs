//! Status macros.
//!
//! Thin wrappers over `tracing` that tag each event with a `pkgview::status::*`
//! target. The CLI formatter picks the line prefix from that target, so library
//! code can report progress without knowing how it is displayed.

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "pkgview::status::info", $($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "pkgview::status::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!(target: "pkgview::status::warn", $($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::tracing::error!(target: "pkgview::status::error", $($arg)*)
    };
}
