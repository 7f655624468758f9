pub mod browse;
pub mod check;
pub mod history;
pub mod routes;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use pkgview_common::config::{Config, DEFAULT_ARCHIVE_URL, DEFAULT_BASE_URL, DEFAULT_PACKAGE};

#[derive(Parser)]
#[command(name = "pkgview")]
#[command(about = "Browse a package archive catalog from the terminal.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Server the `pkg/api/...` catalog is fetched from
    #[arg(long, env = "PKGVIEW_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Read the catalog from a local mirror instead of the server
    #[arg(long, env = "PKGVIEW_ARCHIVE_DIR", global = true)]
    pub archive_dir: Option<PathBuf>,

    /// Where versioned tarballs are published
    #[arg(long, env = "PKGVIEW_ARCHIVE_URL", default_value = DEFAULT_ARCHIVE_URL, global = true)]
    pub archive_url: String,

    /// Package shown when a path matches no route
    #[arg(long, default_value = DEFAULT_PACKAGE, global = true)]
    pub default_package: String,

    /// Less decoration; repeat for bare output
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// More log output; repeat for more detail
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open a catalog path such as /pkg/Biobase/2.26.0/
    #[command(alias = "b")]
    Browse {
        #[arg(default_value = "/pkg/")]
        path: String,
    },
    /// Show one package, optionally at a version
    #[command(alias = "s")]
    Show { id: String, version: Option<String> },
    /// Print the route table
    #[command(alias = "r")]
    Routes,
    /// Show the version changes recorded for a package in a local archive
    #[command(alias = "h")]
    History { id: String },
    /// Check which versions of a package have a tarball in the archive
    #[command(alias = "c")]
    Check {
        id: String,
        #[arg(required = true)]
        versions: Vec<String>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            base_url: self.base_url.clone(),
            archive_dir: self.archive_dir.clone(),
            archive_url: self.archive_url.clone(),
            default_package: self.default_package.clone(),
            quiet: self.quiet,
        }
    }
}
