//! CLI argument parsing with clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::fetcher::{DEFAULT_FEED_URL, DEFAULT_TIMEOUT_SECS};

#[derive(Parser, Debug)]
#[command(name = "unbound-blacklister")]
#[command(
    author,
    version,
    about = "Turns a hosts-format blocklist into Unbound local-data directives"
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Defaults to generating the directive list
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Whitelist file [default: whitelist.conf next to the binary]
    #[arg(short, long, global = true)]
    pub whitelist: Option<PathBuf>,

    /// Quiet mode (errors only on stderr)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug output on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Options of the default run.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Hosts-format feed to download
    #[arg(long, default_value = DEFAULT_FEED_URL)]
    pub url: String,

    /// Write to this file (atomically) instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Give up on the download after this many seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Tell whether a single domain would be blocked, and why not
    Check {
        /// Domain to check
        domain: String,
    },

    /// Show version
    Version,
}
