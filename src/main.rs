//! unbound-blacklister - hosts-format blocklist to Unbound directives
//!
//! Prints an Unbound include file that null-routes every domain of the feed.

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

use unbound_blacklister::cli::{Cli, Commands};
use unbound_blacklister::error::BlacklisterError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries the generated file
    let log_level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install logger: {}", e);
    }

    let whitelist = cli.whitelist.as_deref();
    let result = match cli.command {
        None => unbound_blacklister::commands::generate::run(&cli.generate, whitelist).await,
        Some(Commands::Check { ref domain }) => {
            unbound_blacklister::commands::check::run(domain, whitelist).await
        }
        Some(Commands::Version) => {
            println!("unbound-blacklister {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<BlacklisterError>() {
            Some(fatal) => {
                println!("# {}", fatal);
                ExitCode::from(fatal.exit_code())
            }
            None => {
                println!("# {:#}", e);
                error!("{:#}", e);
                ExitCode::FAILURE
            }
        },
    }
}
