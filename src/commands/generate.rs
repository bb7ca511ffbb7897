//! Default command: fetch, filter and emit the directive list.

use anyhow::{Context, Result};
use chrono::Local;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Duration;
use tempfile::NamedTempFile;
use tracing::{info, warn};

use super::resolve_whitelist_path;
use crate::classifier::split_lines;
use crate::cli::GenerateArgs;
use crate::fetcher::{FeedSource, Fetcher};
use crate::fs_abstraction::{real_fs, FileSystem};
use crate::output::Report;
use crate::pipeline::build_blacklist_with_stats;
use crate::whitelist::Whitelist;

/// What one run produced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    /// `None` when no whitelist file was found.
    pub whitelisted: Option<usize>,
    pub blacklisted: usize,
    /// Set when the feed could not be retrieved.
    pub feed_error: Option<String>,
}

/// Run the generate command
pub async fn run(args: &GenerateArgs, whitelist: Option<&Path>) -> Result<()> {
    let fetcher = Fetcher::new(Duration::from_secs(args.timeout));

    let summary = match &args.output {
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            generate(&mut out, real_fs(), &fetcher, whitelist, &args.url).await?
        }
        Some(path) => write_atomically(path, &fetcher, whitelist, &args.url).await?,
    };

    info!(
        "Wrote {} directives{}",
        summary.blacklisted,
        args.output
            .as_ref()
            .map(|p| format!(" to {:?}", p))
            .unwrap_or_default()
    );
    Ok(())
}

/// Generate into a temp file beside `path`, then rename it into place.
///
/// A fatal error leaves any existing file at `path` untouched.
async fn write_atomically(
    path: &Path,
    source: &dyn FeedSource,
    whitelist: Option<&Path>,
    url: &str,
) -> Result<GenerateSummary> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let temp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {:?}", dir))?;
    let mut out = BufWriter::new(temp);

    let summary = generate(&mut out, real_fs(), source, whitelist, url).await?;

    let temp = out
        .into_inner()
        .map_err(|e| e.into_error())
        .with_context(|| format!("Failed to flush output for {:?}", path))?;
    temp.persist(path)
        .with_context(|| format!("Failed to write {:?}", path))?;

    Ok(summary)
}

/// Produce the full include file on `out`.
///
/// Feed retrieval failures are reported as a comment and yield an empty
/// list. Only an unresolvable install directory, an unreadable whitelist or
/// a failing writer end the run with an error.
pub async fn generate<W: Write>(
    out: &mut W,
    fs: &dyn FileSystem,
    source: &dyn FeedSource,
    whitelist_path: Option<&Path>,
    url: &str,
) -> Result<GenerateSummary> {
    let mut report = Report::new(out);
    let mut summary = GenerateSummary::default();

    report.header(&Local::now())?;

    let whitelist_path = resolve_whitelist_path(whitelist_path)?;
    let whitelist = match Whitelist::load(fs, &whitelist_path)? {
        Some(whitelist) => {
            report.comment(format!(
                "Found a total of {} whitelisted unique domains",
                whitelist.len()
            ))?;
            summary.whitelisted = Some(whitelist.len());
            whitelist
        }
        None => {
            report.comment("Optional whitelist file not found")?;
            Whitelist::default()
        }
    };

    report.comment(format!("Processing URL: {}", url))?;
    let blacklist = match source.fetch_feed(url).await {
        Ok(feed) => {
            let (blacklist, stats) = build_blacklist_with_stats(split_lines(&feed), &whitelist);
            info!(
                "{} feed lines, {} whitelisted hits, {} duplicates",
                stats.lines, stats.whitelisted, stats.duplicates
            );
            report.comment(format!(
                "Found a total of {} blacklisted unique domains",
                blacklist.len()
            ))?;
            blacklist
        }
        Err(e) => {
            warn!("Failed to fetch {}: {}", url, e);
            if e.is_invalid_url() {
                report.comment(format!("Malformed URL - {}", e))?;
            } else {
                report.comment(format!("I/O error while fetching blacklist URL - {}", e))?;
            }
            summary.feed_error = Some(e.to_string());
            Vec::new()
        }
    };

    report.directives(&blacklist)?;
    summary.blacklisted = report.directive_count();
    report.finish()?;

    Ok(summary)
}
