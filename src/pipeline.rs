//! Filter, de-duplicate and sort the feed into the final blacklist.

use std::collections::HashSet;
use tracing::debug;

use crate::classifier::{classify, LineClass, SkipReason};
use crate::validation::is_valid_domain;
use crate::whitelist::Whitelist;

/// Counters collected during one pipeline run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PipelineStats {
    pub lines: usize,
    pub empty: usize,
    pub comments: usize,
    pub reserved: usize,
    pub malformed: usize,
    pub invalid: usize,
    pub whitelisted: usize,
    pub duplicates: usize,
}

impl PipelineStats {
    fn record_skip(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::Empty => self.empty += 1,
            SkipReason::Comment => self.comments += 1,
            SkipReason::Reserved => self.reserved += 1,
            SkipReason::Malformed => self.malformed += 1,
        }
    }
}

/// Build the sorted, duplicate-free blacklist from feed lines.
///
/// # Examples
/// ```
/// use unbound_blacklister::pipeline::build_blacklist;
/// use unbound_blacklister::whitelist::Whitelist;
///
/// let feed = ["0.0.0.0 b.example.com", "0.0.0.0 a.example.com", "0.0.0.0 b.example.com"];
/// let result = build_blacklist(feed, &Whitelist::default());
/// assert_eq!(result, vec!["a.example.com", "b.example.com"]);
/// ```
pub fn build_blacklist<'a, I>(feed_lines: I, whitelist: &Whitelist) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    build_blacklist_with_stats(feed_lines, whitelist).0
}

/// Same as [`build_blacklist`], also returning what was dropped and why.
pub fn build_blacklist_with_stats<'a, I>(
    feed_lines: I,
    whitelist: &Whitelist,
) -> (Vec<String>, PipelineStats)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut stats = PipelineStats::default();
    let mut blacklist: HashSet<String> = HashSet::new();

    for line in feed_lines {
        stats.lines += 1;
        let token = match classify(line) {
            LineClass::Candidate(token) => token,
            LineClass::Skip(reason) => {
                if reason == SkipReason::Malformed {
                    debug!("Skipping malformed line {}: {:?}", stats.lines, line);
                }
                stats.record_skip(reason);
                continue;
            }
        };

        if !is_valid_domain(&token) {
            stats.invalid += 1;
            continue;
        }
        if whitelist.contains(&token) {
            stats.whitelisted += 1;
            continue;
        }
        if !blacklist.insert(token) {
            stats.duplicates += 1;
        }
    }

    let mut ordered: Vec<String> = blacklist.into_iter().collect();
    ordered.sort_unstable();

    debug!(
        "Pipeline: {} lines, {} kept, {} invalid, {} whitelisted, {} duplicates, {} malformed",
        stats.lines,
        ordered.len(),
        stats.invalid,
        stats.whitelisted,
        stats.duplicates,
        stats.malformed
    );

    (ordered, stats)
}
