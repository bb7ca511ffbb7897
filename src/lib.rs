//! # unbound-blacklister - hosts blocklists for Unbound
//!
//! Downloads a hosts-format domain blocklist (StevenBlack/hosts by default),
//! drops everything that is not a blockable domain, removes whitelisted
//! names and prints one Unbound `local-data` directive per remaining domain.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   unbound-blacklister                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  CLI (clap)                                                 │
//! │    └── generate (default), check, version                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Whitelist (whitelist.conf next to the binary)              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Fetcher (reqwest + rustls)                                 │
//! │    └── single GET, UTF-8 or ISO-8859-1 body                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Pipeline                                                   │
//! │    ├── Classifier: comments, reserved entries, 2nd field    │
//! │    ├── Validator: length, IPv4 literal, punycode, shape     │
//! │    └── Set + sort                                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Output: `# ` comments + `local-data:` directives           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```
//! use unbound_blacklister::classifier::split_lines;
//! use unbound_blacklister::output::render_directive;
//! use unbound_blacklister::pipeline::build_blacklist;
//! use unbound_blacklister::whitelist::Whitelist;
//!
//! let feed = "\
//! 127.0.0.1 localhost
//! 0.0.0.0 ads.example.com
//! 0.0.0.0 ads.example.com
//! 0.0.0.0 good.example.com
//! ";
//! let whitelist = Whitelist::parse("good.example.com");
//! let lines: Vec<String> = build_blacklist(split_lines(feed), &whitelist)
//!     .iter()
//!     .map(|d| render_directive(d))
//!     .collect();
//! assert_eq!(lines, vec!["local-data: \"ads.example.com. A 127.0.0.1\""]);
//! ```
//!
//! ## Modules
//!
//! - [`classifier`] - Hosts-file line classification
//! - [`cli`] - Command-line interface definitions
//! - [`commands`] - CLI command implementations
//! - [`error`] - Fatal error kinds and exit codes
//! - [`fetcher`] - HTTP client for downloading the feed
//! - [`fs_abstraction`] - Mockable filesystem access
//! - [`locate`] - Install directory lookup
//! - [`output`] - Comment and directive rendering
//! - [`pipeline`] - Filter, de-duplicate and sort
//! - [`validation`] - Domain validation rules
//! - [`whitelist`] - Local whitelist loading

pub mod classifier;
pub mod cli;
pub mod commands;
pub mod error;
pub mod fetcher;
pub mod fs_abstraction;
pub mod locate;
pub mod output;
pub mod pipeline;
pub mod validation;
pub mod whitelist;

pub use cli::{Cli, Commands};
pub use error::BlacklisterError;
pub use pipeline::build_blacklist;
pub use whitelist::Whitelist;
