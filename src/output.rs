//! Rendering of the Unbound include file.
//!
//! Everything the run reports goes to one stream: `#` comment lines for the
//! header and progress notes, then one `local-data` directive per domain.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::io::{self, Write};

/// Address every blocked name resolves to.
pub const NULL_ROUTE_ADDR: &str = "127.0.0.1";

/// Header timestamp layout (day/month/year, 24h clock).
const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Render the Unbound directive that null-routes `domain`.
///
/// # Examples
/// ```
/// use unbound_blacklister::output::render_directive;
/// assert_eq!(
///     render_directive("ads.example.com"),
///     "local-data: \"ads.example.com. A 127.0.0.1\""
/// );
/// ```
pub fn render_directive(domain: &str) -> String {
    format!("local-data: \"{}. A {}\"", domain, NULL_ROUTE_ADDR)
}

/// Line-oriented writer for the generated file.
pub struct Report<W: Write> {
    out: W,
    directives: usize,
}

impl<W: Write> Report<W> {
    pub fn new(out: W) -> Self {
        Self { out, directives: 0 }
    }

    /// Write the timestamp line that opens every file.
    pub fn header<Tz>(&mut self, now: &DateTime<Tz>) -> io::Result<()>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        self.comment(now.format(TIMESTAMP_FORMAT))
    }

    /// Write a `#`-prefixed comment line.
    pub fn comment(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.out, "# {}", msg)
    }

    pub fn directive(&mut self, domain: &str) -> io::Result<()> {
        self.directives += 1;
        writeln!(self.out, "{}", render_directive(domain))
    }

    /// Write one directive per domain, in the given order.
    pub fn directives<'a, I>(&mut self, domains: I) -> io::Result<()>
    where
        I: IntoIterator<Item = &'a String>,
    {
        for domain in domains {
            self.directive(domain)?;
        }
        Ok(())
    }

    /// Number of directives written so far.
    pub fn directive_count(&self) -> usize {
        self.directives
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
