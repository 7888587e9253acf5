//! Relative "time ago" labels for published timestamps.
//!
//! Time is read through [`Clock`] so formatting is deterministic under test.
//! Timestamps in the future are reported as "just now" rather than as
//! negative durations.

#[cfg(test)]
#[path = "relative_time_test.rs"]
mod relative_time_test;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Offset, Utc};

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Source of the current instant and the viewer's zone.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Offset applied to timestamps that carry none.
    fn local_offset(&self) -> FixedOffset {
        Utc.fix()
    }
}

/// Wall clock. In the browser chrono reads `Date.now()` and the page's
/// timezone offset.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn local_offset(&self) -> FixedOffset {
        *Local::now().offset()
    }
}

/// Clock pinned to a single instant, viewed from UTC.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Clock pinned to a single instant, viewed from `offset`.
#[derive(Clone, Copy, Debug)]
pub struct ZonedClock {
    pub now: DateTime<Utc>,
    pub offset: FixedOffset,
}

impl Clock for ZonedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn local_offset(&self) -> FixedOffset {
        self.offset
    }
}

/// Parse a published timestamp.
///
/// Accepts RFC 3339 and RFC 2822 with an explicit zone, and naive
/// `YYYY-MM-DD[T ]HH:MM[:SS[.fff]]` read in `local`. A bare `YYYY-MM-DD`
/// is UTC midnight, as browsers read it.
pub fn parse_published(raw: &str, local: FixedOffset) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw).or_else(|_| DateTime::parse_from_rfc2822(raw)) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return naive.and_local_timezone(local).single().map(|dt| dt.with_timezone(&Utc));
        }
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc()),
        Err(_) => None,
    }
}

/// Format `iso` relative to `clock`. Missing or unparseable input yields `""`.
pub fn to_relative(iso: Option<&str>, clock: &impl Clock) -> String {
    let Some(then) = iso.and_then(|raw| parse_published(raw, clock.local_offset())) else {
        return String::new();
    };
    let secs = (clock.now() - then).num_seconds();
    if secs < 60 {
        return "just now".to_owned();
    }
    let min = secs / 60;
    let hr = min / 60;
    let day = hr / 24;
    if min < 60 {
        format!("{min} min ago")
    } else if hr < 24 {
        format!("{hr} hr{} ago", plural(hr))
    } else if day < 7 {
        format!("{day} day{} ago", plural(day))
    } else {
        then.format("%Y-%m-%d").to_string()
    }
}

fn plural(n: i64) -> &'static str {
    if n > 1 { "s" } else { "" }
}
