use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeZone, Utc};

use crate::error::CardError;

/// en-US short date, e.g. "1/2/24, 3:04 AM".
pub const EN_US_SHORT_PATTERN: &str = "%-m/%-d/%y, %-I:%M %p";

/// Short date patterns per locale. Lookup tries the full tag, then the
/// language alone.
const SHORT_PATTERNS: &[(&str, &str)] = &[
    ("en-US", EN_US_SHORT_PATTERN),
    ("en-GB", "%d/%m/%Y, %H:%M"),
    ("en", EN_US_SHORT_PATTERN),
    ("de", "%d.%m.%y, %H:%M"),
    ("fr", "%d/%m/%Y %H:%M"),
    ("es", "%-d/%-m/%y, %-H:%M"),
    ("ja", "%Y/%m/%d %-H:%M"),
    ("zh", "%Y/%-m/%-d %H:%M"),
    ("ko", "%y. %-m. %-d. %p %-I:%M"),
];

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

pub trait DateFormatter: Send + Sync {
    fn short_format(&self, date: &DateTime<Utc>) -> String;

    /// Reads a creation timestamp. Zoneless values are taken as UTC.
    fn parse(&self, raw: &str) -> Option<DateTime<Utc>> {
        parse_timestamp(raw, &Utc.fix())
    }
}

/// Renders dates with a strftime pattern in a fixed UTC offset.
#[derive(Debug, Clone)]
pub struct PatternDateFormatter {
    pattern: String,
    offset: FixedOffset,
}

impl PatternDateFormatter {
    /// Rejects patterns chrono cannot render; formatting one would panic later.
    pub fn new(pattern: impl Into<String>, offset: FixedOffset) -> Result<Self, CardError> {
        let pattern = pattern.into();
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(CardError::InvalidDatePattern(pattern));
        }
        Ok(Self { pattern, offset })
    }

    pub fn for_locale(locale: &str, offset: FixedOffset) -> Self {
        Self {
            pattern: short_pattern_for_locale(locale).to_string(),
            offset,
        }
    }

    pub fn en_us() -> Self {
        Self::for_locale("en-US", Utc.fix())
    }
}

impl Default for PatternDateFormatter {
    fn default() -> Self {
        Self::en_us()
    }
}

impl DateFormatter for PatternDateFormatter {
    fn short_format(&self, date: &DateTime<Utc>) -> String {
        date.with_timezone(&self.offset).format(&self.pattern).to_string()
    }

    fn parse(&self, raw: &str) -> Option<DateTime<Utc>> {
        parse_timestamp(raw, &self.offset)
    }
}

/// Short date pattern for a BCP 47 tag such as "de-DE" or "fr".
/// Unknown locales get the en-US pattern.
pub fn short_pattern_for_locale(locale: &str) -> &'static str {
    let tag = locale.trim().replace('_', "-");
    let language = tag.split('-').next().unwrap_or_default();

    [tag.as_str(), language]
        .iter()
        .find_map(|wanted| {
            SHORT_PATTERNS
                .iter()
                .find(|(known, _)| known.eq_ignore_ascii_case(wanted))
                .map(|(_, pattern)| *pattern)
        })
        .unwrap_or(EN_US_SHORT_PATTERN)
}

pub fn utc_offset(minutes: i32) -> Result<FixedOffset, CardError> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or(CardError::InvalidUtcOffset(minutes))
}

/// Parses an RFC 3339 timestamp, the format the API server emits. A
/// zoneless ISO 8601 date-time is read as local time in `offset`.
pub fn parse_timestamp(raw: &str, offset: &FixedOffset) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(d) = DateTime::parse_from_rfc3339(raw) {
        return Some(d.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(raw, f).ok())
        .and_then(|naive| offset.from_local_datetime(&naive).single())
        .map(|d| d.with_timezone(&Utc))
}
