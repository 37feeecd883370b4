//! Shared utility functions

use chrono::{DateTime, Utc};

/// Format a timestamp the way it is persisted (RFC3339, full precision)
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

/// Parse a persisted RFC3339 timestamp back into UTC
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Utc))
}
