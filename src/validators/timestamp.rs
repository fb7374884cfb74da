//! # Timestamp Validation
//!
//! Any RFC3339 instant is accepted, whatever its offset. The layout is strict:
//! upper-case `T` and `Z`, two-digit fields, and no leap seconds.

use super::{check_string_request, FormatError, TimestampError};
use crate::constants::{RFC3339_SHAPE_PATTERN, UTC_TIMESTAMP_DESCRIPTION};
use crate::framework::{StringRequest, StringResponse, StringValidator};
use chrono::{DateTime, Timelike};
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

static RFC3339_SHAPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(RFC3339_SHAPE_PATTERN)
        .unicode(false)
        .build()
        .expect("Failed to compile RFC3339 regex - this should never happen")
});

/// Validates that a string attribute is an RFC3339 timestamp
#[derive(Debug, Clone, Copy, Default)]
pub struct UtcTimestampValidator;

impl StringValidator for UtcTimestampValidator {
    fn description(&self) -> String {
        UTC_TIMESTAMP_DESCRIPTION.to_owned()
    }

    fn validate_string(&self, request: &StringRequest, response: &mut StringResponse) {
        check_string_request(self, request, response, validate_utc_timestamp);
    }
}

/// RFC3339 timestamp validator
pub fn utc_timestamp() -> Box<dyn StringValidator> {
    Box::new(UtcTimestampValidator)
}

/// Validate that `value` parses as an RFC3339 date-time
pub fn validate_utc_timestamp(value: &str) -> Result<(), FormatError> {
    check_rfc3339(value).map_err(|source| FormatError::InvalidTimestampFormat {
        value: value.to_owned(),
        source,
    })
}

fn check_rfc3339(value: &str) -> Result<(), TimestampError> {
    // chrono also accepts a space or lower-case `t`/`z`
    if !RFC3339_SHAPE_REGEX.is_match(value) {
        return Err(TimestampError::Layout);
    }

    let parsed = DateTime::parse_from_rfc3339(value)?;

    // chrono stores `:60` as second 59 with an extra second of nanoseconds
    if parsed.nanosecond() >= 1_000_000_000 {
        return Err(TimestampError::SecondOutOfRange);
    }

    Ok(())
}
