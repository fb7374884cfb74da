//! # Maintenance Window Validation
//!
//! Daily (`hh24:mi-hh24:mi`) and weekly (`ddd:hh24:mi-ddd:hh24:mi`) window
//! strings. The check is purely syntactic: start and end are not compared, so
//! windows that wrap midnight or the end of the week are accepted. The empty
//! string means "no window configured" and is valid.

use super::{check_string_request, FormatError};
use crate::constants::{
    DAILY_TIME_TOKEN_PATTERN, DAILY_WINDOW_LAYOUT, WEEKLY_TIME_TOKEN_PATTERN,
    WEEKLY_WINDOW_LAYOUT, WINDOW_FORMAT_DESCRIPTION,
};
use crate::framework::{StringRequest, StringResponse, StringValidator};
use regex::Regex;
use std::sync::LazyLock;

/// `<token>-<token>` or the empty string
fn window_regex(token: &str) -> Regex {
    Regex::new(&format!("^({token}-{token}|)$"))
        .expect("Failed to compile window regex - this should never happen")
}

static DAILY_WINDOW_REGEX: LazyLock<Regex> =
    LazyLock::new(|| window_regex(DAILY_TIME_TOKEN_PATTERN));

static WEEKLY_WINDOW_REGEX: LazyLock<Regex> =
    LazyLock::new(|| window_regex(WEEKLY_TIME_TOKEN_PATTERN));

/// Validates a once-a-day maintenance window
#[derive(Debug, Clone, Copy, Default)]
pub struct OnceADayWindowFormatValidator;

impl StringValidator for OnceADayWindowFormatValidator {
    fn description(&self) -> String {
        WINDOW_FORMAT_DESCRIPTION.to_owned()
    }

    fn validate_string(&self, request: &StringRequest, response: &mut StringResponse) {
        check_string_request(self, request, response, validate_once_a_day_window_format);
    }
}

/// Once-a-day window validator
pub fn once_a_day_window_format() -> Box<dyn StringValidator> {
    Box::new(OnceADayWindowFormatValidator)
}

/// Validates a once-a-week maintenance window
#[derive(Debug, Clone, Copy, Default)]
pub struct OnceAWeekWindowFormatValidator;

impl StringValidator for OnceAWeekWindowFormatValidator {
    fn description(&self) -> String {
        WINDOW_FORMAT_DESCRIPTION.to_owned()
    }

    fn validate_string(&self, request: &StringRequest, response: &mut StringResponse) {
        check_string_request(self, request, response, validate_once_a_week_window_format);
    }
}

/// Once-a-week window validator
pub fn once_a_week_window_format() -> Box<dyn StringValidator> {
    Box::new(OnceAWeekWindowFormatValidator)
}

/// Validate `hh24:mi-hh24:mi`
pub fn validate_once_a_day_window_format(value: &str) -> Result<(), FormatError> {
    if DAILY_WINDOW_REGEX.is_match(value) {
        return Ok(());
    }

    Err(FormatError::InvalidWindowFormat {
        value: value.to_owned(),
        expected: DAILY_WINDOW_LAYOUT,
    })
}

/// Validate `ddd:hh24:mi-ddd:hh24:mi`, day names case-insensitive
pub fn validate_once_a_week_window_format(value: &str) -> Result<(), FormatError> {
    if WEEKLY_WINDOW_REGEX.is_match(&simple_lowercase(value)) {
        return Ok(());
    }

    // Report the value as the user wrote it
    Err(FormatError::InvalidWindowFormat {
        value: value.to_owned(),
        expected: WEEKLY_WINDOW_LAYOUT,
    })
}

/// Per-character lower-casing that keeps one char per char
///
/// `str::to_lowercase` expands `İ` to `i` plus a combining dot; taking the first
/// char of each mapping folds it to a plain `i`.
fn simple_lowercase(value: &str) -> String {
    value
        .chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}
