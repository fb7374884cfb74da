//! # Format Errors
//!
//! Failure categories for the format checks. `Display` renders the detail
//! text that ends up in the attribute diagnostic.

use crate::arn::ArnParseError;
use crate::constants::{
    ARN_ACCOUNT_ID_PATTERN, ARN_PARTITION_PATTERN, ARN_REGION_PATTERN, RFC3339_LAYOUT,
};
use thiserror::Error;

/// A value failed its format check
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// ARN could not be split into its sections
    #[error("({value}) is an invalid ARN: {source}")]
    InvalidArnSyntax {
        value: String,
        source: ArnParseError,
    },
    /// ARN parsed but one of its sections is wrong
    #[error("({value}) is an invalid ARN: {field}")]
    InvalidArnField {
        value: String,
        #[source]
        field: ArnFieldError,
    },
    #[error("must be in RFC3339 time format \"{layout}\". Example: {source}", layout = RFC3339_LAYOUT)]
    InvalidTimestampFormat {
        value: String,
        source: TimestampError,
    },
    #[error("({value}) must satisfy the format of \"{expected}\"")]
    InvalidWindowFormat {
        value: String,
        expected: &'static str,
    },
}

impl FormatError {
    /// The value that failed validation
    pub fn value(&self) -> &str {
        match self {
            FormatError::InvalidArnSyntax { value, .. }
            | FormatError::InvalidArnField { value, .. }
            | FormatError::InvalidTimestampFormat { value, .. }
            | FormatError::InvalidWindowFormat { value, .. } => value,
        }
    }

    /// Short machine-friendly category name, used in log fields
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            FormatError::InvalidArnSyntax { .. } => "invalid_arn_syntax",
            FormatError::InvalidArnField { .. } => "invalid_arn_field",
            FormatError::InvalidTimestampFormat { .. } => "invalid_timestamp_format",
            FormatError::InvalidWindowFormat { .. } => "invalid_window_format",
        }
    }
}

/// ARN section sub-check failures, in the order they are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArnFieldError {
    #[error("missing partition value")]
    MissingPartition,
    #[error("invalid partition value (expecting to match regular expression: {})", ARN_PARTITION_PATTERN)]
    InvalidPartition,
    #[error("invalid region value (expecting to match regular expression: {})", ARN_REGION_PATTERN)]
    InvalidRegion,
    #[error("invalid account ID value (expecting to match regular expression: {})", ARN_ACCOUNT_ID_PATTERN)]
    InvalidAccountId,
    #[error("missing resource value")]
    MissingResource,
}

/// Why a value is not an RFC3339 timestamp
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    /// Separators, field widths or offset do not follow the layout
    #[error("value does not match layout")]
    Layout,
    #[error(transparent)]
    Parse(#[from] chrono::ParseError),
    /// Leap second (`:60`)
    #[error("second out of range")]
    SecondOutOfRange,
}
