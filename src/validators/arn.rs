//! # ARN Validation
//!
//! Checks each section of a parsed ARN against the formats AWS uses.

use super::{check_string_request, ArnFieldError, FormatError};
use crate::arn::Arn;
use crate::constants::{
    ARN_ACCOUNT_ID_PATTERN, ARN_DESCRIPTION, ARN_PARTITION_PATTERN, ARN_REGION_PATTERN,
};
use crate::framework::{StringRequest, StringResponse, StringValidator};
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Compile with Unicode disabled so `\d` only matches ASCII digits
fn ascii_regex(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .unicode(false)
        .build()
        .expect("Failed to compile ARN regex - this should never happen")
}

static PARTITION_REGEX: LazyLock<Regex> = LazyLock::new(|| ascii_regex(ARN_PARTITION_PATTERN));

static REGION_REGEX: LazyLock<Regex> = LazyLock::new(|| ascii_regex(ARN_REGION_PATTERN));

static ACCOUNT_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| ascii_regex(ARN_ACCOUNT_ID_PATTERN));

/// Validates that a string attribute is a well-formed ARN
#[derive(Debug, Clone, Copy, Default)]
pub struct ArnValidator;

impl StringValidator for ArnValidator {
    fn description(&self) -> String {
        ARN_DESCRIPTION.to_owned()
    }

    fn validate_string(&self, request: &StringRequest, response: &mut StringResponse) {
        check_string_request(self, request, response, validate_arn);
    }
}

/// ARN format validator
pub fn arn() -> Box<dyn StringValidator> {
    Box::new(ArnValidator)
}

/// Validate an ARN string
///
/// The empty string passes. Sections are checked in order (partition, region,
/// account ID, resource) and the first failure is returned:
/// - partition must be present and match `^aws(-[a-z]+)*$`
/// - region, if present, must match `^[a-z]{2}(-[a-z]+)+-\d$`
/// - account ID, if present, must be `aws`, `aws-managed` or 12 digits
/// - resource must be present
pub fn validate_arn(value: &str) -> Result<(), FormatError> {
    if value.is_empty() {
        return Ok(());
    }

    let parsed = Arn::parse(value).map_err(|source| FormatError::InvalidArnSyntax {
        value: value.to_owned(),
        source,
    })?;

    check_arn_fields(&parsed).map_err(|field| FormatError::InvalidArnField {
        value: value.to_owned(),
        field,
    })
}

fn check_arn_fields(arn: &Arn) -> Result<(), ArnFieldError> {
    if arn.partition.is_empty() {
        return Err(ArnFieldError::MissingPartition);
    }
    if !PARTITION_REGEX.is_match(&arn.partition) {
        return Err(ArnFieldError::InvalidPartition);
    }

    if !arn.region.is_empty() && !REGION_REGEX.is_match(&arn.region) {
        return Err(ArnFieldError::InvalidRegion);
    }

    if !arn.account_id.is_empty() && !ACCOUNT_ID_REGEX.is_match(&arn.account_id) {
        return Err(ArnFieldError::InvalidAccountId);
    }

    if arn.resource.is_empty() {
        return Err(ArnFieldError::MissingResource);
    }

    Ok(())
}
