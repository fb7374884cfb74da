//! # Validation Unit Tests
//!
//! Tests for the format check functions.
//!
//! These tests verify:
//! - ARN section checks and their order
//! - RFC3339 timestamp parsing
//! - Daily and weekly maintenance window formats
//! - Repeated checks give identical outcomes

use provider_validators::validators::{
    validate_arn, validate_once_a_day_window_format, validate_once_a_week_window_format,
    validate_utc_timestamp, ArnFieldError, FormatError,
};

fn arn_message(value: &str) -> String {
    validate_arn(value)
        .expect_err("ARN should be invalid")
        .to_string()
}

#[test]
fn test_validate_arn_empty_passes() {
    assert!(validate_arn("").is_ok());
}

#[test]
fn test_validate_arn_iam_role() {
    assert!(validate_arn("arn:aws:iam::123456789012:role/example").is_ok());
}

#[test]
fn test_validate_arn_missing_resource() {
    let err = validate_arn("arn:aws:iam::123456789012:").unwrap_err();
    assert!(matches!(
        err,
        FormatError::InvalidArnField {
            field: ArnFieldError::MissingResource,
            ..
        }
    ));
    assert_eq!(
        err.to_string(),
        "(arn:aws:iam::123456789012:) is an invalid ARN: missing resource value"
    );
}

#[test]
fn test_validate_arn_bad_partition() {
    let message = arn_message("arn:badpartition:iam::123456789012:role/x");
    assert_eq!(
        message,
        "(arn:badpartition:iam::123456789012:role/x) is an invalid ARN: invalid partition value (expecting to match regular expression: ^aws(-[a-z]+)*$)"
    );
}

#[test]
fn test_validate_arn_missing_partition() {
    assert!(arn_message("arn::iam::123456789012:role/x").ends_with("missing partition value"));
}

#[test]
fn test_validate_arn_bad_account_id() {
    let message = arn_message("arn:aws:iam::not-an-account:role/x");
    assert!(
        message.contains("invalid account ID value"),
        "unexpected message: {message}"
    );
    assert!(message.contains(r"^(aws|aws-managed|\d{12})$"));
}

#[test]
fn test_validate_arn_syntax_errors() {
    let cases = vec![
        ("role/example", "arn: invalid prefix"),
        ("arn:aws:iam", "arn: not enough sections"),
        ("arn:aws:iam::123456789012", "arn: not enough sections"),
    ];

    for (value, reason) in cases {
        let err = validate_arn(value).unwrap_err();
        assert!(
            matches!(err, FormatError::InvalidArnSyntax { .. }),
            "'{value}' should be a syntax error"
        );
        assert_eq!(err.to_string(), format!("({value}) is an invalid ARN: {reason}"));
    }
}

#[test]
fn test_validate_arn_global_resources_without_region() {
    let valid = vec![
        "arn:aws:s3:::bucket/key",
        "arn:aws:iam::aws:policy/ReadOnlyAccess",
        "arn:aws:cloudfront::123456789012:distribution/EDFDVBD6EXAMPLE",
    ];

    for value in valid {
        assert!(validate_arn(value).is_ok(), "ARN '{value}' should be valid");
    }
}

#[test]
fn test_validate_utc_timestamp() {
    assert!(validate_utc_timestamp("2023-01-01T00:00:00Z").is_ok());
    assert!(validate_utc_timestamp("2023-01-01T00:00:00+02:00").is_ok());

    let err = validate_utc_timestamp("2023-01-01").unwrap_err();
    assert!(matches!(err, FormatError::InvalidTimestampFormat { .. }));
    assert_eq!(err.value(), "2023-01-01");
}

#[test]
fn test_validate_once_a_day_window() {
    assert!(validate_once_a_day_window_format("").is_ok());
    assert!(validate_once_a_day_window_format("04:00-05:00").is_ok());
    assert!(validate_once_a_day_window_format("25:00-05:00").is_err());
    assert!(validate_once_a_day_window_format("04:00").is_err());
}

#[test]
fn test_validate_once_a_week_window() {
    assert!(validate_once_a_week_window_format("").is_ok());
    assert!(validate_once_a_week_window_format("mon:04:00-mon:05:00").is_ok());
    assert!(validate_once_a_week_window_format("MON:04:00-mon:05:00").is_ok());
    assert!(validate_once_a_week_window_format("xyz:04:00-mon:05:00").is_err());
}

#[test]
fn test_checks_are_idempotent() {
    type Check = fn(&str) -> Result<(), FormatError>;
    let checks: [(Check, &str); 6] = [
        (validate_arn, "arn:aws:iam::123456789012:"),
        (validate_arn, "arn:aws:iam::123456789012:role/example"),
        (validate_utc_timestamp, "2023-01-01"),
        (validate_once_a_day_window_format, "25:00-05:00"),
        (validate_once_a_week_window_format, "xyz:04:00-mon:05:00"),
        (validate_once_a_week_window_format, "mon:04:00-mon:05:00"),
    ];

    for (check, value) in checks {
        assert_eq!(check(value), check(value), "'{value}' gave different outcomes");
    }
}

#[test]
fn test_validate_arn_rejects_non_ascii_digits() {
    let cases = vec![
        ("arn:aws:iam::١٢٣٤٥٦٧٨٩٠١٢:role/x", ArnFieldError::InvalidAccountId),
        ("arn:aws:ec2:us-east-١:123456789012:vpc/x", ArnFieldError::InvalidRegion),
    ];

    for (value, expected) in cases {
        match validate_arn(value) {
            Err(FormatError::InvalidArnField { field, .. }) => {
                assert_eq!(field, expected, "ARN '{value}' failed on the wrong field");
            }
            other => panic!("ARN '{value}' should be invalid, got {other:?}"),
        }
    }
}

#[test]
fn test_validate_utc_timestamp_rejects_lenient_forms() {
    let invalid = vec![
        "2023-01-01 00:00:00Z",
        "2023-01-01t00:00:00z",
        "2016-12-31T23:59:60Z",
    ];

    for value in invalid {
        assert!(
            validate_utc_timestamp(value).is_err(),
            "Timestamp '{value}' should be invalid"
        );
    }
}
