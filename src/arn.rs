//! # ARN Parsing
//!
//! Splits an Amazon Resource Name into its sections.
//!
//! Format: `arn:<partition>:<service>:<region>:<account-id>:<resource>`
//!
//! Only the structure is checked here. Whether each section holds a
//! plausible value is the job of [`crate::validators::validate_arn`].

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const ARN_PREFIX: &str = "arn:";
const ARN_DELIMITER: char = ':';
const ARN_SECTIONS: usize = 6;

/// Structural ARN parse failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArnParseError {
    #[error("arn: invalid prefix")]
    InvalidPrefix,
    #[error("arn: not enough sections")]
    NotEnoughSections,
}

/// Parsed Amazon Resource Name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arn {
    pub partition: String,
    pub service: String,
    /// Empty for global resources
    pub region: String,
    /// Empty for resources not owned by an account (e.g. S3 buckets)
    pub account_id: String,
    /// Everything after the fifth delimiter, may itself contain `:` or `/`
    pub resource: String,
}

impl Arn {
    /// Parse an ARN string into its sections
    pub fn parse(value: &str) -> Result<Self, ArnParseError> {
        if !value.starts_with(ARN_PREFIX) {
            return Err(ArnParseError::InvalidPrefix);
        }

        let sections: Vec<&str> = value.splitn(ARN_SECTIONS, ARN_DELIMITER).collect();
        let [_, partition, service, region, account_id, resource] = sections.as_slice() else {
            return Err(ArnParseError::NotEnoughSections);
        };

        Ok(Self {
            partition: (*partition).to_owned(),
            service: (*service).to_owned(),
            region: (*region).to_owned(),
            account_id: (*account_id).to_owned(),
            resource: (*resource).to_owned(),
        })
    }
}

impl FromStr for Arn {
    type Err = ArnParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Arn::parse(s)
    }
}

impl fmt::Display for Arn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arn:{}:{}:{}:{}:{}",
            self.partition, self.service, self.region, self.account_id, self.resource
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iam_role() {
        let arn = Arn::parse("arn:aws:iam::123456789012:role/example").unwrap();
        assert_eq!(arn.partition, "aws");
        assert_eq!(arn.service, "iam");
        assert_eq!(arn.region, "");
        assert_eq!(arn.account_id, "123456789012");
        assert_eq!(arn.resource, "role/example");
    }

    #[test]
    fn test_parse_resource_keeps_delimiters() {
        let arn: Arn = "arn:aws:logs:us-east-1:123456789012:log-group:/aws/lambda/fn:*"
            .parse()
            .unwrap();
        assert_eq!(arn.resource, "log-group:/aws/lambda/fn:*");
        assert_eq!(
            arn.to_string(),
            "arn:aws:logs:us-east-1:123456789012:log-group:/aws/lambda/fn:*"
        );
    }

    #[test]
    fn test_parse_invalid_prefix() {
        assert_eq!(
            Arn::parse("aws:iam::123456789012:role/x"),
            Err(ArnParseError::InvalidPrefix)
        );
        assert_eq!(Arn::parse("ARN:aws:iam::1:x"), Err(ArnParseError::InvalidPrefix));
    }

    #[test]
    fn test_parse_not_enough_sections() {
        assert_eq!(
            Arn::parse("arn:aws:iam::123456789012"),
            Err(ArnParseError::NotEnoughSections)
        );
        assert_eq!(Arn::parse("arn:"), Err(ArnParseError::NotEnoughSections));
    }

    #[test]
    fn test_parse_empty_sections_allowed() {
        let arn = Arn::parse("arn:::::").unwrap();
        assert!(arn.partition.is_empty());
        assert!(arn.resource.is_empty());
    }
}
