//! # Constants
//!
//! Shared constants used throughout the validators.
//!
//! Regular expression sources are kept here so error messages can quote the
//! exact pattern a value was checked against.

/// Partition field of an ARN: `aws`, `aws-cn`, `aws-us-gov`, ...
pub const ARN_PARTITION_PATTERN: &str = r"^aws(-[a-z]+)*$";

/// Region field of an ARN: `us-east-1`, `us-gov-west-1`, ...
pub const ARN_REGION_PATTERN: &str = r"^[a-z]{2}(-[a-z]+)+-\d$";

/// Account ID field of an ARN: the `aws` / `aws-managed` sentinels or 12 digits
pub const ARN_ACCOUNT_ID_PATTERN: &str = r"^(aws|aws-managed|\d{12})$";

/// Single `hh24:mi` token
pub const DAILY_TIME_TOKEN_PATTERN: &str = "([0-1][0-9]|2[0-3]):([0-5][0-9])";

/// Single `ddd:hh24:mi` token (matched against lower-cased input)
pub const WEEKLY_TIME_TOKEN_PATTERN: &str =
    "(sun|mon|tue|wed|thu|fri|sat):([0-1][0-9]|2[0-3]):([0-5][0-9])";

/// Human-readable layout quoted in daily window errors
pub const DAILY_WINDOW_LAYOUT: &str = "hh24:mi-hh24:mi";

/// Human-readable layout quoted in weekly window errors
pub const WEEKLY_WINDOW_LAYOUT: &str = "ddd:hh24:mi-ddd:hh24:mi";

/// Reference RFC3339 layout quoted in timestamp errors
pub const RFC3339_LAYOUT: &str = "2006-01-02T15:04:05Z07:00";

/// Shape of an RFC3339 date-time: `T` separator, optional fraction, `Z` or `±hh:mm`
pub const RFC3339_SHAPE_PATTERN: &str =
    r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d+)?(Z|[+-]\d{2}:\d{2})$";

/// ARN validator description
pub const ARN_DESCRIPTION: &str = "value must be a valid ARN";

/// UTC timestamp validator description
pub const UTC_TIMESTAMP_DESCRIPTION: &str = "value must be a valid UTC Timestamp";

/// Shared by both maintenance window validators
pub const WINDOW_FORMAT_DESCRIPTION: &str = "value must be a valid time format";

/// Default global log level
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

/// Default log format (json, text)
pub const DEFAULT_LOG_FORMAT: &str = "text";
