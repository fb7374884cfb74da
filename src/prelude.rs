//! # Prelude
//!
//! Re-exports commonly used types and traits for convenience.
//!
//! ```rust
//! use provider_validators::prelude::*;
//! ```

// Host framework contract
pub use crate::framework::{
    AttributePath, ConfigValue, Diagnostic, Diagnostics, Severity, StringRequest,
    StringResponse, StringValidator,
};

// Validator catalog
pub use crate::validators::{
    arn, once_a_day_window_format, once_a_week_window_format, utc_timestamp, ArnFieldError,
    FormatError, TimestampError,
};

pub use crate::arn::{Arn, ArnParseError};
