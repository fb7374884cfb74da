//! # Validators
//!
//! Catalog of attribute-level string format validators.
//!
//! Each validator pairs a description with a pure check function:
//!
//! | Constructor                   | Check                                | Accepts                         |
//! |-------------------------------|--------------------------------------|---------------------------------|
//! | [`arn()`]                     | [`validate_arn`]                     | `arn:aws:iam::123456789012:role/x` |
//! | [`utc_timestamp()`]           | [`validate_utc_timestamp`]           | `2023-01-01T00:00:00Z`          |
//! | [`once_a_day_window_format()`] | [`validate_once_a_day_window_format`] | `04:00-05:00`                   |
//! | [`once_a_week_window_format()`] | [`validate_once_a_week_window_format`] | `mon:04:00-mon:05:00`           |
//!
//! Null and unknown values are skipped; absence is enforced elsewhere.

mod arn;
mod error;
mod timestamp;
mod window;

pub use arn::{arn, validate_arn, ArnValidator};
pub use error::{ArnFieldError, FormatError, TimestampError};
pub use timestamp::{utc_timestamp, validate_utc_timestamp, UtcTimestampValidator};
pub use window::{
    once_a_day_window_format, once_a_week_window_format, validate_once_a_day_window_format,
    validate_once_a_week_window_format, OnceADayWindowFormatValidator,
    OnceAWeekWindowFormatValidator,
};

use crate::framework::{Diagnostic, StringRequest, StringResponse, StringValidator};
use tracing::{debug, trace};

/// Shared body of every catalog validator's `validate_string`
///
/// Skips null and unknown values, otherwise runs `check` on the known value and
/// appends one attribute error carrying the description as summary.
fn check_string_request<V>(
    validator: &V,
    request: &StringRequest,
    response: &mut StringResponse,
    check: fn(&str) -> Result<(), FormatError>,
) where
    V: StringValidator + ?Sized,
{
    if request.config_value.is_null() || request.config_value.is_unknown() {
        trace!(path = %request.path, "Skipping validation of null or unknown value");
        return;
    }

    if let Err(e) = check(request.config_value.value_str()) {
        debug!(path = %request.path, kind = e.kind(), error = %e, "Attribute failed format check");
        response.diagnostics.append(Diagnostic::attribute_error(
            request.path.clone(),
            validator.description(),
            e.to_string(),
        ));
    }
}
