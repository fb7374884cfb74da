//! Provider Validators Library
//!
//! Attribute-level string format validators for an infrastructure provider
//! plugin: ARNs, RFC3339 timestamps, and daily/weekly maintenance windows.
//!
//! ## Quick Start
//!
//! ```rust
//! use provider_validators::prelude::*;
//!
//! let request = StringRequest::new(
//!     AttributePath::root("role_arn"),
//!     "arn:aws:iam::123456789012:role/example",
//! );
//! assert!(arn().validate(&request).is_empty());
//! ```

pub mod arn;
pub mod config;
pub mod constants;
pub mod framework;
pub mod observability;
pub mod prelude;
pub mod validators;
