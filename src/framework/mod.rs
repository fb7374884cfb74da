//! # Framework
//!
//! The slice of the host plugin framework that attribute validators talk to:
//! configuration values, attribute paths, diagnostics, and the
//! [`StringValidator`] capability itself.

mod diagnostics;
mod path;
mod validator;

pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use path::AttributePath;
pub use validator::{ConfigValue, StringRequest, StringResponse, StringValidator};
