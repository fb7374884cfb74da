//! # Configuration
//!
//! Process-level settings loaded from environment variables.

mod logging;

pub use logging::{LogFormat, LoggingConfig};
