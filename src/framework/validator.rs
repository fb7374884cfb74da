//! # String Validator Capability
//!
//! Requests, responses, and the trait every attribute validator implements.

use super::{AttributePath, Diagnostics};
use std::fmt::Debug;

/// Configuration value of a string attribute as seen during validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    /// Attribute not set
    Null,
    /// Value not known until apply (computed from another resource)
    Unknown,
    Known(String),
}

impl ConfigValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, ConfigValue::Unknown)
    }

    /// Known value, or the empty string for null and unknown values
    pub fn value_str(&self) -> &str {
        match self {
            ConfigValue::Known(value) => value,
            ConfigValue::Null | ConfigValue::Unknown => "",
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Known(value.to_owned())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::Known(value)
    }
}

impl From<Option<String>> for ConfigValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(ConfigValue::Null, ConfigValue::Known)
    }
}

/// Validation request for one string attribute
#[derive(Debug, Clone)]
pub struct StringRequest {
    pub path: AttributePath,
    pub config_value: ConfigValue,
}

impl StringRequest {
    pub fn new(path: AttributePath, config_value: impl Into<ConfigValue>) -> Self {
        Self {
            path,
            config_value: config_value.into(),
        }
    }
}

/// Diagnostics collected while validating one attribute
#[derive(Debug, Clone, Default)]
pub struct StringResponse {
    pub diagnostics: Diagnostics,
}

/// Attribute-level validator for string values
///
/// Implementations are stateless and may be shared across threads; the host
/// framework can validate independent attributes concurrently.
pub trait StringValidator: Debug + Send + Sync {
    /// Plain-text description, used as the diagnostic summary
    fn description(&self) -> String;

    /// Markdown description for generated documentation
    fn markdown_description(&self) -> String {
        self.description()
    }

    /// Validate the request, appending any diagnostics to the response
    fn validate_string(&self, request: &StringRequest, response: &mut StringResponse);

    /// Validate the request and return only the diagnostics produced
    fn validate(&self, request: &StringRequest) -> Diagnostics {
        let mut response = StringResponse::default();
        self.validate_string(request, &mut response);
        response.diagnostics
    }
}
