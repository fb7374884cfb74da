//! # Attribute Paths
//!
//! Locates a configuration attribute so diagnostics can point at it.

use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum PathStep {
    /// Named attribute (`tags`, `maintenance_window`)
    AttributeName(String),
    /// Element of a list attribute
    ElementIndex(usize),
}

/// Path to a configuration attribute, e.g. `backup.window` or `rules[2].arn`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AttributePath {
    steps: Vec<PathStep>,
}

impl AttributePath {
    /// Path rooted at a top-level attribute
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            steps: vec![PathStep::AttributeName(name.into())],
        }
    }

    /// Descend into a nested attribute
    #[must_use]
    pub fn at_name(mut self, name: impl Into<String>) -> Self {
        self.steps.push(PathStep::AttributeName(name.into()));
        self
    }

    /// Descend into a list element
    #[must_use]
    pub fn at_list_index(mut self, index: usize) -> Self {
        self.steps.push(PathStep::ElementIndex(index));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            match step {
                PathStep::AttributeName(name) if i == 0 => write!(f, "{name}")?,
                PathStep::AttributeName(name) => write!(f, ".{name}")?,
                PathStep::ElementIndex(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

// Rendered as its dotted string form in JSON output
impl Serialize for AttributePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_nested_path() {
        let path = AttributePath::root("rules")
            .at_list_index(2)
            .at_name("role_arn");
        assert_eq!(path.to_string(), "rules[2].role_arn");
    }

    #[test]
    fn test_display_empty_path() {
        assert_eq!(AttributePath::default().to_string(), "");
        assert!(AttributePath::default().is_empty());
    }

    #[test]
    fn test_serialize_as_string() {
        let path = AttributePath::root("backup").at_name("window");
        let json = serde_json::to_value(&path).unwrap();
        assert_eq!(json, serde_json::json!("backup.window"));
    }
}
