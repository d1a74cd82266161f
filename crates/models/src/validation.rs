use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// A single problem with one field of a request
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    /// Dotted path to the offending field, e.g. `preRequisiteCourses.1.courseId`
    pub path: String,
    pub message: String,
}

impl FieldError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Every problem found while validating a request
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Shorthand for a failure on a single field
    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError::new(path, message)],
        }
    }

    pub fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(path, message));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns `Ok(value)` when nothing was collected
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.errors.as_slice() {
            [] => write!(f, "Validation error"),
            [only] => write!(f, "{}", only.message),
            errors => {
                let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
                write!(f, "{}", messages.join(". "))
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Rejects strings that are empty once trimmed
pub(crate) fn check_not_blank(
    errors: &mut ValidationError,
    path: &str,
    value: Option<&str>,
    message: &str,
) {
    if let Some(value) = value
        && value.trim().is_empty()
    {
        errors.push(path, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_messages() {
        let mut errors = ValidationError::default();
        errors.push("title", "Title is required");
        errors.push("code", "Code is required");

        assert_eq!(errors.to_string(), "Title is required. Code is required");
        assert_eq!(
            ValidationError::single("faculties", "Faculties are required").to_string(),
            "Faculties are required"
        );
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ValidationError::default().into_result(3), Ok(3));
        assert!(ValidationError::single("x", "bad").into_result(3).is_err());
    }
}
