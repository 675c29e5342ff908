//! Field-level validation primitives
//!
//! Forms validate locally before any network call. Failures are collected
//! into a map from field name to an enumerated reason, so the UI can render
//! one message under each offending input.

use std::collections::BTreeMap;
use std::fmt;

/// Why a single field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssue {
    Required,
    NotAPositiveNumber,
    Negative,
    MustExceedCostPrice,
    InvalidEmail,
    NoItems,
}

impl ValidationIssue {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationIssue::Required => "This field is required",
            ValidationIssue::NotAPositiveNumber => "A value greater than zero is required",
            ValidationIssue::Negative => "Value cannot be negative",
            ValidationIssue::MustExceedCostPrice => {
                "Selling price must be greater than cost price"
            }
            ValidationIssue::InvalidEmail => "Valid email is required",
            ValidationIssue::NoItems => "At least one item is required",
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Map of field name to failure reason. Empty map means the form is valid.
pub type FieldErrors = BTreeMap<&'static str, ValidationIssue>;

/// Minimal `local@domain.tld` shape check: exactly one '@', non-empty local
/// part, and a dot inside the domain with characters on both sides.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let Some(domain) = parts.next() else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || value.contains(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("john@example.com"));
        assert!(is_valid_email("a.b+c@mail.example.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("john"));
        assert!(!is_valid_email("john@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("john@.com"));
        assert!(!is_valid_email("john@example."));
        assert!(!is_valid_email("jo hn@example.com"));
    }
}
