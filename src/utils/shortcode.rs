//! Short code normalization and validation.

use crate::error::AppError;
use serde_json::json;

/// Maximum accepted short code length.
pub const MAX_CODE_LENGTH: usize = 50;

/// Codes that cannot be used as short links.
///
/// These would shadow system routes.
pub const RESERVED_CODES: &[&str] = &["api", "health", "version"];

/// Normalizes a raw code for lookup and storage: trims surrounding whitespace
/// and lowercases. Lookups are case-insensitive by construction, not by store
/// capability.
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// Validates an already-normalized short code.
///
/// # Rules
///
/// - 1 to 50 characters
/// - lowercase letters, digits, and hyphens only
/// - cannot start with a hyphen
/// - cannot be a reserved system code
///
/// # Errors
///
/// Returns [`AppError::Validation`] naming the violated rule.
pub fn validate_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() {
        return Err(AppError::bad_request(
            "Shortcode must not be empty",
            json!({}),
        ));
    }

    if code.len() > MAX_CODE_LENGTH {
        return Err(AppError::bad_request(
            "Shortcode must be at most 50 characters",
            json!({ "provided_length": code.len() }),
        ));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(AppError::bad_request(
            "Shortcode can only contain letters, numbers, and hyphens",
            json!({ "code": code }),
        ));
    }

    if code.starts_with('-') {
        return Err(AppError::bad_request(
            "Shortcode cannot start with a hyphen",
            json!({ "code": code }),
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::bad_request(
            "This shortcode is reserved",
            json!({ "code": code }),
        ));
    }

    Ok(())
}

/// Validates a destination URL.
///
/// Only the scheme prefix is checked; the destination is otherwise stored
/// verbatim, with no escaping or normalization.
pub fn validate_destination(destination: &str) -> Result<(), AppError> {
    if destination.starts_with("http://") || destination.starts_with("https://") {
        Ok(())
    } else {
        Err(AppError::bad_request(
            "Destination must start with http:// or https://",
            json!({ "destination": destination }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize_code("  TEST-Url "), "test-url");
        assert_eq!(normalize_code("MiXeD-CaSe"), "mixed-case");
        assert_eq!(normalize_code("with-123"), "with-123");
    }

    #[test]
    fn test_validate_accepts_simple_codes() {
        for code in ["a", "123", "proj", "my-link-2024", "with-123"] {
            assert!(validate_code(code).is_ok(), "{code} should be valid");
        }
    }

    #[test]
    fn test_validate_accepts_maximum_length() {
        let code = "a".repeat(MAX_CODE_LENGTH);
        assert!(validate_code(&code).is_ok());
    }

    #[test]
    fn test_validate_rejects_over_length() {
        let code = "a".repeat(MAX_CODE_LENGTH + 1);
        assert!(validate_code(&code).is_err());
    }

    #[test]
    fn test_validate_rejects_empty() {
        assert!(validate_code("").is_err());
    }

    #[test]
    fn test_validate_rejects_bad_characters() {
        for code in ["test@code", "test code", "test.code", "test_code", "TEST"] {
            let err = validate_code(code).unwrap_err();
            assert!(
                err.to_string().contains("letters, numbers, and hyphens"),
                "{code}: unexpected message {err}"
            );
        }
    }

    #[test]
    fn test_validate_rejects_leading_hyphen() {
        let err = validate_code("-proj").unwrap_err();
        assert!(err.to_string().contains("hyphen"));
    }

    #[test]
    fn test_validate_allows_trailing_hyphen() {
        // Only a leading hyphen is disallowed.
        assert!(validate_code("proj-").is_ok());
    }

    #[test]
    fn test_validate_rejects_all_reserved_codes() {
        for &reserved in RESERVED_CODES {
            assert!(
                validate_code(reserved).is_err(),
                "reserved code '{reserved}' should be invalid"
            );
        }
    }

    #[test]
    fn test_validate_destination_schemes() {
        assert!(validate_destination("https://example.com").is_ok());
        assert!(validate_destination("http://example.com/a?b=c#d").is_ok());

        assert!(validate_destination("ftp://example.com").is_err());
        assert!(validate_destination("javascript:alert(1)").is_err());
        assert!(validate_destination("example.com").is_err());
        assert!(validate_destination("").is_err());
    }
}
