//! Validation for todo inputs.

/// Validate a todo title from a request body.
///
/// The title must be present and non-empty after trimming. Returns the
/// title as given (untrimmed) so stored values match the input exactly.
pub fn validate_title(title: Option<&str>) -> Result<&str, String> {
    match title {
        Some(t) if !t.trim().is_empty() => Ok(t),
        Some(_) => Err("title must not be empty".to_string()),
        None => Err("title is required".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_non_empty_title() {
        assert_eq!(validate_title(Some("Write spec")), Ok("Write spec"));
    }

    #[test]
    fn preserves_surrounding_whitespace() {
        assert_eq!(validate_title(Some("  padded  ")), Ok("  padded  "));
    }

    #[test]
    fn rejects_empty_title() {
        assert!(validate_title(Some("")).is_err());
    }

    #[test]
    fn rejects_whitespace_only_title() {
        assert!(validate_title(Some("   ")).is_err());
    }

    #[test]
    fn rejects_missing_title() {
        assert_eq!(
            validate_title(None),
            Err("title is required".to_string())
        );
    }
}
