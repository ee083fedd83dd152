//! Input validation utilities
//!
//! Structural checks (lengths, email shape) live on the request DTOs via
//! `validator`; these helpers cover what derive attributes cannot express.

/// Validate username format
pub fn validate_username(username: &str) -> Result<(), &'static str> {
    if username.len() < 3 {
        return Err("Username must be at least 3 characters");
    }
    if username.len() > 32 {
        return Err("Username must be at most 32 characters");
    }
    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-' || c == '.')
    {
        return Err("Username can only contain letters, numbers, underscores, hyphens, and dots");
    }
    Ok(())
}

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("Alice_123").is_ok());
        // Google accounts register as the email local part
        assert!(validate_username("alice.nguyen").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("user@name").is_err());
    }

    #[test]
    fn test_sanitize_string() {
        assert_eq!(sanitize_string("  hello\u{0000} world  "), "hello world");
        assert_eq!(sanitize_string("line\nbreak"), "line\nbreak");
    }
}
