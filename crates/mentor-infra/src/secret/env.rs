//! Environment variable credential source.
//!
//! Checked before the key file so deployments can inject the key without
//! writing it to disk.

/// Read `var` from the environment.
///
/// Unset, non-Unicode, and blank values all count as absent.
pub fn read_env_key(var: &str) -> Option<String> {
    match std::env::var(var) {
        Ok(val) if !val.trim().is_empty() => Some(val.trim().to_string()),
        Ok(_) => {
            tracing::debug!(var, "Environment credential is blank, ignoring");
            None
        }
        Err(std::env::VarError::NotPresent) => None,
        Err(std::env::VarError::NotUnicode(_)) => {
            // Secrets must be valid strings; treat as not found rather than erroring.
            tracing::warn!(var, "Environment credential is not valid Unicode, ignoring");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_key_existing() {
        // SAFETY: the variable name is unique to this test.
        unsafe { std::env::set_var("MENTOR_TEST_ENV_KEY_1", "  key-123  ") };

        assert_eq!(read_env_key("MENTOR_TEST_ENV_KEY_1"), Some("key-123".to_string()));

        // SAFETY: the variable was just set above by this test only.
        unsafe { std::env::remove_var("MENTOR_TEST_ENV_KEY_1") };
    }

    #[test]
    fn test_env_key_blank_is_absent() {
        // SAFETY: the variable name is unique to this test.
        unsafe { std::env::set_var("MENTOR_TEST_ENV_KEY_2", "   ") };

        assert!(read_env_key("MENTOR_TEST_ENV_KEY_2").is_none());

        // SAFETY: the variable was just set above by this test only.
        unsafe { std::env::remove_var("MENTOR_TEST_ENV_KEY_2") };
    }

    #[test]
    fn test_env_key_missing() {
        assert!(read_env_key("NONEXISTENT_MENTOR_VAR_XYZ_123").is_none());
    }
}
