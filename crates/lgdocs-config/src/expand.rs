//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use crate::ConfigError;

/// Expand environment variable references in a string.
///
/// Returns the original string unchanged if no `${}` patterns are present.
/// Bare `$VAR` syntax is not expanded (only `${VAR}` with braces), so values
/// such as `$` in a copyright line survive untouched.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(_) => Err(LookupError {
                var_name: var.to_owned(),
            }),
        }
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

/// Expand an optional field in place.
pub(crate) fn expand_opt(value: &mut Option<String>, field: &str) -> Result<(), ConfigError> {
    if let Some(inner) = value.as_deref() {
        *value = Some(expand_env(inner, field)?);
    }
    Ok(())
}

struct LookupError {
    var_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_literal_unchanged() {
        let result = expand_env("https://logos.example.com", "url").unwrap();
        assert_eq!(result, "https://logos.example.com");
    }

    #[test]
    fn test_expand_simple_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("LGDOCS_TEST_EXPAND_SIMPLE", "/preview/");
        }
        let result = expand_env("${LGDOCS_TEST_EXPAND_SIMPLE}", "base_url").unwrap();
        assert_eq!(result, "/preview/");
        unsafe {
            std::env::remove_var("LGDOCS_TEST_EXPAND_SIMPLE");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("LGDOCS_TEST_EXPAND_UNSET");
        }
        let result = expand_env("${LGDOCS_TEST_EXPAND_UNSET:-YOUR_APP_ID}", "search.app_id").unwrap();
        assert_eq!(result, "YOUR_APP_ID");
    }

    #[test]
    fn test_expand_missing_var_reports_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("LGDOCS_TEST_EXPAND_MISSING");
        }
        let err = expand_env("${LGDOCS_TEST_EXPAND_MISSING}", "search.api_key").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        let msg = err.to_string();
        assert!(msg.contains("search.api_key"));
        assert!(msg.contains("LGDOCS_TEST_EXPAND_MISSING"));
    }

    #[test]
    fn test_expand_opt_none_is_noop() {
        let mut value = None;
        expand_opt(&mut value, "docs.edit_url").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_bare_dollar_not_expanded() {
        let result = expand_env("Costs $5", "tagline").unwrap();
        assert_eq!(result, "Costs $5");
    }
}
