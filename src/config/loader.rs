//! Configuration loader with TOML parsing and environment variable overrides
//!
//! Loading:
//! 1. Read the TOML file
//! 2. Perform environment variable substitution (${VAR} syntax)
//! 3. Parse the TOML into DatalexConfig
//! 4. Apply environment variable overrides (DATALEX_* prefix)
//! 5. Validate the configuration

use super::schema::DatalexConfig;
use super::secret::ApiKeyValue;
use crate::domain::errors::DatalexError;
use crate::domain::result::Result;
use regex::Regex;
use secrecy::Secret;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsing fails, a referenced
/// environment variable is missing, or validation fails.
pub fn load_config(path: impl AsRef<Path>) -> Result<DatalexConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(DatalexError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        DatalexError::Configuration(format!(
            "Failed to read configuration file {}: {e}",
            path.display()
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: DatalexConfig = toml::from_str(&contents)
        .map_err(|e| DatalexError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    config
        .validate()
        .map_err(|e| DatalexError::Configuration(format!("Configuration validation failed: {e}")))?;

    Ok(config)
}

/// Loads configuration, falling back to defaults when the file is absent
///
/// Environment overrides and validation still apply to the defaults, so
/// `DATALEX_EXTERNAL_API_KEY` alone is enough to activate the external path
/// without a config file on disk.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<DatalexConfig> {
    if path.as_ref().exists() {
        return load_config(path);
    }

    let mut config = DatalexConfig::default();
    apply_env_overrides(&mut config);
    config
        .validate()
        .map_err(|e| DatalexError::Configuration(format!("Configuration validation failed: {e}")))?;
    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are skipped. Missing variables are collected and reported
/// together.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("static regex");
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(DatalexError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the DATALEX_* prefix
///
/// For example: DATALEX_EXTERNAL_API_KEY, DATALEX_VALIDATION_MIN_CONFIDENCE
fn apply_env_overrides(config: &mut DatalexConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("DATALEX_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Generation overrides
    if let Ok(val) = std::env::var("DATALEX_GENERATION_REVIEW_THRESHOLD") {
        if let Ok(threshold) = val.parse() {
            config.generation.review_threshold = threshold;
        }
    }
    if let Ok(val) = std::env::var("DATALEX_GENERATION_MAX_SAMPLE_VALUES") {
        if let Ok(max) = val.parse() {
            config.generation.max_sample_values = max;
        }
    }

    // Validation overrides
    if let Ok(val) = std::env::var("DATALEX_VALIDATION_MIN_CONFIDENCE") {
        if let Ok(threshold) = val.parse() {
            config.validation.min_confidence = threshold;
        }
    }

    // External generator overrides
    if let Ok(val) = std::env::var("DATALEX_EXTERNAL_ENABLED") {
        config.external.enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("DATALEX_EXTERNAL_ENDPOINT") {
        config.external.endpoint = val;
    }
    if let Ok(val) = std::env::var("DATALEX_EXTERNAL_MODEL") {
        config.external.model = val;
    }
    if let Ok(val) = std::env::var("DATALEX_EXTERNAL_API_KEY") {
        if !val.trim().is_empty() {
            config.external.api_key = Some(Secret::new(ApiKeyValue::from(val)));
            // A key supplied via the environment implies intent to use it
            config.external.enabled = true;
        }
    }
    if let Ok(val) = std::env::var("DATALEX_EXTERNAL_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.external.timeout_seconds = timeout;
        }
    }

    // Store overrides
    if let Ok(val) = std::env::var("DATALEX_STORE_REVIEWS_PATH") {
        config.store.reviews_path = val.into();
    }
    if let Ok(val) = std::env::var("DATALEX_STORE_DICTIONARY_PATH") {
        config.store.dictionary_path = val.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_error() {
        let err = load_config("/nonexistent/datalex.toml").unwrap_err();
        assert!(matches!(err, DatalexError::Configuration(_)));
    }

    #[test]
    fn test_load_or_default_without_file() {
        let config = load_or_default("/nonexistent/datalex.toml").unwrap();
        assert_eq!(config.generation.review_threshold, 0.75);
    }

    #[test]
    fn test_substitute_known_env_var() {
        std::env::set_var("DATALEX_TEST_SUBST_VAR", "resolved");
        let out = substitute_env_vars("endpoint = \"${DATALEX_TEST_SUBST_VAR}\"").unwrap();
        assert!(out.contains("resolved"));
        std::env::remove_var("DATALEX_TEST_SUBST_VAR");
    }

    #[test]
    fn test_substitute_missing_env_var_fails() {
        let err = substitute_env_vars("key = \"${DATALEX_TEST_DEFINITELY_UNSET}\"").unwrap_err();
        assert!(err
            .to_string()
            .contains("Missing required environment variables"));
    }

    #[test]
    fn test_comment_lines_are_skipped() {
        let out = substitute_env_vars("# key = \"${DATALEX_TEST_DEFINITELY_UNSET}\"").unwrap();
        assert!(out.contains("DATALEX_TEST_DEFINITELY_UNSET"));
    }
}
