//! Action configuration
//!
//! The action is configured through GitHub Actions inputs, which the runner
//! exposes as `INPUT_<NAME>` environment variables:
//!
//! | Input            | Type    | Notes                                  |
//! |------------------|---------|----------------------------------------|
//! | `github-token`   | string  | required                               |
//! | `delay`          | integer | milliseconds, `<= 0` runs immediately  |
//! | `namespace`      | string  | optional, empty means unset            |
//! | `capture-labels` | boolean | include switch labels in the report    |

use std::collections::HashMap;

pub const INPUT_GITHUB_TOKEN: &str = "github-token";
pub const INPUT_DELAY: &str = "delay";
pub const INPUT_NAMESPACE: &str = "namespace";
pub const INPUT_CAPTURE_LABELS: &str = "capture-labels";

/// Result type for configuration loading
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while reading action inputs
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Input required and not supplied: {0}")]
    MissingInput(String),

    #[error("Input '{name}' is not a valid integer: '{value}'")]
    InvalidNumber { name: String, value: String },

    #[error(
        "Input '{name}' does not meet YAML 1.2 \"Core Schema\" specification: '{value}' \
         (expected one of true|True|TRUE|false|False|FALSE)"
    )]
    InvalidBoolean { name: String, value: String },
}

/// Where raw input values come from
pub trait InputSource {
    /// Raw value of the named input, if set
    fn raw(&self, name: &str) -> Option<String>;

    /// Trimmed value of the named input, empty string when unset
    fn input(&self, name: &str) -> String {
        self.raw(name).map(|v| v.trim().to_string()).unwrap_or_default()
    }
}

/// Reads inputs from `INPUT_*` environment variables set by the runner
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvInputs;

impl EnvInputs {
    /// Environment variable name for an input (`capture-labels` -> `INPUT_CAPTURE-LABELS`)
    pub fn variable_name(name: &str) -> String {
        format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
    }
}

impl InputSource for EnvInputs {
    fn raw(&self, name: &str) -> Option<String> {
        std::env::var(Self::variable_name(name)).ok()
    }
}

impl InputSource for HashMap<String, String> {
    fn raw(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Configuration of a single action run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionConfig {
    /// Token used to read and update the pull request
    pub github_token: String,

    /// Milliseconds to wait before reading the pull request
    pub delay: i64,

    /// Optional namespace to scope the run (not interpreted by the switch parser)
    pub namespace: Option<String>,

    /// Include switch labels in the report
    pub capture_labels: bool,
}

impl ActionConfig {
    /// Read the configuration from the given input source
    pub fn from_inputs(inputs: &impl InputSource) -> ConfigResult<Self> {
        let github_token = inputs.input(INPUT_GITHUB_TOKEN);
        if github_token.is_empty() {
            return Err(ConfigError::MissingInput(INPUT_GITHUB_TOKEN.to_string()));
        }

        let delay = parse_delay(&inputs.input(INPUT_DELAY))?;

        let namespace = Some(inputs.input(INPUT_NAMESPACE)).filter(|ns| !ns.is_empty());

        let capture_labels = parse_boolean(INPUT_CAPTURE_LABELS, &inputs.input(INPUT_CAPTURE_LABELS))?;

        Ok(Self {
            github_token,
            delay,
            namespace,
            capture_labels,
        })
    }

    /// Read the configuration from `INPUT_*` environment variables
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_inputs(&EnvInputs)
    }
}

fn parse_delay(value: &str) -> ConfigResult<i64> {
    if value.is_empty() {
        return Ok(0);
    }
    value.parse::<i64>().map_err(|_| ConfigError::InvalidNumber {
        name: INPUT_DELAY.to_string(),
        value: value.to_string(),
    })
}

fn parse_boolean(name: &str, value: &str) -> ConfigResult<bool> {
    match value {
        "" | "false" | "False" | "FALSE" => Ok(false),
        "true" | "True" | "TRUE" => Ok(true),
        _ => Err(ConfigError::InvalidBoolean {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_reads_basic_config() {
        let config = ActionConfig::from_inputs(&inputs(&[
            ("github-token", "github-token-for-something"),
            ("namespace", ""),
            ("delay", "500"),
            ("capture-labels", "true"),
        ]))
        .unwrap();

        assert_eq!(
            config,
            ActionConfig {
                github_token: "github-token-for-something".to_string(),
                delay: 500,
                namespace: None,
                capture_labels: true,
            }
        );
    }

    #[test]
    fn test_reads_namespace() {
        let config = ActionConfig::from_inputs(&inputs(&[
            ("github-token", "token"),
            ("namespace", "the-ns"),
            ("delay", "500"),
            ("capture-labels", "false"),
        ]))
        .unwrap();

        assert_eq!(config.namespace.as_deref(), Some("the-ns"));
        assert!(!config.capture_labels);
    }

    #[test]
    fn test_inputs_are_trimmed() {
        let config = ActionConfig::from_inputs(&inputs(&[
            ("github-token", "  token \n"),
            ("namespace", "   "),
            ("delay", " -10 "),
        ]))
        .unwrap();

        assert_eq!(config.github_token, "token");
        assert_eq!(config.namespace, None);
        assert_eq!(config.delay, -10);
        assert!(!config.capture_labels);
    }

    #[test]
    fn test_missing_token() {
        let err = ActionConfig::from_inputs(&inputs(&[("delay", "10")])).unwrap_err();
        assert_eq!(err, ConfigError::MissingInput("github-token".to_string()));
    }

    #[test]
    fn test_invalid_delay() {
        let err = ActionConfig::from_inputs(&inputs(&[
            ("github-token", "token"),
            ("delay", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { .. }));
        assert!(err.to_string().contains("soon"));
    }

    #[test]
    fn test_empty_delay_is_zero() {
        let config = ActionConfig::from_inputs(&inputs(&[("github-token", "token")])).unwrap();
        assert_eq!(config.delay, 0);
    }

    #[test]
    fn test_invalid_boolean() {
        let err = ActionConfig::from_inputs(&inputs(&[
            ("github-token", "token"),
            ("capture-labels", "yes"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBoolean { .. }));
    }

    #[test]
    fn test_boolean_spellings() {
        for value in ["true", "True", "TRUE"] {
            assert_eq!(parse_boolean("x", value), Ok(true));
        }
        for value in ["false", "False", "FALSE", ""] {
            assert_eq!(parse_boolean("x", value), Ok(false));
        }
        assert!(parse_boolean("x", "tRUE").is_err());
    }

    #[test]
    fn test_env_variable_name() {
        assert_eq!(EnvInputs::variable_name("capture-labels"), "INPUT_CAPTURE-LABELS");
        assert_eq!(EnvInputs::variable_name("github token"), "INPUT_GITHUB_TOKEN");
    }
}
