//! Configuration for annotation rendering, scheduling and the hover oracle.
//!
//! Load order: `.inlay/config.toml` → environment variables → defaults.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InlayConfig {
    /// Master switch. When false every pass clears the decoration surface.
    pub enabled: bool,
    pub annotations: AnnotationConfig,
    pub languages: LanguageConfig,
    pub schedule: ScheduleConfig,
    pub oracle: OracleConfig,
}

/// What gets annotated and how the label reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationConfig {
    /// Text placed before each parameter name.
    pub leading_characters: String,
    /// Text placed after each parameter name.
    pub trailing_characters: String,
    pub parameter_case: ParameterCase,
    /// Skip calls that pass exactly one argument.
    pub hide_single_parameters: bool,
    /// Skip arguments whose identifier already equals the parameter name.
    pub hide_redundant_annotations: bool,
    /// Suffix arguments absorbed by a rest parameter with `[0]`, `[1]`, ...
    pub show_variadic_numbers: bool,
}

/// Per-language rendering switches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    /// Keep the `$` on PHP parameter names.
    pub show_php_dollar: bool,
}

/// Debounce delays for re-analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Delay before the first pass on a freshly opened document.
    pub initial_delay_ms: u64,
    /// Delay after an edit, focus change or configuration change.
    pub update_delay_ms: u64,
}

/// Hover oracle limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// Maximum number of in-flight hover queries per pass.
    pub concurrency: usize,
}

/// Case transform applied to every displayed name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterCase {
    #[default]
    Default,
    Uppercase,
    Lowercase,
}

impl ParameterCase {
    pub fn apply(self, name: &str) -> String {
        match self {
            Self::Default => name.to_string(),
            Self::Uppercase => name.to_uppercase(),
            Self::Lowercase => name.to_lowercase(),
        }
    }
}

impl FromStr for ParameterCase {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" | "" => Ok(Self::Default),
            "uppercase" => Ok(Self::Uppercase),
            "lowercase" => Ok(Self::Lowercase),
            other => Err(format!("unknown parameter case '{}'", other)),
        }
    }
}

impl Default for InlayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            annotations: AnnotationConfig::default(),
            languages: LanguageConfig::default(),
            schedule: ScheduleConfig::default(),
            oracle: OracleConfig::default(),
        }
    }
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            leading_characters: String::new(),
            trailing_characters: ":".to_string(),
            parameter_case: ParameterCase::Default,
            hide_single_parameters: false,
            hide_redundant_annotations: true,
            show_variadic_numbers: true,
        }
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: 2500,
            update_delay_ms: 25,
        }
    }
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self { concurrency: 8 }
    }
}

/// Helper to parse an env var and apply it to a config field.
fn env_override<T: FromStr>(var: &str, target: &mut T) {
    if let Ok(v) = std::env::var(var)
        && let Ok(n) = v.parse()
    {
        *target = n;
    }
}

impl InlayConfig {
    /// Path of the config file for a project root.
    pub fn path(project_root: &Path) -> PathBuf {
        project_root.join(".inlay").join("config.toml")
    }

    /// Load config from `.inlay/config.toml` in the project root, with env var overrides.
    /// Falls back to defaults if no config file exists.
    pub fn load(project_root: &Path) -> Result<Self> {
        let config_path = Self::path(project_root);

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };

        // Environment variable overrides
        env_override("INLAY_ENABLED", &mut config.enabled);
        env_override(
            "INLAY_LEADING_CHARACTERS",
            &mut config.annotations.leading_characters,
        );
        env_override(
            "INLAY_TRAILING_CHARACTERS",
            &mut config.annotations.trailing_characters,
        );
        env_override(
            "INLAY_PARAMETER_CASE",
            &mut config.annotations.parameter_case,
        );
        env_override(
            "INLAY_HIDE_SINGLE_PARAMETERS",
            &mut config.annotations.hide_single_parameters,
        );
        env_override(
            "INLAY_HIDE_REDUNDANT_ANNOTATIONS",
            &mut config.annotations.hide_redundant_annotations,
        );
        env_override(
            "INLAY_SHOW_VARIADIC_NUMBERS",
            &mut config.annotations.show_variadic_numbers,
        );
        env_override(
            "INLAY_SHOW_PHP_DOLLAR",
            &mut config.languages.show_php_dollar,
        );
        env_override(
            "INLAY_ORACLE_CONCURRENCY",
            &mut config.oracle.concurrency,
        );

        if config.oracle.concurrency == 0 {
            anyhow::bail!("oracle.concurrency must be at least 1");
        }

        Ok(config)
    }

    /// Write the config back to `.inlay/config.toml`, creating the directory.
    pub fn save(&self, project_root: &Path) -> Result<()> {
        let config_path = Self::path(project_root);
        if let Some(dir) = config_path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&config_path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Flip the master switch, returning the new state.
    pub fn toggle_enabled(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InlayConfig::default();
        assert!(config.enabled);
        assert_eq!(config.annotations.trailing_characters, ":");
        assert!(config.annotations.leading_characters.is_empty());
        assert_eq!(config.annotations.parameter_case, ParameterCase::Default);
        assert!(config.annotations.hide_redundant_annotations);
        assert!(!config.annotations.hide_single_parameters);
        assert!(!config.languages.show_php_dollar);
        assert_eq!(config.schedule.initial_delay_ms, 2500);
        assert_eq!(config.schedule.update_delay_ms, 25);
        assert_eq!(config.oracle.concurrency, 8);
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
enabled = false

[annotations]
parameter_case = "uppercase"
hide_single_parameters = true

[languages]
show_php_dollar = true
"#;
        let config: InlayConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.enabled);
        assert_eq!(config.annotations.parameter_case, ParameterCase::Uppercase);
        assert!(config.annotations.hide_single_parameters);
        assert!(config.languages.show_php_dollar);
        // Defaults for unspecified fields
        assert_eq!(config.annotations.trailing_characters, ":");
        assert_eq!(config.schedule.update_delay_ms, 25);
    }

    #[test]
    fn test_config_load_nonexistent() {
        let config = InlayConfig::load(Path::new("/nonexistent/path")).unwrap();
        assert_eq!(config.oracle.concurrency, 8);
    }

    #[test]
    fn test_load_rejects_zero_concurrency() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join(".inlay");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.toml"), "[oracle]\nconcurrency = 0\n").unwrap();

        let err = InlayConfig::load(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("concurrency"));
    }

    #[test]
    fn test_save_then_load_preserves_toggle() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = InlayConfig::default();
        assert!(!config.toggle_enabled());
        config.save(tmp.path()).unwrap();

        let loaded = InlayConfig::load(tmp.path()).unwrap();
        assert!(!loaded.enabled);
        assert_eq!(loaded.annotations.trailing_characters, ":");
    }

    #[test]
    fn test_parameter_case_apply_and_parse() {
        assert_eq!(ParameterCase::Uppercase.apply("items"), "ITEMS");
        assert_eq!(ParameterCase::Lowercase.apply("fileName"), "filename");
        assert_eq!(ParameterCase::Default.apply("fileName"), "fileName");
        assert_eq!(
            "LOWERCASE".parse::<ParameterCase>(),
            Ok(ParameterCase::Lowercase)
        );
        assert!("title".parse::<ParameterCase>().is_err());
    }

    #[test]
    fn test_parameter_case_serializes_lowercase() {
        let json = serde_json::to_string(&ParameterCase::Uppercase).unwrap();
        assert_eq!(json, "\"uppercase\"");
    }
}
