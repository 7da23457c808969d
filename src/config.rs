//! Configuration file support for aida-report.
//!
//! Provides YAML-based configuration through `aida-report.config.yml`
//! files, and the merge of command line, config file and defaults into
//! the settings of one run.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::dto::SummaryFormat;
use crate::cli::Args;
use crate::inventory::domain::SecurityKeywordSet;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "aida-report.config.yml";

/// Report file name used when no output is configured anywhere.
pub const DEFAULT_OUTPUT_FILENAME: &str = "results.xlsx";

/// Log file used when none is configured.
pub const DEFAULT_LOG_FILE: &str = "aida_report.log";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub output: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    /// Replaces the built-in keyword set
    pub security_keywords: Option<Vec<String>>,
    /// Appended to the active keyword set
    pub extra_security_keywords: Option<Vec<String>>,
    pub summary: Option<SummaryFormat>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
///
/// Relative `output` and `log_file` paths are resolved against the
/// directory holding the config file.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let mut config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    if let Some(base) = path.parent() {
        config.output = config.output.map(|p| resolve(base, p));
        config.log_file = config.log_file.map(|p| resolve(base, p));
    }

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn resolve(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_relative() {
        base.join(path)
    } else {
        path
    }
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref keywords) = config.security_keywords {
        if keywords.is_empty() {
            bail!(
                "Invalid config: security_keywords must not be an empty list.\n\n\
                 💡 Hint: Remove the field to use the built-in keywords."
            );
        }
    }

    let lists = [
        ("security_keywords", &config.security_keywords),
        ("extra_security_keywords", &config.extra_security_keywords),
    ];
    for (field, list) in lists {
        for (i, keyword) in list.iter().flatten().enumerate() {
            if keyword.trim().is_empty() {
                bail!(
                    "Invalid config: {}[{}] must not be empty.\n\n\
                     💡 Hint: Each keyword is matched as a case-insensitive substring (e.g., \"kaspersky\").",
                    field,
                    i
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Effective settings of one run.
///
/// Command-line values win over config file values, which win over
/// built-in defaults. Keyword lists are the exception: CLI keywords are
/// appended to whatever the config file produced.
#[derive(Debug, Clone)]
pub struct Settings {
    pub input_directory: PathBuf,
    pub output_path: PathBuf,
    pub log_file: PathBuf,
    pub summary: SummaryFormat,
    pub security_keywords: SecurityKeywordSet,
}

impl Settings {
    pub fn resolve(args: &Args, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let base = match config.security_keywords {
            Some(keywords) => SecurityKeywordSet::new(keywords)?,
            None => SecurityKeywordSet::default(),
        };
        let mut extra = config.extra_security_keywords.unwrap_or_default();
        extra.extend(args.security_keywords.iter().cloned());
        let security_keywords = if extra.is_empty() {
            base
        } else {
            base.with_additional(extra)?
        };

        Ok(Self {
            input_directory: args.input.clone(),
            output_path: args
                .output
                .clone()
                .or(config.output)
                .unwrap_or_else(|| args.input.join(DEFAULT_OUTPUT_FILENAME)),
            log_file: args
                .log_file
                .clone()
                .or(config.log_file)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
            summary: args.summary.or(config.summary).unwrap_or_default(),
            security_keywords,
        })
    }
}

/// Loads the config named on the command line, or discovers one in the
/// input directory.
pub fn load_for(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => load_config_from_path(path).map(Some),
        None if args.input.is_dir() => discover_config(&args.input),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["aida-report", "--input", "scan"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
output: /reports/inventory.xlsx
log_file: logs/run.log
security_keywords:
  - Kaspersky
  - avast
extra_security_keywords:
  - symantec
summary: json
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.output, Some(PathBuf::from("/reports/inventory.xlsx")));
        assert_eq!(config.log_file, Some(dir.path().join("logs/run.log")));
        assert_eq!(
            config.security_keywords.as_deref(),
            Some(&["Kaspersky".to_string(), "avast".to_string()][..])
        );
        assert_eq!(
            config.extra_security_keywords.as_deref(),
            Some(&["symantec".to_string()][..])
        );
        assert_eq!(config.summary, Some(SummaryFormat::Json));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "summary: text\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.summary, Some(SummaryFormat::Text));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config_from_path(Path::new("/nonexistent/config.yml"))
            .unwrap_err()
            .to_string();
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err().to_string();
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_summary_value_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "summary: xml\n").unwrap();

        assert!(load_config_from_path(&config_path).is_err());
    }

    #[test]
    fn test_empty_keyword_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            "extra_security_keywords:\n  - avast\n  - \"  \"\n",
        )
        .unwrap();

        let err = load_config_from_path(&config_path).unwrap_err().to_string();
        assert!(err.contains("extra_security_keywords[1] must not be empty"));
    }

    #[test]
    fn test_empty_keyword_list_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "security_keywords: []\n").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err().to_string();
        assert!(err.contains("security_keywords must not be an empty list"));
    }

    #[test]
    fn test_unknown_fields_are_collected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "summary: text\nformat: markdown\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert!(config.unknown_fields.contains_key("format"));
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::resolve(&args(&[]), None).unwrap();
        assert_eq!(settings.input_directory, PathBuf::from("scan"));
        assert_eq!(settings.output_path, Path::new("scan").join("results.xlsx"));
        assert_eq!(settings.log_file, PathBuf::from("aida_report.log"));
        assert_eq!(settings.summary, SummaryFormat::Text);
        assert_eq!(settings.security_keywords, SecurityKeywordSet::default());
    }

    #[test]
    fn test_settings_cli_wins_over_config() {
        let config = ConfigFile {
            output: Some(PathBuf::from("from-config.xlsx")),
            log_file: Some(PathBuf::from("config.log")),
            summary: Some(SummaryFormat::Json),
            ..Default::default()
        };
        let settings = Settings::resolve(
            &args(&["-o", "from-cli.xlsx", "--summary", "text"]),
            Some(config),
        )
        .unwrap();

        assert_eq!(settings.output_path, PathBuf::from("from-cli.xlsx"));
        assert_eq!(settings.log_file, PathBuf::from("config.log"));
        assert_eq!(settings.summary, SummaryFormat::Text);
    }

    #[test]
    fn test_settings_keywords_replace_then_append() {
        let config = ConfigFile {
            security_keywords: Some(vec!["Avast".to_string()]),
            extra_security_keywords: Some(vec!["symantec".to_string()]),
            ..Default::default()
        };
        let settings = Settings::resolve(&args(&["-k", "McAfee"]), Some(config)).unwrap();
        assert_eq!(
            settings.security_keywords.keywords(),
            &["avast".to_string(), "symantec".to_string(), "mcafee".to_string()]
        );
    }

    #[test]
    fn test_settings_cli_keywords_extend_defaults() {
        let settings = Settings::resolve(&args(&["-k", "avast"]), None).unwrap();
        let keywords = settings.security_keywords.keywords();
        assert!(keywords.contains(&"kaspersky".to_string()));
        assert_eq!(keywords.last().map(String::as_str), Some("avast"));
    }

    #[test]
    fn test_settings_reject_blank_cli_keyword() {
        assert!(Settings::resolve(&args(&["-k", " "]), None).is_err());
    }

    #[test]
    fn test_load_for_explicit_missing_config_fails() {
        let args = args(&["--config", "/nonexistent/aida.yml"]);
        assert!(load_for(&args).is_err());
    }
}
