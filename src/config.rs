//! Settings for the interactive calculator
//!
//! Read from a TOML file: `--config <path>`, then `$INFIXCALC_CONFIG`, then
//! `~/.infixcalc.toml`. Every key is optional.

use log::debug;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    pub(crate) prompt: String,
    pub(crate) banner: bool,
    pub(crate) error_label: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: "> ".to_string(),
            banner: false,
            error_label: "Error".to_string(),
        }
    }
}

/// Get home directory
pub(crate) fn dirs_home() -> Option<PathBuf> {
    env::var_os("HOME").map(PathBuf::from)
}

/// Parse config file content
pub(crate) fn parse_config(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}

/// Read and parse a config file
pub(crate) fn read_config(path: &Path) -> Result<Config, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    parse_config(&content).map_err(|e| format!("invalid config {}: {}", path.display(), e))
}

/// Resolve and load the config; problems fall back to defaults with a warning
pub(crate) fn load_config(explicit: Option<&Path>) -> Config {
    let named = explicit
        .map(Path::to_path_buf)
        .or_else(|| env::var_os("INFIXCALC_CONFIG").map(PathBuf::from));

    let mut config = match named {
        Some(path) => read_config(&path).unwrap_or_else(|e| {
            eprintln!("Warning: {}", e);
            Config::default()
        }),
        None => match dirs_home().map(|h| h.join(".infixcalc.toml")) {
            Some(path) if path.exists() => read_config(&path).unwrap_or_else(|e| {
                eprintln!("Warning: {}", e);
                Config::default()
            }),
            _ => Config::default(),
        },
    };

    if env::var("INFIXCALC_BANNER").is_ok() {
        config.banner = true;
    }

    debug!("config: {:?}", config);
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = parse_config("prompt = \"calc> \"").unwrap();
        assert_eq!(config.prompt, "calc> ");
        assert!(!config.banner);
        assert_eq!(config.error_label, "Error");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse_config("precision = 3").is_err());
    }

    #[test]
    fn read_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calc.toml");
        fs::write(&path, "banner = true\nerror_label = \"Eroare\"\n").unwrap();

        let config = read_config(&path).unwrap();
        assert!(config.banner);
        assert_eq!(config.error_label, "Eroare");
    }

    #[test]
    fn explicit_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calc.toml");
        fs::write(&path, "prompt = \"= \"\n").unwrap();

        assert_eq!(load_config(Some(path.as_path())).prompt, "= ");
    }

    #[test]
    fn missing_explicit_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("absent.toml");
        let config = load_config(Some(absent.as_path()));
        assert_eq!(config.prompt, Config::default().prompt);
    }
}
