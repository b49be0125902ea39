//! Generation settings: built-in defaults, then an optional TOML file, then
//! command-line flags.

use crate::cli::TargetArgs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "tags.json";
pub const DEFAULT_OUTPUT: &str = "tags.go";
pub const DEFAULT_PACKAGE: &str = "main";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid toml at {path}: {source}")]
    ParseToml {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// The on-disk config file. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub input: Option<String>,
    pub output: Option<String>,
    pub package: Option<String>,
    pub root: Option<String>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text, path)
    }

    fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::ParseToml {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub package: String,
    /// `None` walks the whole document.
    pub root: Option<String>,
}

impl GenerateConfig {
    pub fn resolve(args: &TargetArgs) -> Result<Self, ConfigError> {
        let file = match &args.config {
            Some(path) => ConfigFile::load(Path::new(path))?,
            None => ConfigFile::default(),
        };
        Ok(Self::layer(file, args))
    }

    fn layer(file: ConfigFile, args: &TargetArgs) -> Self {
        let input = args
            .input
            .clone()
            .or(file.input)
            .unwrap_or_else(|| DEFAULT_INPUT.to_string());
        let output = args
            .output
            .clone()
            .or(file.output)
            .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
        let package = args
            .package
            .clone()
            .or(file.package)
            .unwrap_or_else(|| DEFAULT_PACKAGE.to_string());
        // An explicit empty --root clears a root set in the file.
        let root = args
            .root
            .clone()
            .or(file.root)
            .filter(|root| !root.is_empty());

        Self {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
            package,
            root,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_file_or_flags() {
        let config = GenerateConfig::layer(ConfigFile::default(), &TargetArgs::default());
        assert_eq!(config.input, PathBuf::from("tags.json"));
        assert_eq!(config.output, PathBuf::from("tags.go"));
        assert_eq!(config.package, "main");
        assert_eq!(config.root, None);
    }

    #[test]
    fn flags_override_file_values() {
        let file = ConfigFile::parse(
            "input = \"i18n/en.json\"\npackage = \"tags\"\nroot = \"errors\"\n",
            Path::new("tagconst.toml"),
        )
        .expect("config should parse");
        let args = TargetArgs {
            package: Some("labels".to_string()),
            ..TargetArgs::default()
        };

        let config = GenerateConfig::layer(file, &args);
        assert_eq!(config.input, PathBuf::from("i18n/en.json"));
        assert_eq!(config.output, PathBuf::from("tags.go"));
        assert_eq!(config.package, "labels");
        assert_eq!(config.root.as_deref(), Some("errors"));
    }

    #[test]
    fn empty_root_flag_clears_file_root() {
        let file = ConfigFile {
            root: Some("errors".to_string()),
            ..ConfigFile::default()
        };
        let args = TargetArgs {
            root: Some(String::new()),
            ..TargetArgs::default()
        };
        assert_eq!(GenerateConfig::layer(file, &args).root, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ConfigFile::parse("inptu = \"x\"\n", Path::new("tagconst.toml"))
            .expect_err("typo should fail");
        assert!(matches!(err, ConfigError::ParseToml { .. }));
        assert!(err.to_string().contains("tagconst.toml"));
    }
}
