use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Directory holding the page definitions
    pub content_path: PathBuf,
    /// Slug of the page shown first; defaults to the first page
    #[serde(default)]
    pub start_page: Option<String>,
}

/// Where the content path in effect came from
#[derive(Debug, Clone, PartialEq)]
pub enum Origin {
    Argument,
    ConfigFile(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub config: Config,
    pub origin: Origin,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded content path
        config.content_path =
            Self::expand_path(&config.content_path).unwrap_or(config.content_path);

        Ok(Some(config))
    }

    /// Combine a command-line content path with the config file.
    ///
    /// The argument wins over the file's `content_path`; `start_page` is
    /// still taken from the file when one exists.
    pub fn resolve(argument: Option<PathBuf>) -> Result<Option<Resolved>, ConfigError> {
        Self::resolve_with(argument, &Self::config_path())
    }

    pub fn resolve_with(
        argument: Option<PathBuf>,
        config_path: &Path,
    ) -> Result<Option<Resolved>, ConfigError> {
        let from_file = Self::load_from_path(config_path)?;

        Ok(match (argument, from_file) {
            (Some(content_path), file) => Some(Resolved {
                config: Config {
                    content_path,
                    start_page: file.and_then(|c| c.start_page),
                },
                origin: Origin::Argument,
            }),
            (None, Some(config)) => Some(Resolved {
                config,
                origin: Origin::ConfigFile(config_path.to_path_buf()),
            }),
            (None, None) => None,
        })
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/microservices-atlas");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/microservices-atlas/config.toml"));
    }

    #[test]
    fn test_start_page_is_optional() {
        let config: Config = toml::from_str("content_path = \"/srv/atlas\"").unwrap();

        assert_eq!(config.content_path, PathBuf::from("/srv/atlas"));
        assert_eq!(config.start_page, None);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("ATLAS_TEST_VAR", "/test/env/path");
        }

        let path = PathBuf::from("$ATLAS_TEST_VAR/subdir");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, PathBuf::from("/test/env/path/subdir"));

        unsafe {
            env::remove_var("ATLAS_TEST_VAR");
        }
    }

    #[test]
    fn test_expand_path_with_absolute_path() {
        let path = PathBuf::from("/absolute/path");
        assert_eq!(Config::expand_path(&path).unwrap(), path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_config_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "content_path = ").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().starts_with("Failed to parse config file"));
    }

    #[test]
    fn test_load_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            "content_path = \"/tmp/atlas-content\"\nstart_page = \"service-mesh\"\n",
        )
        .unwrap();

        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(
            loaded_config,
            Config {
                content_path: PathBuf::from("/tmp/atlas-content"),
                start_page: Some("service-mesh".to_string()),
            }
        );
    }

    #[test]
    fn test_resolve_argument_overrides_file_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            "content_path = \"/from/file\"\nstart_page = \"kubernetes\"\n",
        )
        .unwrap();

        let resolved = Config::resolve_with(Some(PathBuf::from("/from/arg")), &config_file)
            .unwrap()
            .unwrap();

        assert_eq!(resolved.origin, Origin::Argument);
        assert_eq!(resolved.config.content_path, PathBuf::from("/from/arg"));
        assert_eq!(resolved.config.start_page.as_deref(), Some("kubernetes"));
    }

    #[test]
    fn test_resolve_falls_back_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "content_path = \"/from/file\"\n").unwrap();

        let resolved = Config::resolve_with(None, &config_file).unwrap().unwrap();

        assert_eq!(resolved.origin, Origin::ConfigFile(config_file.clone()));
        assert_eq!(resolved.config.content_path, PathBuf::from("/from/file"));
    }

    #[test]
    fn test_resolve_with_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("config.toml");

        assert_eq!(Config::resolve_with(None, &missing).unwrap(), None);
    }
}
