use crate::model::config::{Config, ConfigTable};
use crate::model::error::io::IOError;
use crate::model::error::system::SystemError;
use crate::model::error::Error;
use std::fs;
use std::io::ErrorKind;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

pub const DEFAULT_CONFIG_PATH: &str = "./config.toml";

pub struct AppConfig {
    config: Config,
    source: Option<PathBuf>,
}

impl AppConfig {
    /// Loads `path`, falling back to the defaults when the file does not exist.
    pub fn new(path: &Path) -> Result<Self, Error> {
        let (config, source) = match Self::load_config_file(path)? {
            Some(config) => (config, Some(path.to_path_buf())),
            None => (Config::default(), None),
        };
        Self::validate(&config)?;
        Ok(Self { config, source })
    }

    /// The file the configuration was read from, `None` for defaults.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    fn load_config_file(path: &Path) -> Result<Option<Config>, Error> {
        let toml_string = match fs::read_to_string(path) {
            Ok(toml_string) => toml_string,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => Err(IOError::ReadFileFailed(path.display().to_string(), err))?,
        };
        let config = toml::from_str::<ConfigTable>(&toml_string)
            .map_err(SystemError::InvalidConfig)?
            .config;
        Ok(Some(config))
    }

    fn validate(config: &Config) -> Result<(), Error> {
        EnvFilter::try_new(&config.log_level).map_err(SystemError::InvalidConfig)?;
        Ok(())
    }
}

impl Deref for AppConfig {
    type Target = Config;

    fn deref(&self) -> &Self::Target {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_uses_defaults() {
        let directory = TempDir::new().unwrap();

        let config = AppConfig::new(&directory.path().join("config.toml")).unwrap();

        assert_eq!(*config, Config::default());
        assert!(config.source().is_none());
    }

    #[test]
    fn file_values_override_defaults() {
        let directory = TempDir::new().unwrap();
        let path = directory.path().join("config.toml");
        fs::write(&path, "[Config]\nlog_level = \"debug\"\nenable_restore_privilege = false\n").unwrap();

        let config = AppConfig::new(&path).unwrap();

        assert_eq!(config.log_level, "debug");
        assert!(!config.enable_restore_privilege);
        assert_eq!(config.source(), Some(path.as_path()));
    }

    #[test]
    fn malformed_file_is_invalid_config() {
        let directory = TempDir::new().unwrap();
        let path = directory.path().join("config.toml");
        fs::write(&path, "[Config\nlog_level = ").unwrap();

        let error = AppConfig::new(&path).err().unwrap();

        assert!(matches!(
            error,
            Error::System(SystemError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn unparsable_log_level_is_invalid_config() {
        let directory = TempDir::new().unwrap();
        let path = directory.path().join("config.toml");
        fs::write(&path, "[Config]\nlog_level = \"=[\"\n").unwrap();

        let error = AppConfig::new(&path).err().unwrap();

        assert!(matches!(
            error,
            Error::System(SystemError::InvalidConfig { .. })
        ));
    }
}
