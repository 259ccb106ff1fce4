use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct ConfigTable {
    #[serde(rename = "Config")]
    pub config: Config,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub log_directory: PathBuf,
    pub log_level: String,
    pub snapshot_directory: PathBuf,
    pub enable_restore_privilege: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_directory: PathBuf::from("./logs"),
            log_level: "info".to_string(),
            snapshot_directory: PathBuf::from("./snapshots"),
            enable_restore_privilege: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_config_table() {
        let toml_string = r#"
            [Config]
            log_directory = "D:/logs"
            log_level = "debug"
            snapshot_directory = "D:/snapshots"
            enable_restore_privilege = false
        "#;

        let config = toml::from_str::<ConfigTable>(toml_string).unwrap().config;

        assert_eq!(config.log_directory, PathBuf::from("D:/logs"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.snapshot_directory, PathBuf::from("D:/snapshots"));
        assert!(!config.enable_restore_privilege);
    }

    #[test]
    fn missing_keys_take_defaults() {
        let toml_string = r#"
            [Config]
            log_level = "warn"
        "#;

        let config = toml::from_str::<ConfigTable>(toml_string).unwrap().config;

        assert_eq!(config.log_level, "warn");
        assert_eq!(config.snapshot_directory, Config::default().snapshot_directory);
        assert!(config.enable_restore_privilege);
    }

    #[test]
    fn missing_table_is_rejected() {
        assert!(toml::from_str::<ConfigTable>("log_level = \"info\"").is_err());
    }
}
