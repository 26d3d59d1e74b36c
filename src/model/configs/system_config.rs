use crate::common::*;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ConnectionConfig {
    pub timeout_sec: u64,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self { timeout_sec: 10 }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    pub enabled: bool,
    pub level: String,
    pub directory: String,
    pub file_basename: String,
    pub keep_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            directory: "./logs".to_string(),
            file_basename: "elastic_nagios_check".to_string(),
            keep_files: 7,
        }
    }
}

#[doc = "Optional TOML file pointed to by `SYSTEM_CONFIG_PATH`."]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SystemConfig {
    pub connection: ConnectionConfig,
    pub log: LogConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: SystemConfig = toml::from_str(
            r#"
            [log]
            directory = "/var/log/nagios"
            "#,
        )
        .unwrap();

        assert_eq!(config.connection.timeout_sec, 10);
        assert_eq!(config.log.directory, "/var/log/nagios");
        assert!(config.log.enabled);
        assert_eq!(config.log.keep_files, 7);
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let config: SystemConfig = toml::from_str("").unwrap();
        assert_eq!(config, SystemConfig::default());
    }
}
