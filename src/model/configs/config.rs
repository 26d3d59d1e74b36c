use crate::common::*;

use crate::utils_modules::io_utils::*;

use crate::model::configs::system_config::*;

use crate::enums::check_error::*;

use crate::env_configuration::env_config::*;

#[doc = "Function to initialize system configuration information"]
/// # Returns
/// * Result<SystemConfig, anyhow::Error> - fails when the configured file cannot be read or parsed.
pub fn initialize_system_config() -> Result<SystemConfig, anyhow::Error> {
    load_system_config(SYSTEM_CONFIG_PATH.as_deref())
}

#[doc = "Reads the system config from `config_path`."]
/// Without a file the built-in defaults apply, except that file logging stays off:
/// the plugin may be started from a directory it cannot write to.
pub fn load_system_config(config_path: Option<&str>) -> Result<SystemConfig, anyhow::Error> {
    match config_path {
        Some(path) => read_toml_from_file::<SystemConfig>(path).map_err(|e| {
            CheckError::Configuration(format!("Can't load config: {}", e)).into()
        }),
        None => {
            let mut system_config: SystemConfig = SystemConfig::default();
            system_config.log.enabled = false;
            Ok(system_config)
        }
    }
}
