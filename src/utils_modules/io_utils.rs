use crate::common::*;

#[doc = "Function that reads a toml file and converts it into an object"]
/// # Arguments
/// * `file_path` - Path of the toml file to read
///
/// # Returns
/// * Result<T, anyhow::Error> - Deserialized object when the file could be read and parsed.
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = std::fs::read_to_string(file_path)
        .map_err(|e| anyhow!("[read_toml_from_file()] '{}': {:?}", file_path, e))?;
    let toml: T = toml::from_str(&toml_content)
        .map_err(|e| anyhow!("[read_toml_from_file()] '{}': {}", file_path, e))?;

    Ok(toml)
}
