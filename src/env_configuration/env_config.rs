use crate::common::*;

#[doc = "Optional env helper: unset and empty values both read as `None`"]
fn get_env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|val| !val.is_empty())
}

#[doc = "Function to globally initialize the 'SYSTEM_CONFIG_PATH' variable"]
pub static SYSTEM_CONFIG_PATH: once_lazy<Option<String>> =
    once_lazy::new(|| get_env_opt("SYSTEM_CONFIG_PATH"));
