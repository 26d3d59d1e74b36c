pub mod check_args;
pub mod config;
pub mod system_config;
