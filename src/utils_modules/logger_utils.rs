use std::io::Write;

use crate::common::*;

use crate::model::configs::system_config::*;

use crate::utils_modules::time_utils::*;

#[doc = "Log line layout: `[timestamp] LEVEL [module:line] message`"]
fn log_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] {} [{}:{}] {}",
        get_log_timestamp(now.now()),
        record.level(),
        record.module_path().unwrap_or("<unnamed>"),
        record.line().unwrap_or(0),
        &record.args()
    )
}

#[doc = "Function that sets up the global file logger."]
/// stdout belongs to the plugin output, so nothing is duplicated to the console.
///
/// # Arguments
/// * `log_config` - logging section of the system config
///
/// # Returns
/// * Result<Option<LoggerHandle>, anyhow::Error> - `None` when logging is disabled.
pub fn set_global_logger(log_config: &LogConfig) -> Result<Option<LoggerHandle>, anyhow::Error> {
    if !log_config.enabled {
        return Ok(None);
    }

    let handle: LoggerHandle = Logger::try_with_str(&log_config.level)?
        .log_to_file(
            FileSpec::default()
                .directory(&log_config.directory)
                .basename(&log_config.file_basename),
        )
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(log_config.keep_files),
        )
        .format_for_files(log_format)
        .duplicate_to_stderr(Duplicate::None)
        .duplicate_to_stdout(Duplicate::None)
        .start()
        .map_err(|e| anyhow!("[set_global_logger()] {:?}", e))?;

    Ok(Some(handle))
}
