use crate::common::*;

#[doc = "Disk usage percentage of a filesystem, truncated to an integer."]
/// # Arguments
/// * `total_bytes` - Filesystem capacity
/// * `free_bytes`  - Unused bytes
///
/// # Returns
/// * Result<i64, anyhow::Error> - `100 * (total - free) / total`; fails when capacity is not positive
///   or the free space lies outside `0..=total`.
pub fn get_used_percent(total_bytes: i64, free_bytes: i64) -> Result<i64, anyhow::Error> {
    if total_bytes <= 0 {
        return Err(anyhow!(
            "[get_used_percent()] Filesystem capacity must be positive, got {}",
            total_bytes
        ));
    }

    if free_bytes < 0 || free_bytes > total_bytes {
        return Err(anyhow!(
            "[get_used_percent()] Free bytes {} outside of capacity {}",
            free_bytes,
            total_bytes
        ));
    }

    /* widen so that 100 * bytes cannot overflow on very large volumes */
    let used: i128 = i128::from(total_bytes) - i128::from(free_bytes);
    let percent: i128 = 100 * used / i128::from(total_bytes);

    i64::try_from(percent).map_err(|e| anyhow!("[get_used_percent()] {:?}", e))
}
