use crate::common::*;

#[doc = "Formats a local timestamp with the given chrono pattern"]
pub fn convert_date_to_str(time: &DateTime<Local>, format: &str) -> String {
    time.format(format).to_string()
}

#[doc = "Timestamp used at the head of every log line"]
pub fn get_log_timestamp(time: &DateTime<Local>) -> String {
    convert_date_to_str(time, "%Y-%m-%d %H:%M:%S%.3f")
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;

    #[test]
    fn log_timestamp_has_millisecond_precision() {
        let time: DateTime<Local> = Local
            .with_ymd_and_hms(2024, 10, 2, 9, 5, 7)
            .single()
            .unwrap();
        assert_eq!(get_log_timestamp(&time), "2024-10-02 09:05:07.000");
    }
}
