use crate::common::*;

use crate::enums::{check_error::*, severity::*};

use crate::model::perf_point::*;

#[doc = "Verdict of one invocation, handed to the plugin output."]
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct EvaluationResult {
    severity: Severity,
    message: String,
    perf_points: Vec<PerfPoint>,
}

impl EvaluationResult {
    #[doc = "Result without performance data, message prefixed with the severity label"]
    pub fn plain(severity: Severity, detail: &str) -> Self {
        Self::new(severity, format!("{}: {}", severity, detail), Vec::new())
    }

    #[doc = "Maps any failure to UNKNOWN; the message carries the error description."]
    pub fn from_error(err: &anyhow::Error) -> Self {
        let detail: String = match err.downcast_ref::<CheckError>() {
            Some(check_err) => check_err.to_string(),
            None => err.to_string(),
        };

        Self::plain(Severity::Unknown, &detail)
    }

    #[doc = "Single line printed to stdout for the monitoring supervisor."]
    pub fn plugin_output(&self) -> String {
        if self.perf_points.is_empty() {
            return self.message.clone();
        }

        let perf_data: Vec<String> = self
            .perf_points
            .iter()
            .map(PerfPoint::to_plugin_format)
            .collect();

        format!("{} | {}", self.message, perf_data.join(" "))
    }
}
