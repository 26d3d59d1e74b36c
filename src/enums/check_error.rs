use crate::common::*;

#[doc = "Failures that prevent a definite verdict. Every variant is reported as UNKNOWN."]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// Cluster endpoint unreachable, timed out, or answered with a non-success status.
    Transport(String),
    /// Payload could not be decoded, or carries values the checks cannot evaluate.
    MalformedData(String),
    /// Missing or unrecognized invocation settings.
    Configuration(String),
}

impl CheckError {
    pub fn get_name(&self) -> &'static str {
        match self {
            CheckError::Transport(_) => "transport",
            CheckError::MalformedData(_) => "malformed_data",
            CheckError::Configuration(_) => "configuration",
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            CheckError::Transport(msg)
            | CheckError::MalformedData(msg)
            | CheckError::Configuration(msg) => msg,
        }
    }
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.detail())
    }
}

impl std::error::Error for CheckError {}
