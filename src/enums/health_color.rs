use crate::common::*;

#[doc = "Cluster health color as reported by `/_cluster/health`."]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthColor {
    Green,
    Yellow,
    Red,
    /// Anything else the cluster answered with, kept verbatim for the message.
    Unknown(String),
}

impl HealthColor {
    pub fn get_name(&self) -> &str {
        match self {
            HealthColor::Green => "green",
            HealthColor::Yellow => "yellow",
            HealthColor::Red => "red",
            HealthColor::Unknown(raw) => raw.as_str(),
        }
    }
}

impl From<&str> for HealthColor {
    fn from(raw: &str) -> Self {
        match raw {
            "green" => HealthColor::Green,
            "yellow" => HealthColor::Yellow,
            "red" => HealthColor::Red,
            other => HealthColor::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for HealthColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.get_name())
    }
}
