use crate::common::*;

use crate::model::{target_filter::*, threshold_pair::*};

#[doc = "Invocation settings. Each flag can also be supplied through the environment."]
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(
    name = "elastic_nagios_check",
    version,
    about = "Nagios plugin checking the health of an Elasticsearch cluster"
)]
pub struct CheckArgs {
    /// Elasticsearch URL
    #[arg(long = "es_url", env = "ES_URL", default_value = "")]
    pub es_url: String,

    /// Check to perform: health, node_count, data_node_count, cpu_usage, heap_size, disk_usage
    #[arg(long = "check", env = "CHECK", default_value = "")]
    pub check: String,

    /// Node IP address for filtering
    #[arg(long = "node_ip", env = "NODE_IP", default_value = "")]
    pub node_ip: String,

    /// Node name for filtering
    #[arg(long = "node_name", env = "NODE_NAME", default_value = "")]
    pub node_name: String,

    /// Warning threshold
    #[arg(short = 'w', long = "w", env = "W", default_value_t = 0, allow_negative_numbers = true)]
    pub warning: i64,

    /// Critical threshold
    #[arg(short = 'c', long = "c", env = "C", default_value_t = 0, allow_negative_numbers = true)]
    pub critical: i64,

    /// Network timeout in seconds, overrides the system config
    #[arg(long = "timeout_sec", env = "TIMEOUT_SEC")]
    pub timeout_sec: Option<u64>,
}

impl CheckArgs {
    pub fn thresholds(&self) -> ThresholdPair {
        ThresholdPair::new(self.warning, self.critical)
    }

    pub fn target_filter(&self) -> TargetFilter {
        TargetFilter::new(self.node_ip.clone(), self.node_name.clone())
    }
}
