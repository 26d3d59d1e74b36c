use crate::common::*;

use crate::enums::{check_error::*, polarity::*};

#[doc = "Per-node value a percentage check reads from a node's statistics."]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeMetric {
    Cpu,
    Heap,
    Disk,
}

#[doc = "Where the values of a check come from."]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricSource {
    /// `GET /_cluster/health`
    ClusterHealth,
    /// `GET /_nodes/stats/<group>`
    NodeStats(NodeMetric),
}

#[doc = "Static description of one check: naming, polarity and data source."]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricProfile {
    pub check_name: &'static str,
    pub display_name: &'static str,
    pub polarity: Polarity,
    pub source: MetricSource,
}

const HEALTH: MetricProfile = MetricProfile {
    check_name: "health",
    display_name: "Cluster health",
    polarity: Polarity::HighIsBad,
    source: MetricSource::ClusterHealth,
};

const NODE_COUNT: MetricProfile = MetricProfile {
    check_name: "node_count",
    display_name: "Number of nodes",
    polarity: Polarity::LowIsBad,
    source: MetricSource::ClusterHealth,
};

const DATA_NODE_COUNT: MetricProfile = MetricProfile {
    check_name: "data_node_count",
    display_name: "Number of data nodes",
    polarity: Polarity::LowIsBad,
    source: MetricSource::ClusterHealth,
};

const CPU_USAGE: MetricProfile = MetricProfile {
    check_name: "cpu_usage",
    display_name: "CPU usage",
    polarity: Polarity::HighIsBad,
    source: MetricSource::NodeStats(NodeMetric::Cpu),
};

const HEAP_SIZE: MetricProfile = MetricProfile {
    check_name: "heap_size",
    display_name: "Heap size",
    polarity: Polarity::HighIsBad,
    source: MetricSource::NodeStats(NodeMetric::Heap),
};

const DISK_USAGE: MetricProfile = MetricProfile {
    check_name: "disk_usage",
    display_name: "Disk usage",
    polarity: Polarity::HighIsBad,
    source: MetricSource::NodeStats(NodeMetric::Disk),
};

#[doc = "Check selected by the `check` setting."]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Health,
    NodeCount,
    DataNodeCount,
    CpuUsage,
    HeapSize,
    DiskUsage,
}

impl MetricKind {
    pub const ALL: [MetricKind; 6] = [
        MetricKind::Health,
        MetricKind::NodeCount,
        MetricKind::DataNodeCount,
        MetricKind::CpuUsage,
        MetricKind::HeapSize,
        MetricKind::DiskUsage,
    ];

    pub fn profile(&self) -> &'static MetricProfile {
        match self {
            MetricKind::Health => &HEALTH,
            MetricKind::NodeCount => &NODE_COUNT,
            MetricKind::DataNodeCount => &DATA_NODE_COUNT,
            MetricKind::CpuUsage => &CPU_USAGE,
            MetricKind::HeapSize => &HEAP_SIZE,
            MetricKind::DiskUsage => &DISK_USAGE,
        }
    }

    pub fn get_name(&self) -> &'static str {
        self.profile().check_name
    }

    pub fn polarity(&self) -> Polarity {
        self.profile().polarity
    }

    #[doc = "The per-node value this check evaluates, `None` for cluster-wide checks."]
    pub fn node_metric(&self) -> Option<NodeMetric> {
        match self.profile().source {
            MetricSource::NodeStats(metric) => Some(metric),
            MetricSource::ClusterHealth => None,
        }
    }
}

impl NodeMetric {
    #[doc = "Metric group requested from `/_nodes/stats/<group>`"]
    pub fn stats_group(&self) -> &'static str {
        match self {
            NodeMetric::Cpu => "os",
            NodeMetric::Heap => "jvm",
            NodeMetric::Disk => "fs",
        }
    }
}

impl FromStr for MetricKind {
    type Err = CheckError;

    fn from_str(check_name: &str) -> Result<Self, Self::Err> {
        MetricKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.get_name() == check_name)
            .ok_or_else(|| {
                CheckError::Configuration(format!("Unrecognized check '{}'", check_name))
            })
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.get_name())
    }
}
