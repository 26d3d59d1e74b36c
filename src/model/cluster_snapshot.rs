use crate::common::*;

use crate::enums::health_color::*;

use crate::model::node_stat::*;

#[doc = "Cluster-wide counters from `/_cluster/health`."]
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct ClusterHealth {
    health_color: HealthColor,
    node_count: i64,
    data_node_count: i64,
    relocating_shards: i64,
    unassigned_shards: i64,
    active_shards: i64,
}

#[doc = "Read-only view of the cluster a single check evaluates."]
/// Only the part a check asked for is populated: node checks carry `nodes`,
/// cluster checks carry `health`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters)]
#[getset(get = "pub")]
pub struct ClusterSnapshot {
    nodes: Vec<NodeStat>,
    health: Option<ClusterHealth>,
}

impl ClusterSnapshot {
    pub fn from_nodes(nodes: Vec<NodeStat>) -> Self {
        Self {
            nodes,
            health: None,
        }
    }

    pub fn from_health(health: ClusterHealth) -> Self {
        Self {
            nodes: Vec::new(),
            health: Some(health),
        }
    }
}
