use crate::enums::{check_error::*, metric_kind::*};

use crate::model::node_stat::*;

#[doc = "Reads the value a node check evaluates from a node record."]
/// Disk usage must already have been derived from the filesystem totals;
/// a node without it reported zero capacity or free space outside its capacity.
pub fn extract(node: &NodeStat, metric: NodeMetric) -> Result<i64, CheckError> {
    match metric {
        NodeMetric::Cpu => Ok(*node.cpu_percent()),
        NodeMetric::Heap => Ok(*node.heap_used_percent()),
        NodeMetric::Disk => node.disk_used_percent().ok_or_else(|| {
            let reason: &str = if *node.disk().total_in_bytes() <= 0 {
                "zero capacity"
            } else {
                "free space outside capacity"
            };
            CheckError::MalformedData(format!(
                "Disk totals of node {} report {}",
                node.name(),
                reason
            ))
        }),
    }
}
