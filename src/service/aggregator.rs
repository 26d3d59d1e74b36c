use crate::enums::{check_error::*, metric_kind::*};

use crate::model::{node_stat::*, perf_point::*, threshold_pair::*};

use crate::service::metric_extractor::*;

#[doc = "Cluster-wide reduction of one node metric."]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregate {
    /// `None` only when there were no nodes.
    pub max_value: Option<i64>,
    /// One point per node, in node order.
    pub perf_points: Vec<PerfPoint>,
}

#[doc = "Visits every node once, collecting its perf point and the running maximum."]
/// # Arguments
/// * `nodes`      - nodes in canonical order
/// * `metric`     - value to read from each node
/// * `thresholds` - copied into every perf point
///
/// # Returns
/// * Result<Aggregate, CheckError> - fails if any node's value cannot be extracted.
pub fn aggregate(
    nodes: &[NodeStat],
    metric: NodeMetric,
    thresholds: ThresholdPair,
) -> Result<Aggregate, CheckError> {
    let mut max_value: Option<i64> = None;
    let mut perf_points: Vec<PerfPoint> = Vec::with_capacity(nodes.len());

    for node in nodes {
        let value: i64 = extract(node, metric)?;

        perf_points.push(PerfPoint::percentage(node.name(), value, thresholds));
        max_value = Some(max_value.map_or(value, |cur| cur.max(value)));
    }

    Ok(Aggregate {
        max_value,
        perf_points,
    })
}
