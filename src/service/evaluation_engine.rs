use crate::common::*;

use crate::enums::{check_error::*, health_color::*, metric_kind::*, polarity::*, severity::*};

use crate::model::{
    cluster_snapshot::*, evaluation_result::*, perf_point::*, target_filter::*,
    threshold_pair::*,
};

use crate::service::{aggregator::*, classifier::*, metric_extractor::*, target_resolver::*};

#[doc = "Evaluates one check against one cluster snapshot."]
/// # Arguments
/// * `kind`       - check to run
/// * `snapshot`   - data fetched for that check
/// * `thresholds` - warning/critical pair, unused by the health check
/// * `filter`     - node filter, only meaningful for node checks
///
/// # Returns
/// * Result<EvaluationResult, CheckError> - errors are the cases that must be reported as UNKNOWN.
pub fn evaluate(
    kind: MetricKind,
    snapshot: &ClusterSnapshot,
    thresholds: ThresholdPair,
    filter: &TargetFilter,
) -> Result<EvaluationResult, CheckError> {
    if kind != MetricKind::Health && !thresholds.is_ordered_for(kind.polarity()) {
        warn!(
            "[evaluate()] thresholds for '{}' look inverted (warning={}, critical={}); evaluating as given",
            kind,
            thresholds.warning(),
            thresholds.critical()
        );
    }

    match kind.node_metric() {
        Some(metric) => evaluate_node_metric(kind, metric, snapshot, thresholds, filter),
        None => {
            let health: &ClusterHealth = snapshot.health().as_ref().ok_or_else(|| {
                CheckError::MalformedData("Cluster health is missing from the response".to_string())
            })?;

            match kind {
                MetricKind::NodeCount => Ok(evaluate_count(
                    kind.profile().display_name,
                    *health.node_count(),
                    thresholds,
                )),
                MetricKind::DataNodeCount => Ok(evaluate_count(
                    kind.profile().display_name,
                    *health.data_node_count(),
                    thresholds,
                )),
                _ => Ok(evaluate_health(health)),
            }
        }
    }
}

#[doc = "CPU, heap and disk checks: one node when the filter matches, otherwise the cluster maximum."]
fn evaluate_node_metric(
    kind: MetricKind,
    metric: NodeMetric,
    snapshot: &ClusterSnapshot,
    thresholds: ThresholdPair,
    filter: &TargetFilter,
) -> Result<EvaluationResult, CheckError> {
    let display_name: &str = kind.profile().display_name;

    match resolve(snapshot.nodes(), filter) {
        selection @ TargetSelection::Single { node, .. } => {
            let identity: &str = selection.identity().unwrap_or(node.name().as_str());
            let value: i64 = extract(node, metric)?;
            let severity: Severity = classify(value, thresholds, kind.polarity());

            info!(
                "[evaluate_node_metric()] {} on node {}: {} -> {}",
                display_name, identity, value, severity
            );

            let message: String = match severity {
                Severity::Ok => format!(
                    "OK: {} on node {} less than {}",
                    display_name,
                    identity,
                    thresholds.warning()
                ),
                _ => format!(
                    "{}: {} on node {} is {}%",
                    severity, display_name, identity, value
                ),
            };

            Ok(EvaluationResult::new(
                severity,
                message,
                vec![PerfPoint::percentage(node.name(), value, thresholds)],
            ))
        }
        TargetSelection::All(nodes) => {
            if filter.address().is_some() || filter.name().is_some() {
                warn!(
                    "[evaluate_node_metric()] no node matches filter {:?}; evaluating the whole cluster",
                    filter
                );
            }

            let Aggregate {
                max_value,
                perf_points,
            } = aggregate(nodes, metric, thresholds)?;

            let max_value: i64 = max_value.ok_or_else(|| {
                CheckError::MalformedData("No node statistics in the response".to_string())
            })?;

            let severity: Severity = classify(max_value, thresholds, kind.polarity());

            info!(
                "[evaluate_node_metric()] Max({}) over {} nodes: {} -> {}",
                display_name,
                nodes.len(),
                max_value,
                severity
            );

            let message: String = match severity {
                Severity::Ok => format!(
                    "OK: Max({}) on cluster less than {}",
                    display_name,
                    thresholds.warning()
                ),
                _ => format!(
                    "{}: Max({}) on cluster is {}%",
                    severity, display_name, max_value
                ),
            };

            Ok(EvaluationResult::new(severity, message, perf_points))
        }
    }
}

#[doc = "Node and data-node counts: healthy while the count stays above the thresholds. No perf data."]
fn evaluate_count(display_name: &str, count: i64, thresholds: ThresholdPair) -> EvaluationResult {
    let severity: Severity = classify(count, thresholds, Polarity::LowIsBad);

    info!(
        "[evaluate_count()] {}: {} -> {}",
        display_name, count, severity
    );

    EvaluationResult::plain(severity, &format!("{} is {}", display_name, count))
}

#[doc = "Maps the cluster health color; yellow also reports shard counters."]
fn evaluate_health(health: &ClusterHealth) -> EvaluationResult {
    info!(
        "[evaluate_health()] cluster health is {}",
        health.health_color()
    );

    match health.health_color() {
        HealthColor::Green => EvaluationResult::plain(Severity::Ok, "Cluster health is green"),
        HealthColor::Yellow => EvaluationResult::new(
            Severity::Warning,
            format!(
                "WARNING: Cluster health is yellow, relocating shards: {}",
                health.relocating_shards()
            ),
            vec![
                PerfPoint::counter("relocating_shards", *health.relocating_shards()),
                PerfPoint::counter("unassigned_shards", *health.unassigned_shards()),
                PerfPoint::counter("active_shards", *health.active_shards()),
            ],
        ),
        HealthColor::Red => EvaluationResult::plain(Severity::Critical, "Cluster health is red"),
        HealthColor::Unknown(raw) => {
            EvaluationResult::plain(Severity::Unknown, &format!("Cluster health is {}", raw))
        }
    }
}
