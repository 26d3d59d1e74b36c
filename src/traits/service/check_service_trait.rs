use crate::common::*;

use crate::enums::metric_kind::*;

use crate::model::{
    cluster_snapshot::*, evaluation_result::*, target_filter::*, threshold_pair::*,
};

#[async_trait]
pub trait CheckService {
    async fn fetch_snapshot(&self, kind: MetricKind) -> Result<ClusterSnapshot, anyhow::Error>;
    async fn run_check(
        &self,
        kind: MetricKind,
        thresholds: ThresholdPair,
        filter: &TargetFilter,
    ) -> Result<EvaluationResult, anyhow::Error>;
}
