use crate::common::*;

use crate::enums::{check_error::*, metric_kind::*};

use crate::model::{
    cluster_snapshot::*,
    elastic_dto::{cluster_health_response::*, nodes_stats_response::*},
    evaluation_result::*,
    target_filter::*,
    threshold_pair::*,
};

use crate::service::evaluation_engine::*;

use crate::traits::{repository::es_repository_trait::*, service::check_service_trait::*};

#[derive(Clone, Debug)]
pub struct CheckServiceImpl<R: EsRepository> {
    elastic_obj: Arc<R>,
}

impl<R: EsRepository> CheckServiceImpl<R> {
    pub fn new(elastic_obj: Arc<R>) -> Self {
        let check_service: CheckServiceImpl<R> = CheckServiceImpl { elastic_obj };
        check_service
    }
}

/* private function */
impl<R: EsRepository + Sync + Send> CheckServiceImpl<R> {
    #[doc = "Decodes a response body into the given DTO; anything undecodable is malformed data."]
    fn decode<T: DeserializeOwned>(payload: Value, what: &str) -> Result<T, anyhow::Error> {
        serde_json::from_value::<T>(payload).map_err(|e| {
            error!("[CheckServiceImpl::decode()] {} payload rejected: {:?}", what, e);
            CheckError::MalformedData(
                "Failed to parse JSON response from Elasticsearch".to_string(),
            )
            .into()
        })
    }
}

#[async_trait]
impl<R: EsRepository + Sync + Send> CheckService for CheckServiceImpl<R> {
    #[doc = "Fetches the one endpoint the check needs and builds the snapshot from it."]
    async fn fetch_snapshot(&self, kind: MetricKind) -> Result<ClusterSnapshot, anyhow::Error> {
        match kind.node_metric() {
            Some(metric) => {
                let payload: Value = self
                    .elastic_obj
                    .get_node_stats(&[metric.stats_group()])
                    .await?;
                let resp: NodesStatsResponse = Self::decode(payload, "nodes stats")?;

                Ok(ClusterSnapshot::from_nodes(resp.into_node_stats()))
            }
            None => {
                let payload: Value = self.elastic_obj.get_health_info().await?;
                let resp: ClusterHealthResponse = Self::decode(payload, "cluster health")?;

                Ok(ClusterSnapshot::from_health(resp.into()))
            }
        }
    }

    #[doc = "Runs one check end to end: fetch, then evaluate."]
    async fn run_check(
        &self,
        kind: MetricKind,
        thresholds: ThresholdPair,
        filter: &TargetFilter,
    ) -> Result<EvaluationResult, anyhow::Error> {
        info!(
            "[CheckServiceImpl::run_check()] '{}' against {}",
            kind,
            self.elastic_obj.get_cluster_url()
        );

        let snapshot: ClusterSnapshot = self.fetch_snapshot(kind).await?;
        let result: EvaluationResult = evaluate(kind, &snapshot, thresholds, filter)?;

        Ok(result)
    }
}
