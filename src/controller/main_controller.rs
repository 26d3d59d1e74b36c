use crate::common::*;

use crate::enums::{check_error::*, severity::*};

use crate::model::{check_request::*, evaluation_result::*};

use crate::traits::service::check_service_trait::*;

#[derive(Debug, new)]
pub struct MainController<C: CheckService> {
    check_service: Arc<C>,
}

impl<C> MainController<C>
where
    C: CheckService + Send + Sync + 'static,
{
    #[doc = "Runs the requested check. Always yields exactly one result; failures become UNKNOWN."]
    pub async fn main_task(&self, request: &CheckRequest) -> EvaluationResult {
        let result: EvaluationResult = match self
            .check_service
            .run_check(*request.kind(), *request.thresholds(), request.filter())
            .await
        {
            Ok(result) => result,
            Err(e) => {
                let category: &str = e
                    .downcast_ref::<CheckError>()
                    .map_or("unclassified", CheckError::get_name);
                error!(
                    "[MainController::main_task] '{}' failed ({}): {:?}",
                    request.kind(),
                    category,
                    e
                );
                EvaluationResult::from_error(&e)
            }
        };

        match result.severity() {
            Severity::Ok => info!("[MainController::main_task] {}", result.message()),
            _ => warn!("[MainController::main_task] {}", result.message()),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::configs::check_args::*;
    use crate::service::check_service_impl::{tests::*, *};

    fn request(check: &str, warning: i64, critical: i64) -> CheckRequest {
        let args: CheckArgs = CheckArgs {
            es_url: "http://fake:9200".to_string(),
            check: check.to_string(),
            warning,
            critical,
            ..CheckArgs::default()
        };
        CheckRequest::from_args(&args).unwrap()
    }

    fn controller(repo: FakeEsRepository) -> MainController<CheckServiceImpl<FakeEsRepository>> {
        MainController::new(Arc::new(CheckServiceImpl::new(Arc::new(repo))))
    }

    #[tokio::test]
    async fn verdict_is_passed_through() {
        let result: EvaluationResult = controller(FakeEsRepository::with_node_stats(cpu_nodes_payload()))
            .main_task(&request("cpu_usage", 50, 90))
            .await;

        assert_eq!(*result.severity(), Severity::Critical);
        assert_eq!(result.perf_points().len(), 3);
    }

    #[tokio::test]
    async fn unreachable_cluster_is_unknown_not_critical() {
        let result: EvaluationResult = controller(FakeEsRepository::unreachable())
            .main_task(&request("health", 0, 0))
            .await;

        assert_eq!(*result.severity(), Severity::Unknown);
        assert_eq!(result.message(), "UNKNOWN: Failed to connect to Elasticsearch");
        assert_eq!(result.severity().exit_code(), 3);
    }
}
