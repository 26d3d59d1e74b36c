use crate::common::*;

#[async_trait]
pub trait EsRepository {
    async fn get_health_info(&self) -> Result<Value, anyhow::Error>;
    async fn get_node_stats(&self, fields: &[&str]) -> Result<Value, anyhow::Error>;
    fn get_cluster_url(&self) -> String;
}
