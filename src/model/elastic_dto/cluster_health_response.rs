use crate::common::*;

use crate::enums::health_color::*;

use crate::model::cluster_snapshot::*;

#[doc = "Body of `GET /_cluster/health`."]
#[derive(Debug, Deserialize)]
pub struct ClusterHealthResponse {
    pub status: String,
    #[serde(default)]
    pub active_shards: i64,
    #[serde(default)]
    pub relocating_shards: i64,
    #[serde(default)]
    pub unassigned_shards: i64,
    #[serde(default)]
    pub number_of_nodes: i64,
    #[serde(default)]
    pub number_of_data_nodes: i64,
}

impl From<ClusterHealthResponse> for ClusterHealth {
    fn from(resp: ClusterHealthResponse) -> Self {
        ClusterHealth::new(
            HealthColor::from(resp.status.as_str()),
            resp.number_of_nodes,
            resp.number_of_data_nodes,
            resp.relocating_shards,
            resp.unassigned_shards,
            resp.active_shards,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_payload_maps_to_counters() {
        let payload: Value = json!({
            "cluster_name": "search",
            "status": "yellow",
            "number_of_nodes": 5,
            "number_of_data_nodes": 3,
            "active_shards": 40,
            "relocating_shards": 2,
            "unassigned_shards": 1
        });

        let resp: ClusterHealthResponse = serde_json::from_value(payload).unwrap();
        let health: ClusterHealth = resp.into();

        assert_eq!(*health.health_color(), HealthColor::Yellow);
        assert_eq!(*health.node_count(), 5);
        assert_eq!(*health.data_node_count(), 3);
        assert_eq!(*health.relocating_shards(), 2);
        assert_eq!(*health.unassigned_shards(), 1);
        assert_eq!(*health.active_shards(), 40);
    }

    #[test]
    fn status_is_required() {
        let payload: Value = json!({ "number_of_nodes": 5 });
        assert!(serde_json::from_value::<ClusterHealthResponse>(payload).is_err());
    }
}
