use crate::common::*;

use crate::model::node_stat::*;

use crate::utils_modules::calculate_utils::*;

#[doc = "Body of `GET /_nodes/stats/<group>`; nodes are keyed by an opaque node id."]
#[derive(Debug, Deserialize)]
pub struct NodesStatsResponse {
    pub nodes: HashMap<String, NodeStatsDto>,
}

/// Metric groups that were not requested are absent from the payload and default to zero.
#[derive(Debug, Deserialize)]
pub struct NodeStatsDto {
    pub name: String,
    pub host: String,
    #[serde(default)]
    pub os: OsStatsDto,
    #[serde(default)]
    pub jvm: JvmStatsDto,
    #[serde(default)]
    pub fs: FsStatsDto,
}

#[derive(Debug, Default, Deserialize)]
pub struct OsStatsDto {
    #[serde(default)]
    pub cpu: CpuStatsDto,
}

#[derive(Debug, Default, Deserialize)]
pub struct CpuStatsDto {
    #[serde(default)]
    pub percent: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct JvmStatsDto {
    #[serde(default)]
    pub mem: JvmMemStatsDto,
}

#[derive(Debug, Default, Deserialize)]
pub struct JvmMemStatsDto {
    #[serde(default)]
    pub heap_used_percent: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct FsStatsDto {
    #[serde(default)]
    pub total: FsTotalDto,
}

#[derive(Debug, Default, Deserialize)]
pub struct FsTotalDto {
    #[serde(default)]
    pub total_in_bytes: i64,
    #[serde(default)]
    pub free_in_bytes: i64,
}

impl NodeStatsDto {
    fn into_node_stat(self) -> NodeStat {
        let disk: DiskTotals =
            DiskTotals::new(self.fs.total.total_in_bytes, self.fs.total.free_in_bytes);

        let disk_used_percent: Option<i64> =
            get_used_percent(*disk.total_in_bytes(), *disk.free_in_bytes()).ok();

        NodeStat::new(
            self.name,
            self.host,
            self.os.cpu.percent,
            self.jvm.mem.heap_used_percent,
            disk,
            disk_used_percent,
        )
    }
}

impl NodesStatsResponse {
    #[doc = "Converts the payload into node records sorted by name, then address."]
    /// The node map has no order of its own; sorting keeps perf data reproducible.
    pub fn into_node_stats(self) -> Vec<NodeStat> {
        let mut node_stats: Vec<NodeStat> = self
            .nodes
            .into_values()
            .map(NodeStatsDto::into_node_stat)
            .collect();

        node_stats.sort_by(|a, b| {
            a.name()
                .cmp(b.name())
                .then_with(|| a.address().cmp(b.address()))
        });

        node_stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nodes_are_sorted_by_name() {
        let payload: Value = json!({
            "nodes": {
                "zz1": { "name": "node-c", "host": "10.0.0.3", "os": { "cpu": { "percent": 30 } } },
                "aa2": { "name": "node-a", "host": "10.0.0.1", "os": { "cpu": { "percent": 10 } } },
                "mm3": { "name": "node-b", "host": "10.0.0.2", "os": { "cpu": { "percent": 20 } } }
            }
        });

        let response: NodesStatsResponse = serde_json::from_value(payload).unwrap();
        let names: Vec<String> = response
            .into_node_stats()
            .iter()
            .map(|n| n.name().to_string())
            .collect();

        assert_eq!(names, vec!["node-a", "node-b", "node-c"]);
    }

    #[test]
    fn disk_usage_is_derived_from_totals() {
        let payload: Value = json!({
            "nodes": {
                "n1": {
                    "name": "node-a",
                    "host": "10.0.0.1",
                    "fs": { "total": { "total_in_bytes": 100, "free_in_bytes": 37, "available_in_bytes": 30 } }
                },
                "n2": {
                    "name": "node-b",
                    "host": "10.0.0.2",
                    "fs": { "total": { "total_in_bytes": 0, "free_in_bytes": 0, "available_in_bytes": 0 } }
                },
                "n3": {
                    "name": "node-c",
                    "host": "10.0.0.3",
                    "fs": { "total": { "total_in_bytes": 100, "free_in_bytes": 150, "available_in_bytes": 150 } }
                }
            }
        });

        let response: NodesStatsResponse = serde_json::from_value(payload).unwrap();
        let nodes: Vec<NodeStat> = response.into_node_stats();

        assert_eq!(*nodes[0].disk_used_percent(), Some(63));
        assert_eq!(*nodes[1].disk_used_percent(), None);
        assert_eq!(*nodes[2].disk_used_percent(), None);
    }

    #[test]
    fn missing_groups_default_to_zero() {
        let payload: Value = json!({
            "nodes": { "n1": { "name": "node-a", "host": "10.0.0.1" } }
        });

        let response: NodesStatsResponse = serde_json::from_value(payload).unwrap();
        let nodes: Vec<NodeStat> = response.into_node_stats();

        assert_eq!(*nodes[0].cpu_percent(), 0);
        assert_eq!(*nodes[0].heap_used_percent(), 0);
    }

    #[test]
    fn node_without_name_is_rejected() {
        let payload: Value = json!({ "nodes": { "n1": { "host": "10.0.0.1" } } });
        assert!(serde_json::from_value::<NodesStatsResponse>(payload).is_err());
    }
}
