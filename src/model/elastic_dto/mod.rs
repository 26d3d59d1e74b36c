pub mod cluster_health_response;
pub mod nodes_stats_response;
