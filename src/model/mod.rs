pub mod check_request;
pub mod cluster_snapshot;
pub mod configs;
pub mod elastic_dto;
pub mod evaluation_result;
pub mod node_stat;
pub mod perf_point;
pub mod target_filter;
pub mod threshold_pair;
