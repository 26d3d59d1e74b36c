pub mod aggregator;
pub mod check_service_impl;
pub mod classifier;
pub mod evaluation_engine;
pub mod metric_extractor;
pub mod target_resolver;
