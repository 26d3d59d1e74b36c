pub use std::collections::HashMap;
pub use std::fmt;
pub use std::str::FromStr;
pub use std::sync::Arc;

pub use tokio::time::Duration;

pub use log::{error, info, warn};

pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, LoggerHandle, Naming,
    Record,
};

pub use chrono::{DateTime, Local};

pub use serde::de::DeserializeOwned;
pub use serde::{Deserialize, Serialize};
pub use serde_json::{json, Value};

pub use elasticsearch::cluster::ClusterHealthParts;
pub use elasticsearch::http::response::Response;
pub use elasticsearch::http::transport::{SingleNodeConnectionPool, Transport, TransportBuilder};
pub use elasticsearch::http::Url;
pub use elasticsearch::nodes::NodesStatsParts;
pub use elasticsearch::Elasticsearch;

pub use anyhow::{anyhow, Result};

pub use derive_new::new;
pub use getset::{CopyGetters, Getters};

pub use async_trait::async_trait;

pub use dotenv::dotenv;

pub use once_cell::sync::Lazy as once_lazy;

pub use clap::Parser;
