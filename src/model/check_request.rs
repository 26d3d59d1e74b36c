use crate::common::*;

use crate::enums::{check_error::*, metric_kind::*};

use crate::model::{configs::check_args::*, target_filter::*, threshold_pair::*};

#[doc = "Validated invocation: which check, against which cluster, with which limits."]
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct CheckRequest {
    es_url: String,
    kind: MetricKind,
    thresholds: ThresholdPair,
    filter: TargetFilter,
}

impl CheckRequest {
    #[doc = "Validates the raw settings; the cluster URL is checked before the check name."]
    pub fn from_args(args: &CheckArgs) -> Result<Self, CheckError> {
        if args.es_url.is_empty() {
            return Err(CheckError::Configuration(
                "Elasticsearch URL is required".to_string(),
            ));
        }

        if args.check.is_empty() {
            return Err(CheckError::Configuration(
                "Check name is required".to_string(),
            ));
        }

        let kind: MetricKind = args.check.parse()?;

        Ok(Self {
            es_url: args.es_url.clone(),
            kind,
            thresholds: args.thresholds(),
            filter: args.target_filter(),
        })
    }
}
