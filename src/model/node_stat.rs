use crate::common::*;

#[doc = "Filesystem totals of one node, as reported under `fs.total`."]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, new)]
#[getset(get = "pub")]
pub struct DiskTotals {
    total_in_bytes: i64,
    free_in_bytes: i64,
}

#[doc = "Observed values of a single node for one invocation."]
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct NodeStat {
    name: String,
    address: String,
    cpu_percent: i64,
    heap_used_percent: i64,
    disk: DiskTotals,
    /// Filled in by the disk usage calculator; `None` when the node reports no capacity.
    disk_used_percent: Option<i64>,
}
