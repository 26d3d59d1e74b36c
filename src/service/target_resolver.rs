use crate::model::{node_stat::*, target_filter::*};

#[doc = "Which filter picked the node; decides how the node is named in messages."]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchedBy {
    Address,
    Name,
}

#[doc = "Scope of a node check."]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSelection<'a> {
    Single {
        node: &'a NodeStat,
        matched_by: MatchedBy,
    },
    All(&'a [NodeStat]),
}

impl<'a> TargetSelection<'a> {
    #[doc = "How the selected node is referred to: the filter value that matched it"]
    pub fn identity(&self) -> Option<&'a str> {
        match *self {
            TargetSelection::Single {
                node,
                matched_by: MatchedBy::Address,
            } => Some(node.address().as_str()),
            TargetSelection::Single {
                node,
                matched_by: MatchedBy::Name,
            } => Some(node.name().as_str()),
            TargetSelection::All(_) => None,
        }
    }
}

#[doc = "Resolves a target filter against the node list."]
/// The address filter is tried first, then the name filter; the first exact match wins.
/// No match is not an error: evaluation falls back to the whole cluster.
///
/// # Arguments
/// * `nodes`  - nodes of the snapshot, in canonical order
/// * `filter` - address/name filter, empty fields are ignored
///
/// # Returns
/// * TargetSelection
pub fn resolve<'a>(nodes: &'a [NodeStat], filter: &TargetFilter) -> TargetSelection<'a> {
    if let Some(address) = filter.address() {
        if let Some(node) = nodes.iter().find(|n| n.address() == address) {
            return TargetSelection::Single {
                node,
                matched_by: MatchedBy::Address,
            };
        }
    }

    if let Some(name) = filter.name() {
        if let Some(node) = nodes.iter().find(|n| n.name() == name) {
            return TargetSelection::Single {
                node,
                matched_by: MatchedBy::Name,
            };
        }
    }

    TargetSelection::All(nodes)
}
