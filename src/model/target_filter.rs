use crate::common::*;

#[doc = "Optional narrowing of a node check to a single node."]
/// Empty strings mean "no filter".
#[derive(Debug, Clone, PartialEq, Eq, Default, new)]
pub struct TargetFilter {
    by_address: String,
    by_name: String,
}

impl TargetFilter {
    pub fn address(&self) -> Option<&str> {
        (!self.by_address.is_empty()).then_some(self.by_address.as_str())
    }

    pub fn name(&self) -> Option<&str> {
        (!self.by_name.is_empty()).then_some(self.by_name.as_str())
    }
}
