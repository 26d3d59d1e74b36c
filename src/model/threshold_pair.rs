use crate::common::*;

use crate::enums::polarity::*;

#[doc = "Warning/critical boundaries supplied by the caller."]
#[derive(Debug, Clone, Copy, PartialEq, Eq, CopyGetters, new)]
#[getset(get_copy = "pub")]
pub struct ThresholdPair {
    warning: i64,
    critical: i64,
}

impl ThresholdPair {
    #[doc = "Whether critical sits beyond warning in the direction the metric degrades."]
    /// Inverted pairs are still evaluated as given; this only feeds a log line.
    pub fn is_ordered_for(&self, polarity: Polarity) -> bool {
        match polarity {
            Polarity::HighIsBad => self.critical >= self.warning,
            Polarity::LowIsBad => self.critical <= self.warning,
        }
    }
}
