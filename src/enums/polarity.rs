#[doc = "Direction in which a metric becomes unhealthy."]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Percentages: breached when the value rises above a threshold.
    HighIsBad,
    /// Counters: breached when the value drops below a threshold.
    LowIsBad,
}
