use crate::common::*;

use crate::model::threshold_pair::*;

#[doc = "One performance data entry of the plugin output."]
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct PerfPoint {
    label: String,
    value: i64,
    warn: Option<i64>,
    crit: Option<i64>,
    min: Option<i64>,
    max: Option<i64>,
    unit: String,
}

impl PerfPoint {
    #[doc = "Percentage value bounded to 0..=100 and carrying the check thresholds"]
    pub fn percentage(label: &str, value: i64, thresholds: ThresholdPair) -> Self {
        Self::new(
            label.to_string(),
            value,
            Some(thresholds.warning()),
            Some(thresholds.critical()),
            Some(0),
            Some(100),
            "%".to_string(),
        )
    }

    #[doc = "Bare counter without thresholds or bounds"]
    pub fn counter(label: &str, value: i64) -> Self {
        Self::new(
            label.to_string(),
            value,
            None,
            None,
            None,
            None,
            String::new(),
        )
    }

    #[doc = "Renders `'label'=value[unit];[warn];[crit];[min];[max]`, dropping trailing empty fields."]
    pub fn to_plugin_format(&self) -> String {
        let field = |v: &Option<i64>| v.map(|n| n.to_string()).unwrap_or_default();

        let rendered: String = format!(
            "'{}'={}{};{};{};{};{}",
            self.label.replace('\'', "''"),
            self.value,
            self.unit,
            field(&self.warn),
            field(&self.crit),
            field(&self.min),
            field(&self.max)
        );

        rendered.trim_end_matches(';').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_point_renders_all_fields() {
        let point: PerfPoint = PerfPoint::percentage("es-node-1", 63, ThresholdPair::new(50, 90));
        assert_eq!(point.to_plugin_format(), "'es-node-1'=63%;50;90;0;100");
    }

    #[test]
    fn counter_point_drops_empty_trailing_fields() {
        let point: PerfPoint = PerfPoint::counter("relocating_shards", 2);
        assert_eq!(point.to_plugin_format(), "'relocating_shards'=2");
    }

    #[test]
    fn quotes_inside_labels_are_doubled() {
        let point: PerfPoint = PerfPoint::counter("node's", 1);
        assert_eq!(point.to_plugin_format(), "'node''s'=1");
    }
}
