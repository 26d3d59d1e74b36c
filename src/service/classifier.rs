use crate::enums::{polarity::*, severity::*};

use crate::model::threshold_pair::*;

#[doc = "Maps a value to a severity. Comparisons are strict: sitting on a threshold is not a breach."]
/// Critical is checked before warning, so with inverted thresholds the critical
/// comparison still takes precedence.
pub fn classify(value: i64, thresholds: ThresholdPair, polarity: Polarity) -> Severity {
    let breaches = |limit: i64| match polarity {
        Polarity::HighIsBad => value > limit,
        Polarity::LowIsBad => value < limit,
    };

    if breaches(thresholds.critical()) {
        Severity::Critical
    } else if breaches(thresholds.warning()) {
        Severity::Warning
    } else {
        Severity::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> ThresholdPair {
        ThresholdPair::new(50, 90)
    }

    #[test]
    fn high_is_bad_bands() {
        assert_eq!(classify(10, limits(), Polarity::HighIsBad), Severity::Ok);
        assert_eq!(classify(51, limits(), Polarity::HighIsBad), Severity::Warning);
        assert_eq!(classify(91, limits(), Polarity::HighIsBad), Severity::Critical);
    }

    #[test]
    fn thresholds_themselves_are_not_breaches() {
        assert_eq!(classify(50, limits(), Polarity::HighIsBad), Severity::Ok);
        assert_eq!(classify(90, limits(), Polarity::HighIsBad), Severity::Warning);

        let counts: ThresholdPair = ThresholdPair::new(5, 2);
        assert_eq!(classify(5, counts, Polarity::LowIsBad), Severity::Ok);
        assert_eq!(classify(2, counts, Polarity::LowIsBad), Severity::Warning);
    }

    #[test]
    fn low_is_bad_bands() {
        let counts: ThresholdPair = ThresholdPair::new(5, 2);
        assert_eq!(classify(1, counts, Polarity::LowIsBad), Severity::Critical);
        assert_eq!(classify(3, counts, Polarity::LowIsBad), Severity::Warning);
        assert_eq!(classify(6, counts, Polarity::LowIsBad), Severity::Ok);
    }

    #[test]
    fn classification_is_monotonic() {
        let counts: ThresholdPair = ThresholdPair::new(5, 2);

        for value in -5..=120 {
            assert!(
                classify(value, limits(), Polarity::HighIsBad)
                    <= classify(value + 1, limits(), Polarity::HighIsBad)
            );
            assert!(
                classify(value, counts, Polarity::LowIsBad)
                    >= classify(value + 1, counts, Polarity::LowIsBad)
            );
        }
    }

    #[test]
    fn inverted_thresholds_are_evaluated_as_given() {
        let inverted: ThresholdPair = ThresholdPair::new(90, 50);
        assert_eq!(classify(60, inverted, Polarity::HighIsBad), Severity::Critical);
        assert_eq!(classify(40, inverted, Polarity::HighIsBad), Severity::Ok);
    }
}
