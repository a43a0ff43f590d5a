use crate::runner::types::Test;
use std::time::Duration;

/// Convert elapsed seconds to whole milliseconds, rounding half away from zero.
///
/// The product is first snapped to six decimals so binary noise such as
/// `1234.4999999999998` rounds the way the decimal input reads. Negative and
/// non-finite durations count as zero.
pub fn to_milliseconds(seconds: f64) -> u64 {
    if !seconds.is_finite() {
        return 0;
    }

    let millis = seconds * 1000.0;
    let snapped = (millis * 1_000_000.0).round() / 1_000_000.0;
    snapped.round().max(0.0) as u64
}

/// Running totals for a single reporter run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    tests: u64,
    assertions: u64,
}

impl Tally {
    pub fn record(&mut self, test: &Test) {
        self.tests += 1;
        self.assertions += test.assertion_count();
    }

    pub fn tests(&self) -> u64 {
        self.tests
    }

    pub fn assertions(&self) -> u64 {
        self.assertions
    }
}

/// Totals handed to the secondary printer at the end of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub tests: u64,
    pub assertions: u64,
    pub elapsed: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::types::TestKind;

    #[test]
    fn test_to_milliseconds() {
        assert_eq!(to_milliseconds(1.2345), 1235);
        assert_eq!(to_milliseconds(0.0), 0);
        assert_eq!(to_milliseconds(-0.0005), 0);
        assert_eq!(to_milliseconds(0.0004), 0);
        assert_eq!(to_milliseconds(0.0005), 1);
        assert_eq!(to_milliseconds(2.0), 2000);
        assert_eq!(to_milliseconds(f64::NAN), 0);
    }

    #[test]
    fn test_to_milliseconds_snaps_before_rounding() {
        // 0.49999995 ms snaps to 0.5 and rounds up; a bare round() gives 0
        assert_eq!((0.00049999995_f64 * 1000.0).round(), 0.0);
        assert_eq!(to_milliseconds(0.00049999995), 1);
        assert_eq!(to_milliseconds(0.0004999), 0);
    }

    #[test]
    fn test_tally_mixes_test_kinds() {
        let mut tally = Tally::default();
        tally.record(&Test::new("a", "A::a", TestKind::Case { assertions: 3 }));
        tally.record(&Test::new("b.phpt", "b.phpt", TestKind::Script));

        assert_eq!(tally.assertions(), 4);
        assert_eq!(tally.tests(), 2);
    }
}
