use crate::types::{KnobIndex, Percent, RawCount, FULL_SCALE};
use serde::{Deserialize, Serialize};

/// Raw ADC counts that map to 0% and 100%.
///
/// `low > high` is allowed and inverts the knob, which is the same as
/// swapping the power and ground wires of the potentiometer.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Calibration {
    pub low: RawCount,
    pub high: RawCount,
}

impl Calibration {
    pub const fn new(low: RawCount, high: RawCount) -> Self {
        Self { low, high }
    }

    pub fn is_valid(&self) -> bool {
        self.low != self.high
    }

    /// Rescale a raw count between the bounds and saturate to 0..=100%.
    ///
    /// An empty range gives 0, `Config::validate` refuses it before the
    /// loop ever starts.
    pub fn normalize(&self, raw: RawCount) -> Percent {
        let range = self.high as i32 - self.low as i32;
        if range == 0 {
            return 0;
        }
        // |raw - low| * FULL_SCALE stays below i32::MAX for any u16 input
        let percent = (raw as i32 - self.low as i32) * FULL_SCALE as i32 / range;
        percent.clamp(0, FULL_SCALE as i32) as Percent
    }

    fn contains(&self, raw: RawCount) -> bool {
        let (min, max) = if self.low <= self.high {
            (self.low, self.high)
        } else {
            (self.high, self.low)
        };
        (min..=max).contains(&raw)
    }
}

/// Extremes seen on a knob since boot, used to pick calibration bounds.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct ObservedRange {
    pub min: RawCount,
    pub max: RawCount,
}

impl ObservedRange {
    fn new(raw: RawCount) -> Self {
        Self { min: raw, max: raw }
    }

    /// Returns true when `raw` widened the range.
    fn include(&mut self, raw: RawCount) -> bool {
        if raw < self.min {
            self.min = raw;
            true
        } else if raw > self.max {
            self.max = raw;
            true
        } else {
            false
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Knob {
    index: KnobIndex,
    calibration: Calibration,
    raw: RawCount,
    percent: Percent,
    observed: Option<ObservedRange>,
}

impl Knob {
    pub const fn new(index: KnobIndex, calibration: Calibration) -> Self {
        Self {
            index,
            calibration,
            raw: 0,
            percent: 0,
            observed: None,
        }
    }

    pub fn update(&mut self, raw: RawCount) {
        self.raw = raw;
        self.percent = self.calibration.normalize(raw);

        let widened = match self.observed.as_mut() {
            Some(observed) => observed.include(raw),
            None => {
                self.observed = Some(ObservedRange::new(raw));
                true
            }
        };
        if widened && !self.calibration.contains(raw) {
            log::info!(
                "Knob {} reached {} adc, outside calibration {}..{}",
                self.index,
                raw,
                self.calibration.low,
                self.calibration.high
            );
        }
    }

    pub fn index(&self) -> KnobIndex {
        self.index
    }

    pub fn raw(&self) -> RawCount {
        self.raw
    }

    pub fn percent(&self) -> Percent {
        self.percent
    }

    pub fn observed(&self) -> Option<ObservedRange> {
        self.observed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CALIBRATION: Calibration = Calibration::new(30, 4060);

    #[test]
    fn normalize_bounds() {
        struct TestCase {
            raw: RawCount,
            percent: Percent,
        }
        let test_cases = [
            TestCase { raw: 30, percent: 0 },
            TestCase {
                raw: 4060,
                percent: FULL_SCALE,
            },
            TestCase {
                raw: 2045,
                percent: 16384,
            },
            TestCase { raw: 0, percent: 0 },
            TestCase { raw: 29, percent: 0 },
            TestCase {
                raw: 4061,
                percent: FULL_SCALE,
            },
            TestCase {
                raw: 4095,
                percent: FULL_SCALE,
            },
            TestCase {
                raw: u16::MAX,
                percent: FULL_SCALE,
            },
        ];
        for i in &test_cases {
            assert_eq!(CALIBRATION.normalize(i.raw), i.percent, "raw {}", i.raw);
        }
    }

    #[test]
    fn normalize_is_monotonic_inside_calibration() {
        let mut last = 0;
        for raw in CALIBRATION.low..=CALIBRATION.high {
            let percent = CALIBRATION.normalize(raw);
            assert!(percent >= last, "raw {} went backwards", raw);
            assert!(percent <= FULL_SCALE);
            last = percent;
        }
        assert_eq!(last, FULL_SCALE);
    }

    #[test]
    fn normalize_reversed_bounds_inverts() {
        let reversed = Calibration::new(4060, 30);
        assert!(reversed.is_valid());
        assert_eq!(reversed.normalize(4060), 0);
        assert_eq!(reversed.normalize(30), FULL_SCALE);
        assert_eq!(reversed.normalize(4095), 0);
        assert_eq!(reversed.normalize(0), FULL_SCALE);
    }

    #[test]
    fn normalize_empty_range_is_zero() {
        let empty = Calibration::new(100, 100);
        assert!(!empty.is_valid());
        assert_eq!(empty.normalize(0), 0);
        assert_eq!(empty.normalize(100), 0);
        assert_eq!(empty.normalize(4095), 0);
    }

    #[test]
    fn update_tracks_observed_range() {
        let mut knob = Knob::new(1, CALIBRATION);
        assert_eq!(knob.observed(), None);

        knob.update(2000);
        assert_eq!(knob.raw(), 2000);
        assert_eq!(knob.observed(), Some(ObservedRange { min: 2000, max: 2000 }));

        knob.update(10);
        knob.update(4090);
        knob.update(1500);
        assert_eq!(knob.raw(), 1500);
        assert_eq!(knob.percent(), CALIBRATION.normalize(1500));
        assert_eq!(knob.observed(), Some(ObservedRange { min: 10, max: 4090 }));
    }
}
