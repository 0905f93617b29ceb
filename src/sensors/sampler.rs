use crate::knob::{Calibration, Knob};
use crate::sensors::traits::KnobInput;
use crate::types::Percent;

/// Fixed set of knob inputs and the state computed from them.
pub struct KnobBank<I: KnobInput, const N: usize> {
    inputs: [I; N],
    knobs: [Knob; N],
}

impl<I: KnobInput, const N: usize> KnobBank<I, N> {
    pub fn new(inputs: [I; N], calibration: [Calibration; N]) -> Self {
        Self {
            inputs,
            knobs: core::array::from_fn(|i| Knob::new(i, calibration[i])),
        }
    }

    /// Read every input and renormalize. A failed read leaves the knob at
    /// its previous sample.
    pub fn sample(&mut self) {
        for (input, knob) in self.inputs.iter_mut().zip(self.knobs.iter_mut()) {
            match input.read_raw() {
                Ok(raw) => knob.update(raw),
                Err(e) => log::warn!("Failed to read knob {}: {}", knob.index(), e),
            }
        }
    }

    pub fn knobs(&self) -> &[Knob; N] {
        &self.knobs
    }

    pub fn percentages(&self) -> [Percent; N] {
        core::array::from_fn(|i| self.knobs[i].percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::{RawCount, FULL_SCALE};
    use std::collections::VecDeque;

    struct MockKnob {
        readings: VecDeque<Result<RawCount, Error>>,
    }

    impl MockKnob {
        fn new(readings: &[Result<RawCount, Error>]) -> Self {
            Self {
                readings: readings.iter().cloned().collect(),
            }
        }
    }

    impl KnobInput for MockKnob {
        fn read_raw(&mut self) -> Result<RawCount, Error> {
            self.readings
                .pop_front()
                .unwrap_or(Err(Error::Adc("no more readings".to_string())))
        }
    }

    const CALIBRATION: [Calibration; 3] = [Calibration::new(30, 4060); 3];

    #[test]
    fn sample_normalizes_every_knob() {
        let mut bank = KnobBank::new(
            [
                MockKnob::new(&[Ok(30)]),
                MockKnob::new(&[Ok(4060)]),
                MockKnob::new(&[Ok(2045)]),
            ],
            CALIBRATION,
        );
        bank.sample();

        assert_eq!(bank.percentages(), [0, FULL_SCALE, 16384]);
        let raws: Vec<RawCount> = bank.knobs().iter().map(|k| k.raw()).collect();
        assert_eq!(raws, vec![30, 4060, 2045]);
        for (i, knob) in bank.knobs().iter().enumerate() {
            assert_eq!(knob.index(), i);
        }
    }

    #[test]
    fn failed_read_keeps_previous_sample() {
        let mut bank = KnobBank::new(
            [
                MockKnob::new(&[Ok(1000), Err(Error::Adc("timeout".to_string())), Ok(3000)]),
                MockKnob::new(&[Ok(100), Ok(200), Ok(300)]),
                MockKnob::new(&[Ok(5), Ok(5), Ok(5)]),
            ],
            CALIBRATION,
        );

        bank.sample();
        bank.sample();
        assert_eq!(bank.knobs()[0].raw(), 1000);
        assert_eq!(bank.knobs()[1].raw(), 200);

        bank.sample();
        assert_eq!(bank.knobs()[0].raw(), 3000);
        assert_eq!(bank.knobs()[1].raw(), 300);
        assert_eq!(bank.knobs()[2].percent(), 0);
    }

    #[test]
    fn boxed_inputs_can_be_mixed() {
        let inputs: [Box<dyn KnobInput>; 2] = [
            Box::new(MockKnob::new(&[Ok(4060)])),
            Box::new(MockKnob::new(&[Ok(30)])),
        ];
        let mut bank = KnobBank::new(inputs, [Calibration::new(30, 4060); 2]);
        bank.sample();
        assert_eq!(bank.percentages(), [FULL_SCALE, 0]);
    }
}
