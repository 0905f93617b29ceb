use crate::can::CanFrame;
use crate::error::Error;
use crate::sensors::traits::KnobInput;
use crate::types::RawCount;
use embedded_can::{nb::Can, Frame};

const ADC_TOP: RawCount = 4095;

/// A knob being swept end stop to end stop, one step per read.
pub struct SimulatedKnob {
    position: i32,
    step: i32,
    #[cfg(feature = "simulate")]
    noise: rand_distr::Normal<f32>,
}

impl SimulatedKnob {
    pub fn new(start: RawCount, step: i32) -> Self {
        Self {
            position: start.min(ADC_TOP) as i32,
            step,
            #[cfg(feature = "simulate")]
            noise: rand_distr::Normal::new(0.0, 8.0).expect("valid standard deviation"),
        }
    }

    fn advance(&mut self) {
        self.position += self.step;
        if self.position <= 0 || self.position >= ADC_TOP as i32 {
            self.step = -self.step;
            self.position = self.position.clamp(0, ADC_TOP as i32);
        }
    }

    #[cfg(feature = "simulate")]
    fn jitter(&self, raw: i32) -> i32 {
        use rand::prelude::*;
        raw + self.noise.sample(&mut thread_rng()) as i32
    }

    #[cfg(not(feature = "simulate"))]
    fn jitter(&self, raw: i32) -> i32 {
        raw
    }
}

impl KnobInput for SimulatedKnob {
    fn read_raw(&mut self) -> Result<RawCount, Error> {
        self.advance();
        Ok(self.jitter(self.position).clamp(0, ADC_TOP as i32) as RawCount)
    }
}

/// Stands in for the TWAI controller, every frame goes to the log.
#[derive(Default)]
pub struct LoggingBus {
    sent: usize,
}

impl LoggingBus {
    pub fn sent(&self) -> usize {
        self.sent
    }
}

impl Can for LoggingBus {
    type Frame = CanFrame;
    type Error = Error;

    fn transmit(&mut self, frame: &CanFrame) -> nb::Result<Option<CanFrame>, Error> {
        self.sent += 1;
        log::debug!("TX {:?} [{}] {:02x?}", frame.id(), frame.dlc(), frame.data());
        Ok(None)
    }

    fn receive(&mut self) -> nb::Result<CanFrame, Error> {
        Err(nb::Error::WouldBlock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knob_sweeps_between_end_stops() {
        let mut knob = SimulatedKnob::new(4000, 100);
        let readings: Vec<RawCount> = (0..100).map(|_| knob.read_raw().unwrap()).collect();
        assert!(readings.iter().all(|raw| *raw <= ADC_TOP));
        assert!(readings.iter().any(|raw| *raw < 500));
        assert!(readings.iter().any(|raw| *raw > 3500));
    }

    #[test]
    fn bus_counts_frames() {
        let mut bus = LoggingBus::default();
        let id = embedded_can::StandardId::new(0x110).unwrap();
        let frame = CanFrame::new(id, &[1, 2, 3]).unwrap();
        bus.transmit(&frame).unwrap();
        bus.transmit(&frame).unwrap();
        assert_eq!(bus.sent(), 2);
        assert!(matches!(bus.receive(), Err(nb::Error::WouldBlock)));
    }
}
