use crate::can::KnobTransmitter;
use crate::config::{Config, KNOB_COUNT};
use crate::error::Error;
use crate::knob::Knob;
use crate::printer::Printer;
use crate::sensors::{sampler::KnobBank, traits::KnobInput};
use crate::ticker::{Clock, Ticker};
use embedded_can::nb::Can;
use std::io::Write;

/// The sample, print and transmit loop.
pub struct App<I, C, W, K>
where
    I: KnobInput,
    C: Can,
    W: Write,
    K: Clock,
{
    knobs: KnobBank<I, KNOB_COUNT>,
    printer: Printer<W>,
    print_ticker: Ticker,
    transmitter: KnobTransmitter,
    transmit_ticker: Ticker,
    can: C,
    clock: K,
}

impl<I, C, W, K> App<I, C, W, K>
where
    I: KnobInput,
    C: Can,
    W: Write,
    K: Clock,
{
    pub fn new(
        config: &Config,
        inputs: [I; KNOB_COUNT],
        can: C,
        console: W,
        clock: K,
    ) -> Result<Self, Error> {
        config.validate()?;

        Ok(App {
            knobs: KnobBank::new(inputs, config.knobs.calibration),
            printer: Printer::new(console, config.console.format),
            print_ticker: Ticker::new(config.console.print_interval),
            transmitter: KnobTransmitter::new(config.can.frame_id)?,
            transmit_ticker: Ticker::new(config.can.transmit_interval),
            can,
            clock,
        })
    }

    /// One pass of the loop. Never fails, problems are logged and the next
    /// pass carries on.
    pub fn step(&mut self) {
        self.knobs.sample();
        let now = self.clock.now();

        let Self {
            knobs,
            printer,
            print_ticker,
            transmitter,
            transmit_ticker,
            can,
            ..
        } = self;

        print_ticker.every(now, || {
            if let Err(e) = printer.print(knobs.knobs()) {
                log::warn!("Failed to write knob report: {}", e);
            }
        });

        transmit_ticker.every(now, || {
            transmitter.transmit(can, knobs.knobs());
        });
    }

    pub fn run(&mut self, mut pause: impl FnMut()) -> ! {
        log::info!("Knob loop running");
        loop {
            self.step();
            pause();
        }
    }

    pub fn knobs(&self) -> &[Knob; KNOB_COUNT] {
        self.knobs.knobs()
    }

    pub fn transmitter(&self) -> &KnobTransmitter {
        &self.transmitter
    }

    pub fn can(&self) -> &C {
        &self.can
    }

    pub fn into_parts(self) -> (C, W) {
        (self.can, self.printer.into_inner())
    }
}
