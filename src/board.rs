use crate::config::{self, Config, KNOB_COUNT};
use crate::gpio::supply::KnobSupply;
use crate::sensors::{adc::AdcKnob, traits::KnobInput};
use anyhow::{anyhow, Result};
use esp_idf_hal::{
    adc::oneshot::AdcDriver,
    can::{self, CanDriver},
    gpio::{Gpio7, Gpio8, Output, PinDriver},
    prelude::Peripherals,
};
use std::rc::Rc;

pub type KnobInputs = [Box<dyn KnobInput>; KNOB_COUNT];
pub type Supply = KnobSupply<PinDriver<'static, Gpio7, Output>, PinDriver<'static, Gpio8, Output>>;

/// Knob wiring on the ESP32-S3:
///
/// | signal      | pin    |
/// |-------------|--------|
/// | knob 0..2   | GPIO4, GPIO5, GPIO6 (ADC1) |
/// | pot power   | GPIO7  |
/// | pot ground  | GPIO8  |
/// | TWAI TX/RX  | GPIO17 / GPIO18 |
pub struct Board {
    pub knobs: KnobInputs,
    pub can: CanDriver<'static>,
    pub supply: Supply,
}

impl Board {
    pub fn new(config: &Config) -> Result<Self> {
        let peripherals = Peripherals::take()?;

        log::info!("Setting up knob supply");
        let supply = KnobSupply::new(
            PinDriver::output(peripherals.pins.gpio7)?,
            PinDriver::output(peripherals.pins.gpio8)?,
        )?;

        log::info!("Setting up ADCs");
        let adc = Rc::new(AdcDriver::new(peripherals.adc1)?);
        let knobs: KnobInputs = [
            Box::new(AdcKnob::new(adc.clone(), peripherals.pins.gpio4)?),
            Box::new(AdcKnob::new(adc.clone(), peripherals.pins.gpio5)?),
            Box::new(AdcKnob::new(adc, peripherals.pins.gpio6)?),
        ];

        log::info!("Setting up CAN at {} kbit/s", config.can.bitrate_kbps);
        let timing = match config.can.bitrate_kbps {
            125 => can::config::Timing::B125K,
            250 => can::config::Timing::B250K,
            500 => can::config::Timing::B500K,
            1000 => can::config::Timing::B1M,
            other => return Err(anyhow!("Unsupported CAN bitrate: {} kbit/s", other)),
        };
        let can_config = can::config::Config::new().timing(timing);
        let mut can = CanDriver::new(
            peripherals.can,
            peripherals.pins.gpio17,
            peripherals.pins.gpio18,
            &can_config,
        )?;
        can.start()?;

        log::info!("Board setup complete");
        Ok(Board {
            knobs,
            can,
            supply,
        })
    }
}

pub fn pause() {
    esp_idf_hal::delay::FreeRtos::delay_ms(config::LOOP_DELAY.as_millis() as u32);
}
