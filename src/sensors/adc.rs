use crate::error::Error;
use crate::sensors::traits::KnobInput;
use crate::types::RawCount;
use core::borrow::Borrow;
use esp_idf_hal::{
    adc::{
        attenuation,
        oneshot::{config::AdcChannelConfig, AdcChannelDriver, AdcDriver},
    },
    gpio::ADCPin,
    peripheral::Peripheral,
};
use esp_idf_sys::EspError;

/// A potentiometer wiper on one oneshot ADC channel.
pub struct AdcKnob<'a, T: ADCPin, M: Borrow<AdcDriver<'a, T::Adc>>> {
    channel: AdcChannelDriver<'a, T, M>,
}

impl<'a, T, M> AdcKnob<'a, T, M>
where
    T: ADCPin,
    M: Borrow<AdcDriver<'a, T::Adc>>,
{
    pub fn new(adc: M, pin: impl Peripheral<P = T> + 'a) -> Result<Self, EspError> {
        // full 0..3.3V swing of the pot, raw counts so no calibration curve
        let config = AdcChannelConfig {
            attenuation: attenuation::DB_11,
            calibration: false,
            ..Default::default()
        };
        Ok(Self {
            channel: AdcChannelDriver::new(adc, pin, &config)?,
        })
    }
}

impl<'a, T, M> KnobInput for AdcKnob<'a, T, M>
where
    T: ADCPin,
    M: Borrow<AdcDriver<'a, T::Adc>>,
{
    fn read_raw(&mut self) -> Result<RawCount, Error> {
        self.channel
            .read_raw()
            .map_err(|e| Error::Adc(e.to_string()))
    }
}
