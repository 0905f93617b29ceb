use crate::error::Error;
use embedded_hal::digital::{Error as _, OutputPin};

/// Power and ground rails of the knob potentiometers, driven from two GPIOs.
///
/// The pins stay owned here for as long as the knobs are in use, dropping
/// the supply releases them.
pub struct KnobSupply<P: OutputPin, G: OutputPin> {
    power: P,
    ground: G,
}

impl<P, G> KnobSupply<P, G>
where
    P: OutputPin,
    G: OutputPin,
{
    pub fn new(mut power: P, mut ground: G) -> Result<Self, Error> {
        power
            .set_high()
            .map_err(|e| Error::Pin(format!("power pin: {:?}", e.kind())))?;
        ground
            .set_low()
            .map_err(|e| Error::Pin(format!("ground pin: {:?}", e.kind())))?;
        log::info!("Knob supply enabled");
        Ok(Self { power, ground })
    }

    pub fn release(self) -> (P, G) {
        (self.power, self.ground)
    }
}
