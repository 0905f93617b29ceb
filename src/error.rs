use crate::types::KnobIndex;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    InvalidCalibration { knob: KnobIndex },
    InvalidFrameId(u16),
    Frame,
    Can(String),
    Adc(String),
    Pin(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidCalibration { knob } => {
                write!(f, "Knob {} has an empty calibration range", knob)
            }
            Error::InvalidFrameId(id) => write!(f, "Invalid standard CAN id: {:#05x}", id),
            Error::Frame => write!(f, "Payload does not fit in a CAN frame"),
            Error::Can(e) => write!(f, "CAN error: {}", e),
            Error::Adc(e) => write!(f, "ADC error: {}", e),
            Error::Pin(e) => write!(f, "GPIO error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl embedded_can::Error for Error {
    fn kind(&self) -> embedded_can::ErrorKind {
        embedded_can::ErrorKind::Other
    }
}
