use crate::error::Error;
use crate::knob::Calibration;
use crate::printer::ConsoleFormat;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub knobs: Knobs,
    pub can: Can,
    pub console: Console,
}

/// Run the program and adjust the low and high values until each knob
/// reads 0% and 100% at its end stops. If the values come out reversed,
/// swap the power and ground wires or swap low and high.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Knobs {
    pub calibration: [Calibration; KNOB_COUNT],
}
pub const KNOB_COUNT: usize = 3;
// 3.3V = 4096
pub const KNOB_CALIBRATION: [Calibration; KNOB_COUNT] = [
    Calibration::new(30, 4060),
    Calibration::new(30, 4060),
    Calibration::new(30, 4060),
];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Can {
    pub frame_id: u16,
    pub transmit_interval: Duration,
    pub bitrate_kbps: u32,
}
pub const KNOB_FRAME_ID: u16 = 0x110;
pub const TRANSMIT_INTERVAL: Duration = Duration::from_millis(100);
pub const CAN_BITRATE_KBPS: u32 = 500;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Console {
    pub format: ConsoleFormat,
    pub print_interval: Duration,
}
pub const CONSOLE_FORMAT: ConsoleFormat = ConsoleFormat::Text;
pub const PRINT_INTERVAL: Duration = Duration::from_millis(200);

pub const LOOP_DELAY: Duration = Duration::from_millis(1);

impl Default for Config {
    fn default() -> Self {
        Config {
            knobs: Knobs {
                calibration: KNOB_CALIBRATION,
            },
            can: Can {
                frame_id: KNOB_FRAME_ID,
                transmit_interval: TRANSMIT_INTERVAL,
                bitrate_kbps: CAN_BITRATE_KBPS,
            },
            console: Console {
                format: CONSOLE_FORMAT,
                print_interval: PRINT_INTERVAL,
            },
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), Error> {
        if let Some(knob) = self
            .knobs
            .calibration
            .iter()
            .position(|calibration| !calibration.is_valid())
        {
            return Err(Error::InvalidCalibration { knob });
        }
        if self.can.frame_id > embedded_can::StandardId::MAX.as_raw() {
            return Err(Error::InvalidFrameId(self.can.frame_id));
        }
        Ok(())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.can.frame_id, 0x110);
        assert_eq!(config.can.transmit_interval, Duration::from_millis(100));
        assert_eq!(config.console.print_interval, Duration::from_millis(200));
        assert_eq!(config.knobs.calibration[2], Calibration::new(30, 4060));
    }

    #[test]
    fn validate_rejects_empty_calibration() {
        let mut config = Config::default();
        config.knobs.calibration[1] = Calibration::new(2000, 2000);
        assert_eq!(
            config.validate(),
            Err(Error::InvalidCalibration { knob: 1 })
        );
    }

    #[test]
    fn validate_rejects_extended_frame_id() {
        let mut config = Config::default();
        config.can.frame_id = 0x1000;
        assert_eq!(config.validate(), Err(Error::InvalidFrameId(0x1000)));
    }

    #[test]
    fn json_error_propagates_into_anyhow() -> anyhow::Result<()> {
        let json = Config::default().to_json()?;
        assert!(json.starts_with('{'));
        Ok(())
    }

    #[test]
    fn json_round_trip() {
        let config = Config::default();
        let json = config.to_json().unwrap();
        assert!(json.contains("\"frame_id\":272"));
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
