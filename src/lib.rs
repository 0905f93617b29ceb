//! Reads potentiometer knobs, scales them to 0..=100% and broadcasts them
//! on the CAN bus, with a periodic report on the console.

pub mod app;
#[cfg(target_os = "espidf")]
pub mod board;
pub mod can;
pub mod config;
pub mod error;
pub mod gpio;
pub mod knob;
pub mod printer;
pub mod sensors;
#[cfg(not(target_os = "espidf"))]
pub mod simulator;
pub mod ticker;
pub mod types;
