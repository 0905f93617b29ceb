mod frame;
pub use frame::CanFrame;

mod transmitter;
pub use transmitter::{knob_payload, KnobTransmitter, TransmitStatus};
