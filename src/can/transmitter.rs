use crate::error::Error;
use crate::knob::Knob;
use crate::types::percent_to_byte;
use embedded_can::{nb::Can, Frame, StandardId};

/// One byte per knob, 0..=255 for 0..=100%.
pub fn knob_payload<const N: usize>(knobs: &[Knob; N]) -> [u8; N] {
    core::array::from_fn(|i| percent_to_byte(knobs[i].percent()))
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TransmitStatus {
    Queued,
    /// The controller had no room, the frame was dropped.
    Busy,
    Failed,
}

/// Sends the knob positions as a single standard-id frame.
///
/// Transmission is fire and forget: a frame that the interface can't take
/// right now is dropped and the next interval sends fresh values.
pub struct KnobTransmitter {
    id: StandardId,
    queued: u32,
    dropped: u32,
}

impl KnobTransmitter {
    pub fn new(frame_id: u16) -> Result<Self, Error> {
        let id = StandardId::new(frame_id).ok_or(Error::InvalidFrameId(frame_id))?;
        Ok(Self {
            id,
            queued: 0,
            dropped: 0,
        })
    }

    pub fn build_frame<F: Frame, const N: usize>(&self, knobs: &[Knob; N]) -> Result<F, Error> {
        F::new(self.id, &knob_payload(knobs)).ok_or(Error::Frame)
    }

    pub fn transmit<C: Can, const N: usize>(
        &mut self,
        can: &mut C,
        knobs: &[Knob; N],
    ) -> TransmitStatus {
        let frame: C::Frame = match self.build_frame(knobs) {
            Ok(frame) => frame,
            Err(e) => {
                log::error!("{}", e);
                return self.drop_frame(TransmitStatus::Failed);
            }
        };

        match can.transmit(&frame) {
            Ok(displaced) => {
                if displaced.is_some() {
                    log::debug!("Lower priority frame displaced from the TX queue");
                }
                self.queued = self.queued.wrapping_add(1);
                log::trace!("Queued knob frame {:02x?}", frame.data());
                TransmitStatus::Queued
            }
            Err(nb::Error::WouldBlock) => {
                log::debug!("CAN controller busy, knob frame dropped");
                self.drop_frame(TransmitStatus::Busy)
            }
            Err(nb::Error::Other(e)) => {
                log::warn!("Failed to transmit knob frame: {:?}", e);
                self.drop_frame(TransmitStatus::Failed)
            }
        }
    }

    fn drop_frame(&mut self, status: TransmitStatus) -> TransmitStatus {
        self.dropped = self.dropped.wrapping_add(1);
        status
    }

    pub fn queued(&self) -> u32 {
        self.queued
    }

    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}
