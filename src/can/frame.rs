use embedded_can::{Frame, Id};

/// A CAN data or remote frame, for interfaces that don't bring their own.
#[derive(Clone, Debug, PartialEq)]
pub struct CanFrame {
    id: Id,
    remote: bool,
    dlc: usize,
    data: [u8; 8],
}

impl Frame for CanFrame {
    fn new(id: impl Into<Id>, data: &[u8]) -> Option<Self> {
        if data.len() > 8 {
            return None;
        }
        let mut frame = Self {
            id: id.into(),
            remote: false,
            dlc: data.len(),
            data: [0; 8],
        };
        frame.data[0..data.len()].copy_from_slice(data);
        Some(frame)
    }

    fn new_remote(id: impl Into<Id>, dlc: usize) -> Option<Self> {
        if dlc > 8 {
            return None;
        }
        Some(Self {
            id: id.into(),
            remote: true,
            dlc,
            data: [0; 8],
        })
    }

    fn is_extended(&self) -> bool {
        matches!(self.id, Id::Extended(_))
    }

    fn is_remote_frame(&self) -> bool {
        self.remote
    }

    fn id(&self) -> Id {
        self.id
    }

    fn dlc(&self) -> usize {
        self.dlc
    }

    /// Returns the frame data (0..8 bytes in length), empty for remote frames.
    fn data(&self) -> &[u8] {
        if self.remote {
            &[]
        } else {
            &self.data[0..self.dlc]
        }
    }
}
