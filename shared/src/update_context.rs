use framesync_serde::{ByteReader, ByteWrite, ConstByteLength, Serde, SerdeErr};

use crate::types::FrameNumber;

/// Per-frame scalar state shared by every node in the cluster.
///
/// Produced once per frame on the master, consumed once per frame on each
/// slave before any object payload is applied.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UpdateContext {
    pub frame_num: FrameNumber,
    /// Seconds elapsed since the previous frame
    pub dt: f64,
    /// Seconds elapsed since the first frame
    pub time: f64,
}

impl UpdateContext {
    pub fn new(frame_num: FrameNumber, dt: f64, time: f64) -> Self {
        Self {
            frame_num,
            dt,
            time,
        }
    }

    /// Context for the frame following this one.
    pub fn next(&self, dt: f64) -> Self {
        Self {
            frame_num: self.frame_num.wrapping_add(1),
            dt,
            time: self.time + dt,
        }
    }
}

impl Serde for UpdateContext {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        self.frame_num.ser(writer);
        self.dt.ser(writer);
        self.time.ser(writer);
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let frame_num = FrameNumber::de(reader)?;
        let dt = f64::de(reader)?;
        let time = f64::de(reader)?;
        Ok(Self {
            frame_num,
            dt,
            time,
        })
    }

    fn byte_length(&self) -> usize {
        Self::const_byte_length()
    }
}

impl ConstByteLength for UpdateContext {
    fn const_byte_length() -> usize {
        FrameNumber::const_byte_length() + f64::const_byte_length() * 2
    }
}
