use log::{error, trace};

use framesync_shared::{
    ByteReader, FrameReceiver, FrameReport, NodeRole, RegistryHandle, Serde, SharedData,
    UpdateContext,
};

use crate::{SlaveConfig, SlaveError};

/// Slave-side frame driver.
///
/// Owns the slave's `SharedData` context and the receiving end of the frame
/// transport. Each call to `receive_frame` applies at most one message.
pub struct Slave<R: FrameReceiver> {
    shared: SharedData,
    receiver: R,
    require_increasing_frames: bool,
    last_frame: Option<u64>,
}

impl<R: FrameReceiver> Slave<R> {
    pub fn new(config: SlaveConfig, receiver: R) -> Result<Self, SlaveError> {
        let shared = SharedData::new(NodeRole::Slave, config.sync)?;
        Ok(Self {
            shared,
            receiver,
            require_increasing_frames: config.require_increasing_frames,
            last_frame: None,
        })
    }

    pub fn registry(&self) -> RegistryHandle {
        self.shared.registry()
    }

    pub fn shared_data(&self) -> &SharedData {
        &self.shared
    }

    pub fn receiver(&self) -> &R {
        &self.receiver
    }

    pub fn receiver_mut(&mut self) -> &mut R {
        &mut self.receiver
    }

    /// Context decoded from the most recently applied frame.
    pub fn update_context(&self) -> &UpdateContext {
        self.shared.update_context()
    }

    pub fn last_frame(&self) -> Option<u64> {
        self.last_frame
    }

    /// Pulls the next message from the transport and applies it.
    ///
    /// Returns `Ok(None)` when no message is waiting.
    pub fn receive_frame(&mut self) -> Result<Option<FrameReport>, SlaveError> {
        let Some(payload) = self.receiver.receive()? else {
            return Ok(None);
        };
        self.apply_frame(&payload).map(Some)
    }

    /// Applies one complete frame message.
    pub fn apply_frame(&mut self, payload: &[u8]) -> Result<FrameReport, SlaveError> {
        if self.require_increasing_frames {
            self.check_frame_order(payload)?;
        }

        let mut reader = ByteReader::new(payload);
        let report = self.shared.apply_instance_data(&mut reader)?;

        trace!(
            "Slave: applied frame {} ({} objects, {} bytes)",
            report.context.frame_num,
            report.objects,
            report.bytes
        );
        self.last_frame = Some(report.context.frame_num);
        Ok(report)
    }

    // peeks the header so no object is touched by a stale message
    fn check_frame_order(&self, payload: &[u8]) -> Result<(), SlaveError> {
        let Some(last) = self.last_frame else {
            return Ok(());
        };
        let Ok(context) = UpdateContext::de(&mut ByteReader::new(payload)) else {
            // a truncated header is reported by the apply pass itself
            return Ok(());
        };
        if context.frame_num <= last {
            error!(
                "Slave: frame {} received after frame {}",
                context.frame_num, last
            );
            return Err(SlaveError::FrameOutOfOrder {
                last,
                received: context.frame_num,
            });
        }
        Ok(())
    }

    /// Tears down the shared state context.
    pub fn cleanup(&mut self) {
        self.shared.cleanup();
        self.last_frame = None;
    }
}
