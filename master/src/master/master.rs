use log::{error, info, warn};

use framesync_shared::{
    ByteWriter, FrameReport, FrameSender, NodeRole, RegistryHandle, SharedData, TransportError,
    UpdateContext,
};

use crate::{MasterConfig, MasterError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ExitState {
    Running,
    // one more frame goes out so objects can dispose on every node
    FinalFramePending,
    Finished,
}

/// Master-side frame driver.
///
/// Owns the master's `SharedData` context and the sending end of the frame
/// transport. Call `tick` once per frame from the thread that owns the
/// registry.
pub struct Master<S: FrameSender> {
    shared: SharedData,
    sender: S,
    next_context: UpdateContext,
    last_context: Option<UpdateContext>,
    exit_state: ExitState,
}

impl<S: FrameSender> Master<S> {
    pub fn new(config: MasterConfig, sender: S) -> Result<Self, MasterError> {
        let shared = SharedData::new(NodeRole::Master, config.sync)?;
        Ok(Self {
            shared,
            sender,
            next_context: UpdateContext::new(config.first_frame, 0.0, config.start_time),
            last_context: None,
            exit_state: ExitState::Running,
        })
    }

    pub fn registry(&self) -> RegistryHandle {
        self.shared.registry()
    }

    pub fn shared_data(&self) -> &SharedData {
        &self.shared
    }

    pub fn sender(&self) -> &S {
        &self.sender
    }

    pub fn sender_mut(&mut self) -> &mut S {
        &mut self.sender
    }

    /// Context of the most recent frame sent, if any.
    pub fn last_context(&self) -> Option<&UpdateContext> {
        self.last_context.as_ref()
    }

    /// Advances the frame clock by `dt` seconds and sends the frame.
    pub fn tick(&mut self, dt: f64) -> Result<FrameReport, MasterError> {
        let context = match self.last_context {
            Some(last) => last.next(dt),
            None => UpdateContext {
                dt,
                ..self.next_context
            },
        };
        self.send_frame(context)
    }

    /// Serializes and sends one frame using an explicit update context.
    pub fn send_frame(&mut self, context: UpdateContext) -> Result<FrameReport, MasterError> {
        if self.exit_state == ExitState::Finished {
            return Err(MasterError::Finished {
                frame_num: self.last_context.map(|c| c.frame_num).unwrap_or_default(),
            });
        }

        // checked before anything is serialized so no pending removal is swept
        // for a frame that never leaves this node
        if !self.sender.is_available() {
            error!(
                "Master: transport unavailable, frame {} not sent",
                context.frame_num
            );
            return Err(TransportError::Unavailable.into());
        }

        self.shared.set_update_context(context);
        let mut writer = ByteWriter::new();
        let mut report = self.shared.serialize_frame(&mut writer)?;

        // pending removals stay until the frame carrying their last commit is out
        self.sender.send(writer.as_bytes())?;
        report.swept = self.shared.sweep_pending_removals();
        self.last_context = Some(context);

        if self.exit_state == ExitState::FinalFramePending {
            info!("Master: final frame {} sent", context.frame_num);
            self.exit_state = ExitState::Finished;
        }

        Ok(report)
    }

    /// Requests shutdown. Exactly one more frame is sent before the master
    /// reports itself finished.
    pub fn request_exit(&mut self) {
        match self.exit_state {
            ExitState::Running => {
                info!("Master: exit requested");
                self.exit_state = ExitState::FinalFramePending;
            }
            _ => warn!("Master: exit already requested"),
        }
    }

    pub fn is_exit_requested(&self) -> bool {
        self.exit_state != ExitState::Running
    }

    pub fn is_finished(&self) -> bool {
        self.exit_state == ExitState::Finished
    }

    /// Tears down the shared state context.
    pub fn cleanup(&mut self) {
        self.shared.cleanup();
    }
}
