use log::{debug, info};

use framesync_serde::{ByteReader, ByteWriter};

use crate::{
    frame::{
        frame_reader::FrameReader, frame_report::FrameReport, frame_state::FrameState,
        frame_writer::FrameWriter, sync_config::SyncConfig,
    },
    ConfigError, NodeRole, RegistryHandle, SharedStateError, UpdateContext,
};

/// Replicated shared-state context for one node.
///
/// Created once at subsystem initialization and handed to every frame-driver
/// call. Owns the node's registry and the current update context.
pub struct SharedData {
    role: NodeRole,
    config: SyncConfig,
    registry: RegistryHandle,
    update_context: UpdateContext,
    state: FrameState,
}

impl SharedData {
    pub fn new(role: NodeRole, config: SyncConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        info!(
            "SharedData: initializing {} context with {:?} payloads",
            role.as_str(),
            config.framing
        );
        Ok(Self {
            role,
            config,
            registry: RegistryHandle::new(),
            update_context: UpdateContext::default(),
            state: FrameState::Idle,
        })
    }

    pub fn role(&self) -> NodeRole {
        self.role
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Handle through which collaborators register their objects.
    pub fn registry(&self) -> RegistryHandle {
        self.registry.clone()
    }

    pub fn update_context(&self) -> &UpdateContext {
        &self.update_context
    }

    /// Sets the context the next `get_instance_data` will serialize.
    pub fn set_update_context(&mut self, context: UpdateContext) {
        self.update_context = context;
    }

    pub fn state(&self) -> FrameState {
        self.state
    }

    /// Serializes the current context and every registered object, then sweeps
    /// pending removals.
    pub fn get_instance_data(
        &mut self,
        writer: &mut ByteWriter,
    ) -> Result<FrameReport, SharedStateError> {
        let mut report = self.serialize_frame(writer)?;
        report.swept = self.sweep_pending_removals();
        Ok(report)
    }

    /// Serializes one frame without sweeping.
    ///
    /// Callers that hand the message to a transport sweep with
    /// `sweep_pending_removals` once the message has been accepted, so a frame
    /// that never leaves this node keeps its pending removals.
    pub fn serialize_frame(
        &mut self,
        writer: &mut ByteWriter,
    ) -> Result<FrameReport, SharedStateError> {
        self.state.begin()?;
        let result = self.write_frame(writer);
        self.state.end();
        result
    }

    /// Erases every entry unregistered since the last sweep. Returns how many.
    pub fn sweep_pending_removals(&mut self) -> usize {
        self.registry.sweep_pending_removals()
    }

    /// Decodes one frame message into the local objects, then sweeps pending
    /// removals.
    pub fn apply_instance_data(
        &mut self,
        reader: &mut ByteReader,
    ) -> Result<FrameReport, SharedStateError> {
        self.state.begin()?;
        let result = self.read_frame(reader);
        self.state.end();
        result
    }

    /// Drops every registration. Called at subsystem shutdown.
    pub fn cleanup(&mut self) {
        debug!("SharedData: cleanup, dropping {} registrations", self.registry.len());
        self.registry.clear();
        self.update_context = UpdateContext::default();
        self.state = FrameState::Idle;
    }

    fn write_frame(&mut self, writer: &mut ByteWriter) -> Result<FrameReport, SharedStateError> {
        let start = writer.len();
        let snapshot = self.registry.snapshot();

        let objects =
            FrameWriter::write_frame(&self.config, &self.update_context, &snapshot, writer)?;

        let mut report = FrameReport::new(self.update_context);
        report.objects = objects;
        report.bytes = writer.len() - start;
        Ok(report)
    }

    fn read_frame(&mut self, reader: &mut ByteReader) -> Result<FrameReport, SharedStateError> {
        let start = reader.bytes_read();

        let mut report = FrameReader::read_frame(&self.config, &self.registry, reader)?;

        self.update_context = report.context;
        report.swept = self.registry.sweep_pending_removals();
        report.bytes = reader.bytes_read() - start;
        Ok(report)
    }
}
