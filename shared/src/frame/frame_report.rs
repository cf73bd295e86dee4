use crate::UpdateContext;

/// Outcome of one completed frame pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub context: UpdateContext,
    /// Objects committed (master) or applied (slave)
    pub objects: usize,
    /// Identifiers skipped under `UnknownReplicaPolicy::Skip`
    pub skipped: Vec<String>,
    /// Entries erased by the end-of-pass sweep
    pub swept: usize,
    /// Size of the frame message in bytes
    pub bytes: usize,
}

impl FrameReport {
    pub(crate) fn new(context: UpdateContext) -> Self {
        Self {
            context,
            objects: 0,
            skipped: Vec::new(),
            swept: 0,
            bytes: 0,
        }
    }
}
