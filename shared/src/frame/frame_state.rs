use crate::SharedStateError;

/// Per-node frame pass state. There is no state carried between frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FrameState {
    #[default]
    Idle,
    InFrame,
}

impl FrameState {
    pub fn begin(&mut self) -> Result<(), SharedStateError> {
        match self {
            FrameState::Idle => {
                *self = FrameState::InFrame;
                Ok(())
            }
            FrameState::InFrame => Err(SharedStateError::FrameInProgress),
        }
    }

    pub fn end(&mut self) {
        *self = FrameState::Idle;
    }

    pub fn is_idle(&self) -> bool {
        *self == FrameState::Idle
    }
}
