pub mod error;

use error::TransportError;

/// Master-side end of the frame channel.
///
/// An implementation must deliver each message exactly once and in order to
/// every slave, and must not pipeline frames.
pub trait FrameSender {
    /// Whether a message can be accepted right now.
    fn is_available(&self) -> bool;

    fn send(&mut self, payload: &[u8]) -> Result<(), TransportError>;
}

/// Slave-side end of the frame channel.
pub trait FrameReceiver {
    /// Returns the next complete frame message, or `None` if none has arrived.
    fn receive(&mut self) -> Result<Option<Vec<u8>>, TransportError>;
}

impl<T: FrameSender + ?Sized> FrameSender for Box<T> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn send(&mut self, payload: &[u8]) -> Result<(), TransportError> {
        (**self).send(payload)
    }
}

impl<T: FrameReceiver + ?Sized> FrameReceiver for Box<T> {
    fn receive(&mut self) -> Result<Option<Vec<u8>>, TransportError> {
        (**self).receive()
    }
}
