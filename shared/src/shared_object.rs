use std::{cell::RefCell, rc::Rc};

use framesync_serde::{ByteReader, ByteWrite, SerdeErr};

/// An application object that takes part in per-frame replication.
///
/// `commit` and `apply` must be symmetric: whatever `commit` writes on the
/// master, `apply` must read back exactly on every slave.
pub trait SharedObject {
    /// Writes this object's state into the outgoing frame message.
    fn commit(&mut self, writer: &mut dyn ByteWrite);

    /// Reads the state written by the master's `commit`.
    fn apply(&mut self, reader: &mut ByteReader) -> Result<(), SerdeErr>;
}

/// Strong handle to a registered object, held only for the duration of a pass.
pub type SharedObjectRef = Rc<RefCell<dyn SharedObject>>;
