use framesync_serde::{ByteWrite, ByteWriter, Serde};

use crate::{
    frame::sync_config::{PayloadFraming, SyncConfig},
    SharedObjectRef, SharedStateError, UpdateContext,
};

/// Master-side encoder for one frame message.
///
/// Layout: update context, `i32` object count, then per object its identifier
/// as a length-prefixed string followed by its payload.
pub struct FrameWriter;

impl FrameWriter {
    /// Writes the whole frame. Returns the number of objects committed.
    pub fn write_frame(
        config: &SyncConfig,
        context: &UpdateContext,
        snapshot: &[(String, SharedObjectRef)],
        writer: &mut ByteWriter,
    ) -> Result<usize, SharedStateError> {
        // the count is fixed by the snapshot, taken before any commit runs
        let count = i32::try_from(snapshot.len()).map_err(|_| SharedStateError::TooManyObjects {
            count: snapshot.len(),
        })?;

        context.ser(writer);
        count.ser(writer);

        for (id, object) in snapshot {
            Self::write_object(config.framing, id, object, writer)?;
        }

        Ok(snapshot.len())
    }

    fn write_object(
        framing: PayloadFraming,
        id: &String,
        object: &SharedObjectRef,
        writer: &mut ByteWriter,
    ) -> Result<(), SharedStateError> {
        let mut object = object
            .try_borrow_mut()
            .map_err(|_| SharedStateError::ObjectBusy {
                id: id.clone(),
                operation: "committed",
            })?;

        id.ser(writer);

        match framing {
            PayloadFraming::Unframed => {
                object.commit(writer);
            }
            PayloadFraming::LengthPrefixed => {
                let mut payload = ByteWriter::with_capacity(64);
                object.commit(&mut payload);
                (payload.len() as u64).ser(writer);
                writer.write_bytes(payload.as_bytes());
            }
        }

        Ok(())
    }
}
