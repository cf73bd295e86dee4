use log::{error, warn};

use framesync_serde::{ByteReader, Serde, SerdeErr, LENGTH_PREFIX_BYTES};

use crate::{
    frame::{
        frame_report::FrameReport,
        sync_config::{PayloadFraming, SyncConfig, UnknownReplicaPolicy},
    },
    RegistryHandle, SharedObjectRef, SharedStateError, UpdateContext,
};

/// Slave-side decoder for one frame message. Mirrors `FrameWriter` field for
/// field.
pub struct FrameReader;

impl FrameReader {
    pub fn read_frame(
        config: &SyncConfig,
        registry: &RegistryHandle,
        reader: &mut ByteReader,
    ) -> Result<FrameReport, SharedStateError> {
        let context = UpdateContext::de(reader)?;
        let count = Self::read_object_count(reader)?;

        let mut report = FrameReport::new(context);

        for _ in 0..count {
            let id = String::de(reader)?;

            match config.framing {
                PayloadFraming::Unframed => {
                    let Some(object) = registry.lookup(&id) else {
                        error!(
                            "FATAL ERROR: FrameReader: could not find object key {} in frame {}",
                            id, context.frame_num
                        );
                        return Err(SharedStateError::UnknownReplicaId { id });
                    };
                    Self::apply_object(&id, &object, reader)?;
                }
                PayloadFraming::LengthPrefixed => {
                    let declared = u64::de(reader)?;
                    let length = reader.check_declared_length(declared)?;
                    let mut payload = reader.sub_reader(length)?;

                    let Some(object) = registry.lookup(&id) else {
                        match config.unknown_replica {
                            UnknownReplicaPolicy::Abort => {
                                error!(
                                    "FATAL ERROR: FrameReader: could not find object key {} in frame {}",
                                    id, context.frame_num
                                );
                                return Err(SharedStateError::UnknownReplicaId { id });
                            }
                            UnknownReplicaPolicy::Skip => {
                                warn!(
                                    "FrameReader: skipping {} payload bytes for unknown object key {}",
                                    length, id
                                );
                                report.skipped.push(id);
                                continue;
                            }
                        }
                    };

                    Self::apply_object(&id, &object, &mut payload)?;

                    if !payload.is_empty() {
                        error!(
                            "FrameReader: object {} consumed {} of {} payload bytes",
                            id,
                            payload.bytes_read(),
                            length
                        );
                        return Err(SharedStateError::PayloadSizeMismatch {
                            id,
                            declared: length,
                            consumed: payload.bytes_read(),
                        });
                    }
                }
            }

            report.objects += 1;
        }

        if config.reject_trailing_bytes && !reader.is_empty() {
            error!(
                "FrameReader: {} trailing bytes after frame {}",
                reader.remaining(),
                context.frame_num
            );
            return Err(SharedStateError::TrailingBytes {
                remaining: reader.remaining(),
            });
        }

        Ok(report)
    }

    fn read_object_count(reader: &mut ByteReader) -> Result<usize, SharedStateError> {
        let count = i32::de(reader)?;
        if count < 0 {
            error!("FrameReader: negative object count {}", count);
            return Err(SharedStateError::NegativeObjectCount { count });
        }

        // every entry carries at least its identifier's length prefix
        let remaining = reader.remaining();
        if (count as usize).saturating_mul(LENGTH_PREFIX_BYTES) > remaining {
            error!(
                "FrameReader: object count {} cannot fit in {} remaining bytes",
                count, remaining
            );
            return Err(SharedStateError::ObjectCountExceedsBuffer { count, remaining });
        }

        Ok(count as usize)
    }

    fn apply_object(
        id: &str,
        object: &SharedObjectRef,
        reader: &mut ByteReader,
    ) -> Result<(), SharedStateError> {
        let mut object = object
            .try_borrow_mut()
            .map_err(|_| SharedStateError::ObjectBusy {
                id: id.to_string(),
                operation: "applied",
            })?;

        object.apply(reader).map_err(|source| {
            error!("FrameReader: object {} failed to apply: {}", id, source);
            match source {
                // an oversized length prefix is corruption wherever it appears
                SerdeErr::LengthExceedsRemaining { .. } => {
                    SharedStateError::ProtocolCorruption(source)
                }
                _ => SharedStateError::PayloadCorruption {
                    id: id.to_string(),
                    source,
                },
            }
        })
    }
}
