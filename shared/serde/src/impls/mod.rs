mod array;
mod boolean;
mod scalars;
mod string;
mod vector;

/// Reads an 8-byte length prefix and checks it against the remaining stream.
pub(crate) fn read_length_prefix(
    reader: &mut crate::ByteReader,
    min_element_size: usize,
) -> Result<usize, crate::SerdeErr> {
    use crate::Serde;

    let declared = u64::de(reader)?;
    let min_bytes = declared.saturating_mul(min_element_size.max(1) as u64);
    reader.check_declared_length(min_bytes)?;
    Ok(declared as usize)
}
