use crate::{ByteReader, ByteWrite, Serde, SerdeErr};

use super::read_length_prefix;

impl Serde for String {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        // length is the byte count, not the char count
        (self.len() as u64).ser(writer);
        if !self.is_empty() {
            writer.write_bytes(self.as_bytes());
        }
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let length = read_length_prefix(reader, 1)?;
        if length == 0 {
            return Ok(String::new());
        }
        let bytes = reader.read_bytes(length)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| SerdeErr::InvalidUtf8 { length })
    }

    fn byte_length(&self) -> usize {
        crate::LENGTH_PREFIX_BYTES + self.len()
    }
}
