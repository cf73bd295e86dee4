use crate::{ByteReader, ByteWrite, Serde, SerdeErr};

use super::read_length_prefix;

impl<T: Serde> Serde for Vec<T> {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        (self.len() as u64).ser(writer);
        for item in self {
            item.ser(writer);
        }
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        // every element occupies at least one byte
        let length = read_length_prefix(reader, 1)?;
        let mut output = Vec::with_capacity(length);
        for _ in 0..length {
            output.push(T::de(reader)?);
        }
        Ok(output)
    }
}
