use crate::{ByteReader, ByteWrite, ConstByteLength, Serde, SerdeErr};

impl Serde for bool {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        writer.write_byte(u8::from(*self));
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        match reader.read_byte()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(SerdeErr::InvalidValue {
                type_name: "bool",
                value: other as u64,
            }),
        }
    }

    fn byte_length(&self) -> usize {
        1
    }
}

impl ConstByteLength for bool {
    fn const_byte_length() -> usize {
        1
    }
}
