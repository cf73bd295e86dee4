use crate::{ByteReader, ByteWrite, ConstByteLength, Serde, SerdeErr};

impl<T: Serde + Copy + Default, const N: usize> Serde for [T; N] {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        for item in self {
            item.ser(writer);
        }
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let mut output = [T::default(); N];
        for slot in output.iter_mut() {
            *slot = T::de(reader)?;
        }
        Ok(output)
    }
}

impl<T: ConstByteLength, const N: usize> ConstByteLength for [T; N] {
    fn const_byte_length() -> usize {
        T::const_byte_length() * N
    }
}
