use crate::{ByteReader, ByteWrite, ConstByteLength, Serde, SerdeErr};

macro_rules! impl_serde_for_scalar {
    ($($ty:ty),*) => {$(
        impl Serde for $ty {
            fn ser(&self, writer: &mut dyn ByteWrite) {
                writer.write_bytes(&self.to_le_bytes());
            }

            fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
                let bytes = reader.read_array::<{ std::mem::size_of::<$ty>() }>()?;
                Ok(<$ty>::from_le_bytes(bytes))
            }

            fn byte_length(&self) -> usize {
                std::mem::size_of::<$ty>()
            }
        }

        impl ConstByteLength for $ty {
            fn const_byte_length() -> usize {
                std::mem::size_of::<$ty>()
            }
        }
    )*};
}

impl_serde_for_scalar!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);
