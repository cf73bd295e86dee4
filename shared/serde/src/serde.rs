use crate::{ByteCounter, ByteReader, ByteWrite, SerdeErr};

/// A type that can be written to and read back from a frame message.
pub trait Serde: Sized {
    fn ser(&self, writer: &mut dyn ByteWrite);

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr>;

    /// Number of bytes `ser` will write.
    fn byte_length(&self) -> usize {
        let mut counter = ByteCounter::new();
        self.ser(&mut counter);
        counter.count()
    }
}

/// Implemented by types whose encoded width never varies.
pub trait ConstByteLength {
    fn const_byte_length() -> usize;
}
