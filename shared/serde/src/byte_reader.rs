use crate::SerdeErr;

/// Forward-only cursor over a received frame message.
pub struct ByteReader<'b> {
    buffer: &'b [u8],
    position: usize,
}

impl<'b> ByteReader<'b> {
    pub fn new(buffer: &'b [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    /// Bytes still available to read.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }

    pub fn bytes_read(&self) -> usize {
        self.position
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn read_byte(&mut self) -> Result<u8, SerdeErr> {
        let bytes = self.read_bytes(1)?;
        Ok(bytes[0])
    }

    /// Reads exactly `length` bytes, failing without advancing if fewer remain.
    pub fn read_bytes(&mut self, length: usize) -> Result<&'b [u8], SerdeErr> {
        let remaining = self.remaining();
        if length > remaining {
            return Err(SerdeErr::UnexpectedEnd {
                needed: length,
                remaining,
            });
        }
        let start = self.position;
        self.position += length;
        Ok(&self.buffer[start..self.position])
    }

    /// Reads a fixed-size array, used by the scalar impls.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], SerdeErr> {
        let bytes = self.read_bytes(N)?;
        let mut output = [0u8; N];
        output.copy_from_slice(bytes);
        Ok(output)
    }

    /// Validates a decoded length prefix against the bytes left in the stream.
    pub fn check_declared_length(&self, declared: u64) -> Result<usize, SerdeErr> {
        let remaining = self.remaining();
        if declared > remaining as u64 {
            return Err(SerdeErr::LengthExceedsRemaining {
                declared,
                remaining,
            });
        }
        Ok(declared as usize)
    }

    /// Splits off the next `length` bytes as an independent reader and advances
    /// past them.
    pub fn sub_reader(&mut self, length: usize) -> Result<ByteReader<'b>, SerdeErr> {
        let bytes = self.read_bytes(length)?;
        Ok(ByteReader::new(bytes))
    }
}
