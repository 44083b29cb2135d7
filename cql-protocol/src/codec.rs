//! Traits for encoding and decoding CQL protocol primitives

use bytes::{Bytes, BytesMut};

use crate::error::{Error, Result};

/// A type that can be encoded into a caller-provided buffer.
///
/// Implementors report their exact encoded size up front, so a buffer of
/// `encoded_len()` bytes is always filled completely.
pub trait Encodable {
    /// Number of bytes `encode` will write.
    fn encoded_len(&self) -> Result<usize>;

    /// Encode a value at the start of `dest`, returning the unwritten tail.
    fn encode<'a>(&self, dest: &'a mut [u8]) -> Result<&'a mut [u8]>;

    /// Encode a value into a freshly allocated, exactly sized buffer.
    fn to_bytes(&self) -> Result<Bytes> {
        let mut buf = BytesMut::zeroed(self.encoded_len()?);
        let unwritten = self.encode(&mut buf[..])?.len();
        debug_assert_eq!(unwritten, 0, "encoded_len disagrees with encode");
        Ok(buf.freeze())
    }
}

/// A type that can be decoded from the front of a byte slice.
pub trait Decodable: Sized {
    /// Decode a value from the front of `source`, returning it with the
    /// unconsumed tail.
    fn decode(source: &[u8]) -> Result<(Self, &[u8])>;

    /// Decode a value that must occupy all of `source`.
    fn decode_exact(source: &[u8]) -> Result<Self> {
        let (value, rest) = Self::decode(source)?;
        if !rest.is_empty() {
            return Err(Error::TrailingBytes {
                remaining: rest.len(),
            });
        }
        Ok(value)
    }
}
