//! The 16-byte [uuid]

use uuid::Uuid;

use crate::codec::{Decodable, Encodable};
use crate::error::{Error, Result};
use crate::length::LENGTH_OF_UUID;
use crate::primitives::scalar::{put, take_array};

/// Decode a [uuid] from its 16 raw bytes.
pub fn read_uuid(source: &[u8]) -> Result<(Uuid, &[u8])> {
    let (bytes, rest) = take_array::<LENGTH_OF_UUID>(source, "[uuid] content")?;
    Ok((Uuid::from_bytes(bytes), rest))
}

/// Encode a [uuid].
///
/// There is no wire form for a missing identifier, so `None` fails before
/// anything is written.
pub fn write_uuid<'a>(value: Option<&Uuid>, dest: &'a mut [u8]) -> Result<&'a mut [u8]> {
    let Some(value) = value else {
        return Err(Error::NilValue {
            what: "[uuid]",
            remaining: dest.len(),
        });
    };
    put(value.as_bytes(), dest, "[uuid] content")
}

impl Encodable for Uuid {
    fn encoded_len(&self) -> Result<usize> {
        Ok(LENGTH_OF_UUID)
    }

    fn encode<'a>(&self, dest: &'a mut [u8]) -> Result<&'a mut [u8]> {
        write_uuid(Some(self), dest)
    }
}

impl Decodable for Uuid {
    fn decode(source: &[u8]) -> Result<(Self, &[u8])> {
        read_uuid(source)
    }
}
