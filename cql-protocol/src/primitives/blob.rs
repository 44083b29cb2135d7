//! Length-prefixed raw bytes: [bytes] and [short bytes]

use bytes::Bytes;

use crate::codec::{Decodable, Encodable};
use crate::error::{Error, Op, Result, ResultExt};
use crate::length::{length_of_bytes, length_of_short_bytes};
use crate::primitives::scalar::{put, read_int, read_short, take, write_int, write_short};

/// Length value of an absent [bytes]
const NULL_LENGTH: i32 = -1;

/// [short bytes] carried through the trait layer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ShortBytes(pub Bytes);

impl ShortBytes {
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn into_inner(self) -> Bytes {
        self.0
    }
}

impl From<Vec<u8>> for ShortBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(Bytes::from(bytes))
    }
}

impl From<&[u8]> for ShortBytes {
    fn from(bytes: &[u8]) -> Self {
        Self(Bytes::copy_from_slice(bytes))
    }
}

/// Decode a [bytes].
///
/// A negative length decodes as `None` and consumes nothing further. Zero
/// decodes as a present, empty value.
pub fn read_bytes(source: &[u8]) -> Result<(Option<Bytes>, &[u8])> {
    let (length, rest) = read_int(source).in_context(Op::Read, "[bytes] length")?;
    let Ok(length) = usize::try_from(length) else {
        return Ok((None, rest));
    };
    let (content, rest) = take(rest, length, "[bytes] content")?;
    Ok((Some(Bytes::copy_from_slice(content)), rest))
}

/// Encode a [bytes]; `None` is written as the `-1` length with no content.
pub fn write_bytes<'a>(value: Option<&[u8]>, dest: &'a mut [u8]) -> Result<&'a mut [u8]> {
    let Some(value) = value else {
        return write_int(NULL_LENGTH, dest).in_context(Op::Write, "[bytes] length");
    };
    let length = i32::try_from(value.len()).map_err(|_| Error::TooLong {
        what: "[bytes]",
        length: value.len(),
        max: i32::MAX as usize,
        remaining: dest.len(),
    })?;
    let rest = write_int(length, dest).in_context(Op::Write, "[bytes] length")?;
    put(value, rest, "[bytes] content")
}

/// Decode a [short bytes]; it has no null form.
pub fn read_short_bytes(source: &[u8]) -> Result<(Bytes, &[u8])> {
    let (length, rest) = read_short(source).in_context(Op::Read, "[short bytes] length")?;
    let (content, rest) = take(rest, usize::from(length), "[short bytes] content")?;
    Ok((Bytes::copy_from_slice(content), rest))
}

/// Encode a [short bytes].
///
/// The protocol has no null [short bytes]; `None` is written as empty.
pub fn write_short_bytes<'a>(value: Option<&[u8]>, dest: &'a mut [u8]) -> Result<&'a mut [u8]> {
    let value = value.unwrap_or_default();
    let length = u16::try_from(value.len()).map_err(|_| Error::TooLong {
        what: "[short bytes]",
        length: value.len(),
        max: usize::from(u16::MAX),
        remaining: dest.len(),
    })?;
    let rest = write_short(length, dest).in_context(Op::Write, "[short bytes] length")?;
    put(value, rest, "[short bytes] content")
}

impl Encodable for Option<Bytes> {
    fn encoded_len(&self) -> Result<usize> {
        Ok(length_of_bytes(self.as_deref()))
    }

    fn encode<'a>(&self, dest: &'a mut [u8]) -> Result<&'a mut [u8]> {
        write_bytes(self.as_deref(), dest)
    }
}

impl Decodable for Option<Bytes> {
    fn decode(source: &[u8]) -> Result<(Self, &[u8])> {
        read_bytes(source)
    }
}

impl Encodable for ShortBytes {
    fn encoded_len(&self) -> Result<usize> {
        Ok(length_of_short_bytes(Some(&self.0[..])))
    }

    fn encode<'a>(&self, dest: &'a mut [u8]) -> Result<&'a mut [u8]> {
        write_short_bytes(Some(&self.0[..]), dest)
    }
}

impl Decodable for ShortBytes {
    fn decode(source: &[u8]) -> Result<(Self, &[u8])> {
        let (value, rest) = read_short_bytes(source)?;
        Ok((ShortBytes(value), rest))
    }
}
