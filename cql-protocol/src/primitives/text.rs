//! Length-prefixed UTF-8 text: [string] and [long string]
//!
//! Content is not validated at this layer. The `*_raw` codecs carry it as
//! [`Text`], byte for byte, so a relayed value re-encodes exactly as it was
//! read. `read_string` and `read_long_string` are the `String` view of the
//! same content; invalid sequences become U+FFFD there.

use std::borrow::Cow;
use std::str::Utf8Error;

use bytes::Bytes;

use crate::codec::{Decodable, Encodable};
use crate::error::{Error, Op, Result, ResultExt};
use crate::length::{length_of_long_string, length_of_string, LENGTH_OF_SHORT};
use crate::primitives::scalar::{put, read_int, read_short, take, write_int, write_short};

/// A string carried with an [int] length prefix instead of a [short] one
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct LongString(pub String);

impl LongString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for LongString {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for LongString {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Text content exactly as it appeared on the wire, valid UTF-8 or not
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Text(pub Bytes);

impl Text {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The content as `&str`, if it is valid UTF-8.
    pub fn as_str(&self) -> std::result::Result<&str, Utf8Error> {
        std::str::from_utf8(&self.0)
    }

    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self(Bytes::copy_from_slice(s.as_bytes()))
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Self(Bytes::from(s))
    }
}

impl From<&[u8]> for Text {
    fn from(bytes: &[u8]) -> Self {
        Self(Bytes::copy_from_slice(bytes))
    }
}

/// The [short] length prefix of a [string], or `TooLong` if it does not fit.
pub(crate) fn string_length(value: &[u8], dest: &[u8]) -> Result<u16> {
    u16::try_from(value.len()).map_err(|_| Error::TooLong {
        what: "[string]",
        length: value.len(),
        max: usize::from(u16::MAX),
        remaining: dest.len(),
    })
}

fn long_string_length(value: &[u8], dest: &[u8]) -> Result<i32> {
    i32::try_from(value.len()).map_err(|_| Error::TooLong {
        what: "[long string]",
        length: value.len(),
        max: i32::MAX as usize,
        remaining: dest.len(),
    })
}

fn take_string(source: &[u8]) -> Result<(&[u8], &[u8])> {
    let (length, rest) = read_short(source).in_context(Op::Read, "[string] length")?;
    take(rest, usize::from(length), "[string] content")
}

fn take_long_string(source: &[u8]) -> Result<(&[u8], &[u8])> {
    let (length, rest) = read_int(source).in_context(Op::Read, "[long string] length")?;
    let length = usize::try_from(length).map_err(|_| Error::InvalidLength {
        what: "[long string]",
        length,
        remaining: rest.len(),
    })?;
    take(rest, length, "[long string] content")
}

/// Decode a [string] as a `String`, replacing invalid UTF-8.
pub fn read_string(source: &[u8]) -> Result<(String, &[u8])> {
    let (content, rest) = take_string(source)?;
    Ok((String::from_utf8_lossy(content).into_owned(), rest))
}

/// Decode a [string], keeping its content byte for byte.
pub fn read_string_raw(source: &[u8]) -> Result<(Text, &[u8])> {
    let (content, rest) = take_string(source)?;
    Ok((Text::from(content), rest))
}

/// Encode a [string]; a value over 65535 bytes fails before anything is written.
pub fn write_string<'a>(value: &str, dest: &'a mut [u8]) -> Result<&'a mut [u8]> {
    write_string_raw(value.as_bytes(), dest)
}

/// Encode a [string] from content that is not necessarily valid UTF-8.
pub fn write_string_raw<'a>(value: &[u8], dest: &'a mut [u8]) -> Result<&'a mut [u8]> {
    let length = string_length(value, dest)?;
    let rest = write_short(length, dest).in_context(Op::Write, "[string] length")?;
    put(value, rest, "[string] content")
}

/// Decode a [long string] as a `String`, replacing invalid UTF-8.
///
/// A negative length has no meaning for text and is rejected.
pub fn read_long_string(source: &[u8]) -> Result<(String, &[u8])> {
    let (content, rest) = take_long_string(source)?;
    Ok((String::from_utf8_lossy(content).into_owned(), rest))
}

/// Decode a [long string], keeping its content byte for byte.
pub fn read_long_string_raw(source: &[u8]) -> Result<(Text, &[u8])> {
    let (content, rest) = take_long_string(source)?;
    Ok((Text::from(content), rest))
}

/// Encode a [long string].
pub fn write_long_string<'a>(value: &str, dest: &'a mut [u8]) -> Result<&'a mut [u8]> {
    write_long_string_raw(value.as_bytes(), dest)
}

/// Encode a [long string] from content that is not necessarily valid UTF-8.
pub fn write_long_string_raw<'a>(value: &[u8], dest: &'a mut [u8]) -> Result<&'a mut [u8]> {
    let length = long_string_length(value, dest)?;
    let rest = write_int(length, dest).in_context(Op::Write, "[long string] length")?;
    put(value, rest, "[long string] content")
}

impl Encodable for String {
    fn encoded_len(&self) -> Result<usize> {
        Ok(length_of_string(self))
    }

    fn encode<'a>(&self, dest: &'a mut [u8]) -> Result<&'a mut [u8]> {
        write_string(self, dest)
    }
}

impl Decodable for String {
    fn decode(source: &[u8]) -> Result<(Self, &[u8])> {
        read_string(source)
    }
}

impl Encodable for LongString {
    fn encoded_len(&self) -> Result<usize> {
        Ok(length_of_long_string(&self.0))
    }

    fn encode<'a>(&self, dest: &'a mut [u8]) -> Result<&'a mut [u8]> {
        write_long_string(&self.0, dest)
    }
}

impl Decodable for LongString {
    fn decode(source: &[u8]) -> Result<(Self, &[u8])> {
        let (value, rest) = read_long_string(source)?;
        Ok((LongString(value), rest))
    }
}

impl Encodable for Text {
    fn encoded_len(&self) -> Result<usize> {
        Ok(LENGTH_OF_SHORT + self.len())
    }

    fn encode<'a>(&self, dest: &'a mut [u8]) -> Result<&'a mut [u8]> {
        write_string_raw(&self.0, dest)
    }
}

impl Decodable for Text {
    fn decode(source: &[u8]) -> Result<(Self, &[u8])> {
        read_string_raw(source)
    }
}
