//! Fixed-width big-endian integers: [byte], [short], [int] and [long]

use bytes::{Buf, BufMut};

use crate::codec::{Decodable, Encodable};
use crate::error::{Error, Result};
use crate::length::{LENGTH_OF_BYTE, LENGTH_OF_INT, LENGTH_OF_LONG, LENGTH_OF_SHORT};

/// Split `len` bytes off the front of `source`.
pub(crate) fn take<'a>(source: &'a [u8], len: usize, what: &'static str) -> Result<(&'a [u8], &'a [u8])> {
    if source.len() < len {
        return Err(Error::InsufficientSource {
            what,
            remaining: source.len(),
        });
    }
    Ok(source.split_at(len))
}

/// Split a fixed-size array off the front of `source`.
pub(crate) fn take_array<'a, const N: usize>(
    source: &'a [u8],
    what: &'static str,
) -> Result<([u8; N], &'a [u8])> {
    match source.split_first_chunk::<N>() {
        Some((head, rest)) => Ok((*head, rest)),
        None => Err(Error::InsufficientSource {
            what,
            remaining: source.len(),
        }),
    }
}

/// Copy `content` into the front of `dest`, returning what is left of `dest`.
pub(crate) fn put<'a>(content: &[u8], dest: &'a mut [u8], what: &'static str) -> Result<&'a mut [u8]> {
    if dest.len() < content.len() {
        return Err(Error::InsufficientCapacity {
            what,
            remaining: dest.len(),
        });
    }
    let mut buf = dest;
    buf.put_slice(content);
    Ok(buf)
}

macro_rules! scalar_codec {
    ($t:ty, $width:expr, $what:literal, $read:ident, $write:ident, $get:ident, $put:ident) => {
        #[doc = concat!("Decode a ", $what, " from the front of `source`.")]
        pub fn $read(source: &[u8]) -> Result<($t, &[u8])> {
            if source.len() < $width {
                return Err(Error::InsufficientSource {
                    what: $what,
                    remaining: source.len(),
                });
            }
            let mut buf = source;
            let value = buf.$get();
            Ok((value, buf))
        }

        #[doc = concat!("Encode a ", $what, " into the front of `dest`.")]
        pub fn $write(value: $t, dest: &mut [u8]) -> Result<&mut [u8]> {
            if dest.len() < $width {
                return Err(Error::InsufficientCapacity {
                    what: $what,
                    remaining: dest.len(),
                });
            }
            let mut buf = dest;
            buf.$put(value);
            Ok(buf)
        }

        impl Encodable for $t {
            fn encoded_len(&self) -> Result<usize> {
                Ok($width)
            }

            fn encode<'a>(&self, dest: &'a mut [u8]) -> Result<&'a mut [u8]> {
                $write(*self, dest)
            }
        }

        impl Decodable for $t {
            fn decode(source: &[u8]) -> Result<(Self, &[u8])> {
                $read(source)
            }
        }
    };
}

scalar_codec!(u8, LENGTH_OF_BYTE, "[byte]", read_byte, write_byte, get_u8, put_u8);
scalar_codec!(u16, LENGTH_OF_SHORT, "[short]", read_short, write_short, get_u16, put_u16);
scalar_codec!(i32, LENGTH_OF_INT, "[int]", read_int, write_int, get_i32, put_i32);
scalar_codec!(i64, LENGTH_OF_LONG, "[long]", read_long, write_long, get_i64, put_i64);
