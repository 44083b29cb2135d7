//! [string list], [string map] and [string multimap]
//!
//! Maps are `BTreeMap`s, so entries are written in key order and the same
//! map always encodes to the same bytes. When a decoded map repeats a key,
//! the last occurrence wins.
//!
//! Every count and nested string is size-checked before the first byte is
//! written, so an oversized entry leaves the destination untouched.

use std::collections::BTreeMap;

use tracing::trace;

use crate::codec::{Decodable, Encodable};
use crate::error::{Error, Op, Result, ResultExt};
use crate::length::{
    length_of_string_list, length_of_string_map, length_of_string_multimap, LENGTH_OF_SHORT,
};
use crate::primitives::scalar::{read_short, write_short};
use crate::primitives::text::{read_string, string_length, write_string};

/// Type alias for a [string map]
pub type StringMap = BTreeMap<String, String>;

/// Type alias for a [string multimap]
pub type StringMultiMap = BTreeMap<String, Vec<String>>;

fn entry_count(len: usize, what: &'static str, dest: &[u8]) -> Result<u16> {
    u16::try_from(len).map_err(|_| Error::TooLong {
        what,
        length: len,
        max: usize::from(u16::MAX),
        remaining: dest.len(),
    })
}

// Sizes of a whole list, checked without writing.
fn list_count<S: AsRef<str>>(list: &[S], dest: &[u8]) -> Result<u16> {
    let count = entry_count(list.len(), "[string list]", dest)?;
    for element in list {
        string_length(element.as_ref().as_bytes(), dest)
            .in_context(Op::Write, "[string list] element")?;
    }
    Ok(count)
}

// Every element takes at least a two-byte length, which bounds how much a
// hostile count can make us reserve.
fn capacity_for(count: u16, rest: &[u8]) -> usize {
    usize::from(count).min(rest.len() / LENGTH_OF_SHORT)
}

/// Decode a [string list].
pub fn read_string_list(source: &[u8]) -> Result<(Vec<String>, &[u8])> {
    let (count, mut rest) = read_short(source).in_context(Op::Read, "[string list] length")?;
    let mut list = Vec::with_capacity(capacity_for(count, rest));
    for _ in 0..count {
        let (element, next) = read_string(rest).in_context(Op::Read, "[string list] element")?;
        list.push(element);
        rest = next;
    }
    trace!(count, "decoded string list");
    Ok((list, rest))
}

/// Encode a [string list]; `None` is written as an empty list.
pub fn write_string_list<'a, S: AsRef<str>>(
    list: Option<&[S]>,
    dest: &'a mut [u8],
) -> Result<&'a mut [u8]> {
    let list = list.unwrap_or_default();
    let count = list_count(list, dest)?;
    let mut rest = write_short(count, dest).in_context(Op::Write, "[string list] length")?;
    for element in list {
        rest = write_string(element.as_ref(), rest).in_context(Op::Write, "[string list] element")?;
    }
    Ok(rest)
}

/// Decode a [string map].
pub fn read_string_map(source: &[u8]) -> Result<(StringMap, &[u8])> {
    let (count, mut rest) = read_short(source).in_context(Op::Read, "[string map] length")?;
    let mut map = BTreeMap::new();
    for _ in 0..count {
        let (key, next) = read_string(rest).in_context(Op::Read, "[string map] key")?;
        let (value, next) = read_string(next).in_context(Op::Read, "[string map] value")?;
        map.insert(key, value);
        rest = next;
    }
    trace!(count, entries = map.len(), "decoded string map");
    Ok((map, rest))
}

/// Encode a [string map] in key order; `None` is written as an empty map.
pub fn write_string_map<'a>(map: Option<&StringMap>, dest: &'a mut [u8]) -> Result<&'a mut [u8]> {
    let count = entry_count(map.map_or(0, BTreeMap::len), "[string map]", dest)?;
    for (key, value) in map.into_iter().flatten() {
        string_length(key.as_bytes(), dest).in_context(Op::Write, "[string map] key")?;
        string_length(value.as_bytes(), dest).in_context(Op::Write, "[string map] value")?;
    }
    let mut rest = write_short(count, dest).in_context(Op::Write, "[string map] length")?;
    for (key, value) in map.into_iter().flatten() {
        rest = write_string(key, rest).in_context(Op::Write, "[string map] key")?;
        rest = write_string(value, rest).in_context(Op::Write, "[string map] value")?;
    }
    Ok(rest)
}

/// Decode a [string multimap].
pub fn read_string_multimap(source: &[u8]) -> Result<(StringMultiMap, &[u8])> {
    let (count, mut rest) = read_short(source).in_context(Op::Read, "[string multimap] length")?;
    let mut map = BTreeMap::new();
    for _ in 0..count {
        let (key, next) = read_string(rest).in_context(Op::Read, "[string multimap] key")?;
        let (values, next) =
            read_string_list(next).in_context(Op::Read, "[string multimap] value")?;
        map.insert(key, values);
        rest = next;
    }
    trace!(count, entries = map.len(), "decoded string multimap");
    Ok((map, rest))
}

/// Encode a [string multimap] in key order; `None` is written as an empty map.
pub fn write_string_multimap<'a>(
    map: Option<&StringMultiMap>,
    dest: &'a mut [u8],
) -> Result<&'a mut [u8]> {
    let count = entry_count(map.map_or(0, BTreeMap::len), "[string multimap]", dest)?;
    for (key, values) in map.into_iter().flatten() {
        string_length(key.as_bytes(), dest).in_context(Op::Write, "[string multimap] key")?;
        list_count(values.as_slice(), dest).in_context(Op::Write, "[string multimap] value")?;
    }
    let mut rest = write_short(count, dest).in_context(Op::Write, "[string multimap] length")?;
    for (key, values) in map.into_iter().flatten() {
        rest = write_string(key, rest).in_context(Op::Write, "[string multimap] key")?;
        rest = write_string_list(Some(values.as_slice()), rest)
            .in_context(Op::Write, "[string multimap] value")?;
    }
    Ok(rest)
}

impl Encodable for Vec<String> {
    fn encoded_len(&self) -> Result<usize> {
        Ok(length_of_string_list(Some(self.as_slice())))
    }

    fn encode<'a>(&self, dest: &'a mut [u8]) -> Result<&'a mut [u8]> {
        write_string_list(Some(self.as_slice()), dest)
    }
}

impl Decodable for Vec<String> {
    fn decode(source: &[u8]) -> Result<(Self, &[u8])> {
        read_string_list(source)
    }
}

impl Encodable for StringMap {
    fn encoded_len(&self) -> Result<usize> {
        Ok(length_of_string_map(Some(self)))
    }

    fn encode<'a>(&self, dest: &'a mut [u8]) -> Result<&'a mut [u8]> {
        write_string_map(Some(self), dest)
    }
}

impl Decodable for StringMap {
    fn decode(source: &[u8]) -> Result<(Self, &[u8])> {
        read_string_map(source)
    }
}

impl Encodable for StringMultiMap {
    fn encoded_len(&self) -> Result<usize> {
        Ok(length_of_string_multimap(Some(self)))
    }

    fn encode<'a>(&self, dest: &'a mut [u8]) -> Result<&'a mut [u8]> {
        write_string_multimap(Some(self), dest)
    }
}

impl Decodable for StringMultiMap {
    fn decode(source: &[u8]) -> Result<(Self, &[u8])> {
        read_string_multimap(source)
    }
}
