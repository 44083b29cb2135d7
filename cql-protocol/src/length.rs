//! Exact encoded lengths of every primitive
//!
//! Callers size destination buffers with these before calling a `write_*`
//! function, so a correctly sized buffer never runs out of capacity.

use std::collections::BTreeMap;
use std::net::IpAddr;

use crate::error::{Error, Result};
use crate::primitives::inet::Inet;

pub const LENGTH_OF_BYTE: usize = 1;
pub const LENGTH_OF_SHORT: usize = 2;
pub const LENGTH_OF_INT: usize = 4;
pub const LENGTH_OF_LONG: usize = 8;
pub const LENGTH_OF_UUID: usize = 16;

const LENGTH_OF_IPV4: usize = 4;
const LENGTH_OF_IPV6: usize = 16;

pub fn length_of_string(value: &str) -> usize {
    LENGTH_OF_SHORT + value.len()
}

pub fn length_of_long_string(value: &str) -> usize {
    LENGTH_OF_INT + value.len()
}

/// An absent value still occupies its four-byte `-1` length.
pub fn length_of_bytes(value: Option<&[u8]>) -> usize {
    LENGTH_OF_INT + value.map_or(0, <[u8]>::len)
}

pub fn length_of_short_bytes(value: Option<&[u8]>) -> usize {
    LENGTH_OF_SHORT + value.map_or(0, <[u8]>::len)
}

pub fn length_of_string_list<S: AsRef<str>>(list: Option<&[S]>) -> usize {
    LENGTH_OF_SHORT
        + list.map_or(0, |list| {
            list.iter().map(|s| length_of_string(s.as_ref())).sum()
        })
}

pub fn length_of_string_map(map: Option<&BTreeMap<String, String>>) -> usize {
    LENGTH_OF_SHORT
        + map.map_or(0, |map| {
            map.iter()
                .map(|(key, value)| length_of_string(key) + length_of_string(value))
                .sum()
        })
}

pub fn length_of_string_multimap(map: Option<&BTreeMap<String, Vec<String>>>) -> usize {
    LENGTH_OF_SHORT
        + map.map_or(0, |map| {
            map.iter()
                .map(|(key, values)| {
                    length_of_string(key) + length_of_string_list(Some(values.as_slice()))
                })
                .sum()
        })
}

/// Length of an [`Inet`]: address length byte, address, port.
///
/// There is no encoding for a missing address, so `None` is an error rather
/// than a length.
pub fn length_of_inet(inet: Option<&Inet>) -> Result<usize> {
    let inet = inet.ok_or(Error::NilLength { what: "[inet]" })?;
    let address = match inet.addr {
        IpAddr::V4(_) => LENGTH_OF_IPV4,
        IpAddr::V6(_) => LENGTH_OF_IPV6,
    };
    Ok(LENGTH_OF_BYTE + address + LENGTH_OF_INT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn test_text_lengths() {
        assert_eq!(length_of_string(""), 2);
        assert_eq!(length_of_string("hello"), 7);
        // byte count, not character count
        assert_eq!(length_of_string("γειά σου"), 17);
        assert_eq!(length_of_long_string("γειά σου"), 19);
    }

    #[test]
    fn test_blob_lengths() {
        assert_eq!(length_of_bytes(None), 4);
        assert_eq!(length_of_bytes(Some(&[][..])), 4);
        assert_eq!(length_of_bytes(Some(&[1, 2][..])), 6);
        assert_eq!(length_of_short_bytes(None), 2);
        assert_eq!(length_of_short_bytes(Some(&[1, 2][..])), 4);
    }

    #[test]
    fn test_collection_lengths() {
        assert_eq!(length_of_string_list::<String>(None), 2);
        assert_eq!(length_of_string_list(Some(&["hello", "world"][..])), 16);

        let mut map = BTreeMap::new();
        assert_eq!(length_of_string_map(Some(&map)), 2);
        map.insert("hello".to_string(), "world".to_string());
        assert_eq!(length_of_string_map(Some(&map)), 16);
        assert_eq!(length_of_string_map(None), 2);

        let mut multimap = BTreeMap::new();
        multimap.insert(
            "hello".to_string(),
            vec!["world".to_string(), "mundo".to_string()],
        );
        assert_eq!(length_of_string_multimap(Some(&multimap)), 2 + 7 + 2 + 7 + 7);
        assert_eq!(length_of_string_multimap(None), 2);
    }

    #[test]
    fn test_inet_length() {
        let v4 = Inet::new(Ipv4Addr::new(192, 168, 1, 1), 9042);
        assert_eq!(length_of_inet(Some(&v4)).unwrap(), 1 + 4 + 4);

        let v6 = Inet::new(Ipv6Addr::LOCALHOST, 9042);
        assert_eq!(length_of_inet(Some(&v6)).unwrap(), 1 + 16 + 4);

        let err = length_of_inet(None).unwrap_err();
        assert_eq!(err.to_string(), "cannot compute nil [inet] length");
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }
}
