use std::collections::BTreeMap;
use std::net::Ipv4Addr;

use anyhow::Result;
use bytes::Bytes;
use cql_protocol::codec::{Decodable, Encodable};
use cql_protocol::primitives::*;
use cql_protocol::{Error, ErrorKind};
use uuid::Uuid;

#[test]
fn test_greek_string_prefix() -> Result<()> {
    let encoded = "γειά σου".to_string().to_bytes()?;
    assert_eq!(&encoded[..2], &[0x00, 0x0f]);
    assert_eq!(encoded.len(), 17);
    assert_eq!(String::decode_exact(&encoded)?, "γειά σου");
    Ok(())
}

#[test]
fn test_null_bytes_sentinel() -> Result<()> {
    let absent: Option<Bytes> = None;
    let encoded = absent.to_bytes()?;
    assert_eq!(&encoded[..], &[0xff, 0xff, 0xff, 0xff]);
    assert_eq!(Option::<Bytes>::decode_exact(&encoded)?, None);
    Ok(())
}

#[test]
fn test_empty_collections() -> Result<()> {
    assert_eq!(&Vec::<String>::new().to_bytes()?[..], &[0, 0]);
    assert_eq!(&StringMap::new().to_bytes()?[..], &[0, 0]);
    assert_eq!(&StringMultiMap::new().to_bytes()?[..], &[0, 0]);
    Ok(())
}

#[test]
fn test_message_of_mixed_primitives() -> Result<()> {
    let id = Uuid::from_u128(0xc0d1_d21e_bb01_4196_86db_bc31_7bc1_796a);
    let peer = Inet::new(Ipv4Addr::new(10, 0, 0, 7), 9042);
    let mut options = BTreeMap::new();
    options.insert("CQL_VERSION".to_string(), "3.0.0".to_string());
    options.insert("COMPRESSION".to_string(), "lz4".to_string());

    let len = 0x04u8.encoded_len()?
        + id.encoded_len()?
        + peer.encoded_len()?
        + options.encoded_len()?
        + LongString::from("SELECT 1").encoded_len()?;
    let mut frame = vec![0u8; len];

    let rest = write_byte(0x04, &mut frame)?;
    let rest = write_uuid(Some(&id), rest)?;
    let rest = write_inet(Some(&peer), rest)?;
    let rest = write_string_map(Some(&options), rest)?;
    let rest = write_long_string("SELECT 1", rest)?;
    assert!(rest.is_empty());

    let (version, rest) = read_byte(&frame)?;
    let (decoded_id, rest) = read_uuid(rest)?;
    let (decoded_peer, rest) = read_inet(rest)?;
    let (decoded_options, rest) = read_string_map(rest)?;
    let (query, rest) = read_long_string(rest)?;
    assert!(rest.is_empty());

    assert_eq!(version, 0x04);
    assert_eq!(decoded_id, id);
    assert_eq!(decoded_peer, peer);
    assert_eq!(decoded_options, options);
    assert_eq!(query, "SELECT 1");
    Ok(())
}

#[test]
fn test_truncated_map_reports_chain_and_position() {
    let source = [0u8, 1, 0, 1, b'k', 0, 2, 0];
    let err = read_string_map(&source).unwrap_err();

    assert_eq!(
        err.to_string(),
        "cannot read [string map] value: not enough bytes to read [string] content"
    );
    assert_eq!(err.context(), Some("[string map] value"));
    assert_eq!(err.kind(), ErrorKind::InsufficientSource);
    assert_eq!(err.remainder(&source), &[0]);
    assert_eq!(err.offset(source.len()), 7);

    // anyhow keeps the std source chain intact
    let wrapped = anyhow::Error::new(err.clone());
    let causes: Vec<String> = wrapped.chain().map(|e| e.to_string()).collect();
    assert_eq!(causes.len(), 2);
    assert_eq!(causes[1], "not enough bytes to read [string] content");
    assert_eq!(wrapped.downcast_ref::<Error>(), Some(&err));
}

#[test]
fn test_decode_exact_rejects_trailing_input() {
    let err = Inet::decode_exact(&[4, 127, 0, 0, 1, 0, 0, 0x23, 0x52, 0xff]).unwrap_err();
    assert_eq!(err, Error::TrailingBytes { remaining: 1 });
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
}

#[test]
fn test_nil_values_are_rejected() {
    let mut dest = [0u8; 32];
    assert_eq!(write_uuid(None, &mut dest).unwrap_err().kind(), ErrorKind::InvalidValue);
    assert_eq!(write_inet(None, &mut dest).unwrap_err().kind(), ErrorKind::InvalidValue);
    assert!(cql_protocol::length_of_inet(None).is_err());
    assert!(dest.iter().all(|b| *b == 0));
}
