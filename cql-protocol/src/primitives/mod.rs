//! Codecs for the primitive types of the CQL native protocol.
//!
//! Every decoder takes the input slice and returns the decoded value with
//! the unconsumed tail. Every encoder writes at the front of the output
//! slice and returns its unwritten tail.

pub mod blob;
pub mod collections;
pub mod identifier;
pub mod inet;
pub mod scalar;
pub mod text;

pub use blob::{read_bytes, read_short_bytes, write_bytes, write_short_bytes, ShortBytes};
pub use collections::{
    read_string_list, read_string_map, read_string_multimap, write_string_list, write_string_map,
    write_string_multimap, StringMap, StringMultiMap,
};
pub use identifier::{read_uuid, write_uuid};
pub use inet::{read_inet, write_inet, Inet};
pub use scalar::{
    read_byte, read_int, read_long, read_short, write_byte, write_int, write_long, write_short,
};
pub use text::{
    read_long_string, read_long_string_raw, read_string, read_string_raw, write_long_string,
    write_long_string_raw, write_string, write_string_raw, LongString, Text,
};
