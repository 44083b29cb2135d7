//! Encoding and decoding of the primitive types of the CQL native protocol.
//!
//! Values are read from the front of a byte slice and written into the
//! front of a caller-provided mutable slice. Failures carry the number of
//! bytes left at the point of failure together with the chain of fields
//! that were being processed, so a caller can tell both where and why a
//! message could not be handled.

#![forbid(unsafe_code)]
#![warn(missing_debug_implementations, rust_2018_idioms)]

pub mod codec;
pub mod error;
pub mod length;
pub mod primitives;


pub use codec::{Decodable, Encodable};
pub use error::{Error, ErrorKind, Op, Result, ResultExt};
pub use length::*;
pub use primitives::*;
