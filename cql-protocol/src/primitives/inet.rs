//! The [inet] address: a length-tagged IPv4 or IPv6 address plus a port
//!
//! The address family is never written explicitly; it is inferred from the
//! one-byte address length that precedes the address.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

use tracing::debug;

use crate::codec::{Decodable, Encodable};
use crate::error::{Error, Op, Result, ResultExt};
use crate::length::length_of_inet;
use crate::primitives::scalar::{put, read_byte, read_int, take_array, write_byte, write_int};

const IPV4_LENGTH: u8 = 4;
const IPV6_LENGTH: u8 = 16;

/// An address and port that travel together on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Inet {
    pub addr: IpAddr,
    pub port: i32,
}

impl Inet {
    pub fn new(addr: impl Into<IpAddr>, port: i32) -> Self {
        Self {
            addr: addr.into(),
            port,
        }
    }
}

impl From<SocketAddr> for Inet {
    fn from(addr: SocketAddr) -> Self {
        Self::new(addr.ip(), i32::from(addr.port()))
    }
}

impl fmt::Display for Inet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.addr {
            IpAddr::V4(addr) => write!(f, "{}:{}", addr, self.port),
            IpAddr::V6(addr) => write!(f, "[{}]:{}", addr, self.port),
        }
    }
}

/// Decode an [inet], inferring the address family from its length byte.
pub fn read_inet(source: &[u8]) -> Result<(Inet, &[u8])> {
    let (length, rest) = read_byte(source).in_context(Op::Read, "[inet] length")?;
    let (addr, rest) = match length {
        IPV4_LENGTH => {
            let (octets, rest) = take_array::<4>(rest, "[inet] IPv4 content")?;
            (IpAddr::V4(Ipv4Addr::from(octets)), rest)
        }
        IPV6_LENGTH => {
            let (octets, rest) = take_array::<16>(rest, "[inet] IPv6 content")?;
            (IpAddr::V6(Ipv6Addr::from(octets)), rest)
        }
        other => {
            debug!(length = other, "rejecting inet with unknown address length");
            return Err(Error::InvalidLength {
                what: "[inet] address",
                length: i32::from(other),
                remaining: rest.len(),
            });
        }
    };
    let (port, rest) = read_int(rest).in_context(Op::Read, "[inet] port number")?;
    Ok((Inet { addr, port }, rest))
}

/// Encode an [inet]; `None` fails before anything is written.
pub fn write_inet<'a>(inet: Option<&Inet>, dest: &'a mut [u8]) -> Result<&'a mut [u8]> {
    let Some(inet) = inet else {
        return Err(Error::NilValue {
            what: "[inet]",
            remaining: dest.len(),
        });
    };
    let rest = match inet.addr {
        IpAddr::V4(addr) => {
            let rest = write_byte(IPV4_LENGTH, dest).in_context(Op::Write, "[inet] length")?;
            put(&addr.octets(), rest, "[inet] IPv4 content")?
        }
        IpAddr::V6(addr) => {
            let rest = write_byte(IPV6_LENGTH, dest).in_context(Op::Write, "[inet] length")?;
            put(&addr.octets(), rest, "[inet] IPv6 content")?
        }
    };
    write_int(inet.port, rest).in_context(Op::Write, "[inet] port number")
}

impl Encodable for Inet {
    fn encoded_len(&self) -> Result<usize> {
        length_of_inet(Some(self))
    }

    fn encode<'a>(&self, dest: &'a mut [u8]) -> Result<&'a mut [u8]> {
        write_inet(Some(self), dest)
    }
}

impl Decodable for Inet {
    fn decode(source: &[u8]) -> Result<(Self, &[u8])> {
        read_inet(source)
    }
}
