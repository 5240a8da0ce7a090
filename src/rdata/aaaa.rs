//! Record data from [RFC 3596]: AAAA records.
//!
//! This RFC defines the Aaaa record type.
//!
//! [RFC 3596]: https://tools.ietf.org/html/rfc3596

use crate::base::iana::Rtype;
use crate::base::wire::DecodeError;
use core::fmt;
use octseq::parse::Parser;
use std::net::Ipv6Addr;

//------------ Aaaa ---------------------------------------------------------

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Aaaa {
    addr: Ipv6Addr,
}

impl Aaaa {
    /// The rtype of this record data type.
    pub const RTYPE: Rtype = Rtype::AAAA;

    #[must_use]
    pub fn new(addr: Ipv6Addr) -> Aaaa {
        Aaaa { addr }
    }

    #[must_use]
    pub fn addr(&self) -> Ipv6Addr {
        self.addr
    }

    pub fn parse(parser: &mut Parser<'_, [u8]>) -> Result<Self, DecodeError> {
        let mut buf = [0u8; 16];
        parser.parse_buf(&mut buf)?;
        Ok(Self::new(buf.into()))
    }
}

//--- From

impl From<Ipv6Addr> for Aaaa {
    fn from(addr: Ipv6Addr) -> Self {
        Self::new(addr)
    }
}

//--- Display

impl fmt::Display for Aaaa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.addr, f)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_aaaa() {
        let data = b"\x26\x06\x28\x00\x02\x20\x00\x01\
                     \x02\x48\x18\x93\x25\xc8\x19\x46";
        let aaaa = Aaaa::parse(&mut Parser::from_ref(&data[..])).unwrap();
        assert_eq!(aaaa.to_string(), "2606:2800:220:1:248:1893:25c8:1946");

        let mut parser = Parser::from_ref(&data[..15]);
        assert_eq!(Aaaa::parse(&mut parser), Err(DecodeError::Truncated));
    }
}
