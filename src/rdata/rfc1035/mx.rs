//! Record data for the MX record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::iana::Rtype;
use crate::base::name::parse_name;
use crate::base::wire::DecodeError;
use core::fmt;
use octseq::parse::Parser;
use std::string::String;

//------------ Mx -----------------------------------------------------------

/// Mx record data.
///
/// The Mx record specifies a host willing to serve as a mail exchange for
/// the owner name.
///
/// The Mx record type is defined in [RFC 1035, section 3.3.9][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.9
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Mx {
    preference: u16,
    exchange: String,
}

impl Mx {
    /// The rtype of this record data type.
    pub const RTYPE: Rtype = Rtype::MX;

    /// Creates a new Mx record data from the components.
    pub fn new(preference: u16, exchange: String) -> Self {
        Mx {
            preference,
            exchange,
        }
    }

    /// The preference for this record.
    ///
    /// Defines an order if there are several Mx records for the same owner.
    /// Lower values are preferred.
    pub fn preference(&self) -> u16 {
        self.preference
    }

    /// The name of the host that is the exchange.
    pub fn exchange(&self) -> &str {
        &self.exchange
    }

    /// Takes the record data from the beginning of `parser`.
    ///
    /// The parser has to range over the complete message so that a
    /// compressed exchange name can be resolved.
    pub fn parse(parser: &mut Parser<'_, [u8]>) -> Result<Self, DecodeError> {
        Ok(Self::new(parser.parse_u16_be()?, parse_name(parser)?))
    }
}

//--- Display

impl fmt::Display for Mx {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.preference, self.exchange)
    }
}

//============ Testing =======================================================
