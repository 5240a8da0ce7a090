//! Record data for the CNAME record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::iana::Rtype;
use crate::base::name::parse_name;
use crate::base::wire::DecodeError;
use core::fmt;
use octseq::parse::Parser;
use std::string::String;

//------------ Cname --------------------------------------------------------

/// CNAME record data.
///
/// The CNAME record specifies the canonical or primary name for the owner.
/// The owner name is an alias.
///
/// The CNAME type is defined in [RFC 1035, section 3.3.1][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.1
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Cname {
    cname: String,
}

impl Cname {
    /// The rtype of this record data type.
    pub const RTYPE: Rtype = Rtype::CNAME;

    pub fn new(cname: String) -> Self {
        Cname { cname }
    }

    pub fn cname(&self) -> &str {
        &self.cname
    }

    pub fn into_cname(self) -> String {
        self.cname
    }

    /// Takes the record data from the beginning of `parser`.
    ///
    /// The parser has to range over the complete message.
    pub fn parse(parser: &mut Parser<'_, [u8]>) -> Result<Self, DecodeError> {
        parse_name(parser).map(Self::new)
    }
}

//--- Display

impl fmt::Display for Cname {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.cname)
    }
}
