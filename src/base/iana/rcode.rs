//! DNS response codes.
//!
//! The original DNS specification in [RFC 1035] specified four bits of the
//! message header as response code. The type [`Rcode`] defined herein
//! represents these codes.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035
#![allow(clippy::upper_case_acronyms)]

use core::{cmp, fmt, hash};

//------------ Rcode --------------------------------------------------------

/// DNS Response Codes.
///
/// The response code of a response indicates what happend on the server
/// when trying to answer the query. The code is a 4 bit value and part of
/// the header of a DNS message.
///
/// Values without a variant of their own are kept in the `Int` variant. A
/// well-defined variant and the `Int` variant with the same integer value
/// compare equal.
#[derive(Clone, Copy, Debug)]
pub enum Rcode {
    /// No error condition.
    ///
    /// (Otherwise known as success.)
    NoError,

    /// Format error.
    ///
    /// The name server was unable to interpret the query.
    FormErr,

    /// Server failure.
    ///
    /// The name server was unable to process this query due to a problem
    /// with the name server.
    ServFail,

    /// Name error.
    ///
    /// The domain name given in the query does not exist at the name server.
    NXDomain,

    /// Not implemented.
    ///
    /// The name server does not support the requested kind of query.
    NotImp,

    /// Query refused.
    ///
    /// The name server refused to perform the operation requested by the
    /// query for policy reasons.
    Refused,

    /// Name exists when it should not.
    YXDomain,

    /// RR set exists when it should not.
    YXRRSet,

    /// RR set that should exist does not.
    NXRRSet,

    /// Server not authoritative for zone or client not authorized.
    NotAuth,

    /// Name not contained in zone.
    NotZone,

    /// A raw, integer rcode value.
    ///
    /// When converting to an `u8`, only the lower four bits are used.
    Int(u8),
}

impl Rcode {
    /// Creates an rcode from an integer.
    ///
    /// Only the lower four bits of `value` are considered.
    pub fn from_int(value: u8) -> Rcode {
        use self::Rcode::*;

        match value & 0x0F {
            0 => NoError,
            1 => FormErr,
            2 => ServFail,
            3 => NXDomain,
            4 => NotImp,
            5 => Refused,
            6 => YXDomain,
            7 => YXRRSet,
            8 => NXRRSet,
            9 => NotAuth,
            10 => NotZone,
            value => Int(value),
        }
    }

    /// Returns the integer value for this rcode.
    pub fn to_int(self) -> u8 {
        use self::Rcode::*;

        match self {
            NoError => 0,
            FormErr => 1,
            ServFail => 2,
            NXDomain => 3,
            NotImp => 4,
            Refused => 5,
            YXDomain => 6,
            YXRRSet => 7,
            NXRRSet => 8,
            NotAuth => 9,
            NotZone => 10,
            Int(value) => value & 0x0F,
        }
    }

    /// Returns a short human readable description of the code.
    pub fn description(self) -> &'static str {
        use self::Rcode::*;

        match Rcode::from_int(self.to_int()) {
            NoError => "success",
            FormErr => "format error",
            ServFail => "server failure",
            NXDomain => "name error",
            NotImp => "not implemented",
            Refused => "refused",
            YXDomain => "name exists",
            YXRRSet => "RR set exists",
            NXRRSet => "RR set does not exist",
            NotAuth => "not authorized",
            NotZone => "name not in zone",
            Int(_) => "unknown",
        }
    }
}

//--- From

impl From<u8> for Rcode {
    fn from(value: u8) -> Rcode {
        Rcode::from_int(value)
    }
}

impl From<Rcode> for u8 {
    fn from(value: Rcode) -> u8 {
        value.to_int()
    }
}

//--- Display

impl fmt::Display for Rcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::Rcode::*;

        match *self {
            NoError => f.write_str("NOERROR"),
            FormErr => f.write_str("FORMERR"),
            ServFail => f.write_str("SERVFAIL"),
            NXDomain => f.write_str("NXDOMAIN"),
            NotImp => f.write_str("NOTIMP"),
            Refused => f.write_str("REFUSED"),
            YXDomain => f.write_str("YXDOMAIN"),
            YXRRSet => f.write_str("YXRRSET"),
            NXRRSet => f.write_str("NXRRSET"),
            NotAuth => f.write_str("NOAUTH"),
            NotZone => f.write_str("NOTZONE"),
            Int(i) => match Rcode::from_int(i) {
                Rcode::Int(i) => write!(f, "{}", i),
                value => write!(f, "{}", value),
            },
        }
    }
}

//--- PartialEq and Eq

impl cmp::PartialEq for Rcode {
    fn eq(&self, other: &Rcode) -> bool {
        self.to_int() == other.to_int()
    }
}

impl cmp::PartialEq<u8> for Rcode {
    fn eq(&self, other: &u8) -> bool {
        self.to_int() == *other
    }
}

impl cmp::Eq for Rcode {}

//--- Hash

impl hash::Hash for Rcode {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.to_int().hash(state)
    }
}

//============ Tests =========================================================
