//! Record data implementations.
//!
//! The types are named identically to the record type they implement and
//! are grouped into submodules for the RFCs they are defined in. All of them
//! are also re-exported here.
//!
//! [`RecordData`] wraps all of them together with [`UnknownRecordData`] for
//! every type without a specific implementation. Such data is kept as raw
//! octets and never causes a message to be rejected.

pub use self::aaaa::Aaaa;
pub use self::generic::UnknownRecordData;
pub use self::rfc1035::{Cname, Mx, Txt, A};

pub mod aaaa;
pub mod generic;
pub mod rfc1035;

use crate::base::iana::Rtype;
use crate::base::wire::DecodeError;
use core::fmt;
use octseq::parse::Parser;
use tracing::trace;

//------------ RecordData ---------------------------------------------------

/// The record data of a resource record.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum RecordData {
    A(A),
    Aaaa(Aaaa),
    Cname(Cname),
    Mx(Mx),
    Txt(Txt),

    /// Data of a record type without a specific implementation.
    Unsupported(UnknownRecordData),
}

impl RecordData {
    /// Returns the record type of the data.
    pub fn rtype(&self) -> Rtype {
        match self {
            RecordData::A(_) => A::RTYPE,
            RecordData::Aaaa(_) => Aaaa::RTYPE,
            RecordData::Cname(_) => Cname::RTYPE,
            RecordData::Mx(_) => Mx::RTYPE,
            RecordData::Txt(_) => Txt::RTYPE,
            RecordData::Unsupported(data) => data.rtype(),
        }
    }

    /// Returns whether the data was decoded into a specific type.
    pub fn is_supported(&self) -> bool {
        !matches!(self, RecordData::Unsupported(_))
    }

    /// Takes record data of type `rtype` and length `rdlen` from `parser`.
    ///
    /// The parser must range over the complete message since the data may
    /// contain compressed names. On success, it is positioned right behind
    /// the record data.
    ///
    /// If `rdlen` octets aren’t available, [`DecodeError::Truncated`] is
    /// returned. Data of a known type that doesn’t fill exactly `rdlen`
    /// octets is a format error.
    pub fn parse(
        rtype: Rtype,
        parser: &mut Parser<'_, [u8]>,
        rdlen: usize,
    ) -> Result<Self, DecodeError> {
        let mut data = parser.parse_parser(rdlen)?;
        let res = match rtype {
            Rtype::A => A::parse(&mut data).map(RecordData::A)?,
            Rtype::AAAA => Aaaa::parse(&mut data).map(RecordData::Aaaa)?,
            Rtype::CNAME => Cname::parse(&mut data).map(RecordData::Cname)?,
            Rtype::MX => Mx::parse(&mut data).map(RecordData::Mx)?,
            Rtype::TXT => Txt::parse(&mut data).map(RecordData::Txt)?,
            _ => {
                trace!(%rtype, rdlen, "keeping record data of unsupported type");
                let mut octets = vec![0u8; rdlen];
                data.parse_buf(&mut octets)?;
                RecordData::Unsupported(UnknownRecordData::from_octets(
                    rtype, octets,
                ))
            }
        };
        if data.remaining() != 0 {
            return Err(DecodeError::form_error("trailing data in record data"));
        }
        Ok(res)
    }
}

//--- Display

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RecordData::A(data) => fmt::Display::fmt(data, f),
            RecordData::Aaaa(data) => fmt::Display::fmt(data, f),
            RecordData::Cname(data) => fmt::Display::fmt(data, f),
            RecordData::Mx(data) => fmt::Display::fmt(data, f),
            RecordData::Txt(data) => fmt::Display::fmt(data, f),
            RecordData::Unsupported(data) => fmt::Display::fmt(data, f),
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    fn parse(
        msg: &[u8],
        start: usize,
        rtype: Rtype,
        rdlen: usize,
    ) -> Result<(RecordData, usize), DecodeError> {
        let mut parser = Parser::from_ref(msg);
        parser.seek(start)?;
        let data = RecordData::parse(rtype, &mut parser, rdlen)?;
        Ok((data, parser.pos()))
    }

    #[test]
    fn supported_types() {
        let (data, pos) = parse(b"\x7f\x00\x00\x01rest", 0, Rtype::A, 4).unwrap();
        assert_eq!(data, RecordData::A(A::from_octets(127, 0, 0, 1)));
        assert_eq!(data.rtype(), Rtype::A);
        assert_eq!(pos, 4);

        let msg = b"\x07example\x03com\x00\x04mail\xc0\x00";
        let (data, pos) = parse(msg, 13, Rtype::CNAME, 7).unwrap();
        assert_eq!(data.to_string(), "mail.example.com");
        assert_eq!(pos, 20);

        let (data, _) = parse(b"\x02hi", 0, Rtype::TXT, 3).unwrap();
        assert_eq!(data.to_string(), "\"hi\"");
    }

    #[test]
    fn unsupported_type() {
        let (data, pos) =
            parse(b"\x00\x01\x02\x03", 1, Rtype::SOA, 2).unwrap();
        assert!(!data.is_supported());
        assert_eq!(data.rtype(), Rtype::SOA);
        assert_eq!(
            data,
            RecordData::Unsupported(UnknownRecordData::from_octets(
                Rtype::SOA,
                vec![1, 2]
            ))
        );
        assert_eq!(pos, 3);
    }

    #[test]
    fn bad_lengths() {
        // Not enough octets for rdlen.
        assert_eq!(
            parse(b"\x7f\x00\x00", 0, Rtype::A, 4),
            Err(DecodeError::Truncated)
        );

        // rdlen too short for an address.
        assert_eq!(
            parse(b"\x7f\x00\x00\x01", 0, Rtype::A, 3),
            Err(DecodeError::Truncated)
        );

        // rdlen too long for an address.
        assert!(matches!(
            parse(b"\x7f\x00\x00\x01\x00", 0, Rtype::A, 5),
            Err(DecodeError::Form(_))
        ));

        // Character string running past rdlen.
        assert_eq!(
            parse(b"\x05hel\x00\x00", 0, Rtype::TXT, 4),
            Err(DecodeError::Truncated)
        );
    }
}
