//! Building a new DNS query message.
//!
//! The only kind of message this crate builds is a standard query with a
//! single question. [`encode_query`] creates it in one go from the
//! transaction ID, the host name, and one of the [`QueryType`]s.

use super::header::HeaderSection;
use super::iana::{Class, Opcode, Rtype};
use super::question::Question;
use super::wire::EncodeError;
use core::{fmt, str};
use octseq::builder::infallible;
use std::vec::Vec;
use tracing::trace;

//------------ encode_query --------------------------------------------------

/// Builds a standard query for `hostname` and `qtype`.
///
/// The header has the ID set to `id`, the QR flag cleared, an opcode of
/// QUERY, the RD flag set, and a question count of one with all other
/// counts zero. It is followed by a single question with class IN.
///
/// # Errors
///
/// Fails if `hostname` can’t be encoded; see
/// [`encode_name`][super::name::encode_name].
///
/// # Example
///
/// ```
/// use dnsmsg::{encode_query, QueryType};
///
/// let query = encode_query(0xABCD, "example.com", QueryType::A).unwrap();
/// assert_eq!(
///     query,
///     b"\xab\xcd\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00\
///       \x07example\x03com\x00\x00\x01\x00\x01"
/// );
/// ```
pub fn encode_query(
    id: u16,
    hostname: &str,
    qtype: QueryType,
) -> Result<Vec<u8>, EncodeError> {
    let mut section = HeaderSection::new();
    let header = section.header_mut();
    header.set_id(id);
    header.set_opcode(Opcode::Query);
    header.set_rd(true);
    section.counts_mut().set_qdcount(1);

    let question = Question::new(hostname, qtype.rtype(), Class::IN);
    let mut target =
        Vec::with_capacity(HeaderSection::LEN + hostname.len() + 6);
    infallible(section.compose(&mut target));
    question.compose(&mut target)?;
    trace!(id, %question, len = target.len(), "encoded query");
    Ok(target)
}

//------------ QueryType -----------------------------------------------------

/// The record types a query can be built for.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum QueryType {
    A,
    Aaaa,
    Mx,
    Txt,

    /// Any record type, the `*` query type.
    Any,
}

impl QueryType {
    /// Returns the record type to use in the question.
    pub fn rtype(self) -> Rtype {
        match self {
            QueryType::A => Rtype::A,
            QueryType::Aaaa => Rtype::AAAA,
            QueryType::Mx => Rtype::MX,
            QueryType::Txt => Rtype::TXT,
            QueryType::Any => Rtype::ANY,
        }
    }

    /// Returns the token used for the query type on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            QueryType::A => "a",
            QueryType::Aaaa => "aaaa",
            QueryType::Mx => "mx",
            QueryType::Txt => "txt",
            QueryType::Any => "any",
        }
    }
}

//--- From

impl From<QueryType> for Rtype {
    fn from(qtype: QueryType) -> Self {
        qtype.rtype()
    }
}

//--- FromStr and Display

impl str::FromStr for QueryType {
    type Err = UnknownQueryType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            QueryType::A,
            QueryType::Aaaa,
            QueryType::Mx,
            QueryType::Txt,
            QueryType::Any,
        ]
        .into_iter()
        .find(|qtype| s.eq_ignore_ascii_case(qtype.as_str()))
        .ok_or(UnknownQueryType)
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//------------ UnknownQueryType ----------------------------------------------

/// A string was not one of the query type tokens.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UnknownQueryType;

impl fmt::Display for UnknownQueryType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("expected one of a, aaaa, mx, txt, any")
    }
}

impl std::error::Error for UnknownQueryType {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::message::decode_message;

    #[test]
    fn example_query() {
        assert_eq!(
            encode_query(0xABCD, "example.com", QueryType::A).unwrap(),
            [
                0xAB, 0xCD, 0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00,
                0x00, 0x00, 0x07, 0x65, 0x78, 0x61, 0x6D, 0x70, 0x6C, 0x65,
                0x03, 0x63, 0x6F, 0x6D, 0x00, 0x00, 0x01, 0x00, 0x01,
            ]
        );
    }

    #[test]
    fn query_types() {
        for (token, qtype, rtype) in [
            ("a", QueryType::A, 1),
            ("AAAA", QueryType::Aaaa, 28),
            ("mx", QueryType::Mx, 15),
            ("Txt", QueryType::Txt, 16),
            ("any", QueryType::Any, 255),
        ] {
            assert_eq!(token.parse(), Ok(qtype));
            assert_eq!(qtype.rtype().to_int(), rtype);
            let query = encode_query(1, "example.com", qtype).unwrap();
            let len = query.len();
            assert_eq!(&query[len - 4..len - 2], &rtype.to_be_bytes());
        }
        assert_eq!("ns".parse::<QueryType>(), Err(UnknownQueryType));
    }

    #[test]
    fn decodes_back() {
        let query = encode_query(7, "www.example.org.", QueryType::Mx).unwrap();
        let msg = decode_message(&query).unwrap();
        assert_eq!(msg.header().id(), 7);
        assert!(!msg.header().qr());
        assert!(msg.header().rd());
        assert_eq!(msg.header().opcode(), Opcode::Query);
        assert_eq!(
            msg.questions(),
            [Question::new_in("www.example.org", Rtype::MX)]
        );
    }

    #[test]
    fn bad_hostname() {
        assert_eq!(
            encode_query(1, &"x".repeat(64), QueryType::A),
            Err(EncodeError::LabelTooLong)
        );
    }
}
