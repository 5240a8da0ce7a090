//! Accessing existing DNS messages.
//!
//! This module defines [`decode_message`] which takes a complete DNS message
//! in wire format and decodes it into a [`Message`]. All sections are
//! decoded eagerly in one linear scan so that a `Message`, once created,
//! owns everything it references and can’t fail on access.

use super::dig_printer::DigPrinter;
use super::header::{Header, HeaderCounts, HeaderSection};
use super::iana::{Rcode, Rtype};
use super::question::Question;
use super::record::{Record, Section};
use super::wire::DecodeError;
use crate::rdata::RecordData;
use core::fmt;
use octseq::parse::Parser;
use std::vec::Vec;
use tracing::debug;

//------------ decode_message ------------------------------------------------

/// Decodes a complete DNS message.
///
/// The header is decoded first. If the message is a response with a
/// non-zero response code, decoding stops there and the returned message
/// has a [`Status::ServerError`] status and empty sections. Otherwise the
/// number of questions and records given by the header counts are decoded
/// in order. Records are kept in the section they appear in.
///
/// Octets left over after the last record don’t cause an error. They are
/// only flagged; see [`Message::has_trailing_unparsed_bytes`].
///
/// # Errors
///
/// Returns [`DecodeError::TooShort`] if `bytes` can’t even hold the
/// twelve octet header. If any of the header counts promises more data than
/// is available, [`DecodeError::Truncated`] is returned. Malformed names
/// and record data result in [`DecodeError::CompressionLoop`] or
/// [`DecodeError::Form`].
///
/// # Example
///
/// ```
/// use dnsmsg::{decode_message, encode_query, QueryType};
///
/// let query = encode_query(0xABCD, "example.com", QueryType::A).unwrap();
/// let msg = decode_message(&query).unwrap();
/// assert_eq!(msg.header().id(), 0xABCD);
/// assert_eq!(msg.questions()[0].qname(), "example.com");
/// assert!(!msg.has_trailing_unparsed_bytes());
/// ```
pub fn decode_message(bytes: &[u8]) -> Result<Message, DecodeError> {
    if bytes.len() < HeaderSection::LEN {
        return Err(DecodeError::TooShort);
    }
    let mut parser = Parser::from_ref(bytes);
    let section = HeaderSection::parse(&mut parser)?;
    let header = *section.header();
    let counts = *section.counts();

    if header.qr() && header.rcode() != Rcode::NoError {
        debug!(
            id = header.id(),
            rcode = %header.rcode(),
            "response signals a server error"
        );
        return Ok(Message {
            section,
            status: Status::ServerError(header.rcode()),
            questions: Vec::new(),
            answer: Vec::new(),
            authority: Vec::new(),
            additional: Vec::new(),
            trailing: 0,
        });
    }

    let mut questions = Vec::new();
    for _ in 0..counts.qdcount() {
        questions.push(Question::parse(&mut parser)?);
    }

    let mut answer = Vec::new();
    let mut authority = Vec::new();
    let mut additional = Vec::new();
    for (target, count) in [
        (&mut answer, counts.ancount()),
        (&mut authority, counts.nscount()),
        (&mut additional, counts.arcount()),
    ] {
        for _ in 0..count {
            target.push(Record::parse(&mut parser)?);
        }
    }

    let trailing = parser.remaining();
    if trailing > 0 {
        debug!(trailing, "unread data left over after the last record");
    }
    debug!(
        id = header.id(),
        qr = header.qr(),
        questions = questions.len(),
        records = counts.rr_count(),
        "decoded message"
    );

    Ok(Message {
        section,
        status: Status::NoError,
        questions,
        answer,
        authority,
        additional,
        trailing,
    })
}

//------------ Status --------------------------------------------------------

/// The outcome a decoded message reports.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    /// A query or a successful response.
    ///
    /// All sections have been decoded.
    NoError,

    /// A response with the given non-zero response code.
    ///
    /// Only the header has been decoded. This is not a decoding failure
    /// but the server’s way of reporting a problem such as a non-existing
    /// name or a refused query.
    ServerError(Rcode),
}

impl Status {
    /// Returns whether the status is a server error.
    pub fn is_error(self) -> bool {
        matches!(self, Status::ServerError(_))
    }
}

//--- Display

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Status::NoError => f.write_str("NOERROR"),
            Status::ServerError(rcode) => {
                write!(f, "{} ({})", rcode, rcode.description())
            }
        }
    }
}

//------------ Message -------------------------------------------------------

/// A decoded DNS message.
///
/// The message consists of the header, the question section, and the three
/// record sections answer, authority, and additional. It is created by
/// [`decode_message`] and immutable afterwards.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Message {
    section: HeaderSection,
    status: Status,
    questions: Vec<Question>,
    answer: Vec<Record>,
    authority: Vec<Record>,
    additional: Vec<Record>,

    /// The number of octets following the last record.
    trailing: usize,
}

/// # Creation
///
impl Message {
    /// Decodes a message from a slice.
    ///
    /// This is the same as [`decode_message`].
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DecodeError> {
        decode_message(bytes)
    }
}

/// # Header Section
///
impl Message {
    /// Returns the message header.
    pub fn header(&self) -> Header {
        *self.section.header()
    }

    /// Returns the header counts as found in the message.
    pub fn counts(&self) -> HeaderCounts {
        *self.section.counts()
    }

    /// Returns the header counts derived from the decoded sections.
    ///
    /// For a message with a [`Status::ServerError`] status, these are all
    /// zero since no section has been decoded.
    pub fn parsed_counts(&self) -> HeaderCounts {
        let mut res = HeaderCounts::new();
        res.set_qdcount(count(self.questions.len()));
        res.set_ancount(count(self.answer.len()));
        res.set_nscount(count(self.authority.len()));
        res.set_arcount(count(self.additional.len()));
        res
    }

    /// Returns the status of the message.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the response code of the message.
    pub fn rcode(&self) -> Rcode {
        self.header().rcode()
    }

    /// Returns whether the response code is anything other than NoError.
    pub fn is_error(&self) -> bool {
        self.status.is_error()
    }

    /// Returns whether octets were left over after the last record.
    pub fn has_trailing_unparsed_bytes(&self) -> bool {
        self.trailing > 0
    }

    /// Returns the number of octets left over after the last record.
    pub fn trailing_len(&self) -> usize {
        self.trailing
    }
}

/// # Sections
///
impl Message {
    /// Returns the questions in the order they appear in the message.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Returns the first question, if there is one.
    pub fn first_question(&self) -> Option<&Question> {
        self.questions.first()
    }

    /// Returns the query type of the first question, if there is one.
    pub fn qtype(&self) -> Option<Rtype> {
        self.first_question().map(Question::qtype)
    }

    pub fn answer(&self) -> &[Record] {
        &self.answer
    }

    pub fn authority(&self) -> &[Record] {
        &self.authority
    }

    pub fn additional(&self) -> &[Record] {
        &self.additional
    }

    /// Returns the records of the given section.
    pub fn section(&self, section: Section) -> &[Record] {
        match section {
            Section::Answer => &self.answer,
            Section::Authority => &self.authority,
            Section::Additional => &self.additional,
        }
    }

    /// Returns an iterator over all records tagged with their section.
    pub fn records(&self) -> impl Iterator<Item = (Section, &Record)> + '_ {
        self.answer
            .iter()
            .map(|record| (Section::Answer, record))
            .chain(self.authority.iter().map(|record| (Section::Authority, record)))
            .chain(
                self.additional
                    .iter()
                    .map(|record| (Section::Additional, record)),
            )
    }
}

/// # Helpers for Common Tasks
///
impl Message {
    /// Returns whether this is the answer to some other message.
    ///
    /// The method checks whether the ID fields of the headers are the same,
    /// whether the QR flag is set in this message, and whether the
    /// questions are the same.
    pub fn is_answer(&self, query: &Message) -> bool {
        self.header().qr()
            && self.header().id() == query.header().id()
            && (self.is_error() || self.questions == query.questions)
    }

    /// Returns the last name in a chain of CNAME records.
    ///
    /// The chain starts at the name of the first question and follows
    /// CNAME records in the answer section. Returns `None` if there is no
    /// question.
    pub fn canonical_name(&self) -> Option<&str> {
        let mut name = self.first_question()?.qname();
        // Each record can be used once, so this can’t loop forever.
        for _ in 0..self.answer.len() {
            let next = self.answer.iter().find_map(|record| {
                match record.data() {
                    RecordData::Cname(cname)
                        if record.owner().eq_ignore_ascii_case(name) =>
                    {
                        Some(cname.cname())
                    }
                    _ => None,
                }
            });
            match next {
                Some(next) => name = next,
                None => break,
            }
        }
        Some(name)
    }
}

/// # Printing
///
impl Message {
    /// Displays the message in the style of the `dig` tool.
    ///
    /// This prints a header summary, the questions, and every record with
    /// its rendered record data, section by section. For a message with a
    /// server error status, only the header summary and the status are
    /// printed.
    pub fn display_dig_style(&self) -> impl fmt::Display + '_ {
        DigPrinter { msg: self }
    }
}

fn count(len: usize) -> u16 {
    u16::try_from(len).unwrap_or(u16::MAX)
}

//============ Testing =======================================================
