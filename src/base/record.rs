//! Resource Records.
//!
//! This module defines types related to DNS resource records. [`Record`]
//! contains a complete record with its data decoded into [`RecordData`].
//! [`RecordHeader`] contains the data from a record’s header, the first
//! couple of octets common to all records. [`Section`] names the message
//! section a record was found in.

use super::iana::{Class, Rtype};
use super::name::parse_name;
use super::wire::DecodeError;
use crate::rdata::RecordData;
use core::fmt;
use octseq::parse::Parser;
use std::string::String;

//------------ Section -------------------------------------------------------

/// The sections of a message that contain resource records.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Section {
    Answer,
    Authority,
    Additional,
}

impl Section {
    /// Returns the section following this one, if there is one.
    #[must_use]
    pub fn next_section(self) -> Option<Self> {
        match self {
            Section::Answer => Some(Section::Authority),
            Section::Authority => Some(Section::Additional),
            Section::Additional => None,
        }
    }
}

//--- Display

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Section::Answer => "ANSWER",
            Section::Authority => "AUTHORITY",
            Section::Additional => "ADDITIONAL",
        })
    }
}

//------------ Record --------------------------------------------------------

/// A DNS resource record.
///
/// All information available through the DNS is stored in resource records.
/// They have a three part key of a domain name, resource record type, and
/// class. The owner is the domain name the record is attached to. The time
/// to live (TTL) states how many seconds the record may be cached. The
/// record type is given by the record data.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Record {
    owner: String,
    class: Class,
    ttl: u32,
    data: RecordData,
}

impl Record {
    /// Creates a new record from its parts.
    pub fn new(
        owner: impl Into<String>,
        class: Class,
        ttl: u32,
        data: RecordData,
    ) -> Self {
        Record {
            owner: owner.into(),
            class,
            ttl,
            data,
        }
    }

    /// Returns the owner of the record.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the record type.
    pub fn rtype(&self) -> Rtype {
        self.data.rtype()
    }

    /// Returns the class of the record.
    pub fn class(&self) -> Class {
        self.class
    }

    /// Returns the record’s time-to-live in seconds.
    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Return a reference to the record data.
    pub fn data(&self) -> &RecordData {
        &self.data
    }

    /// Trades the record for its record data.
    pub fn into_data(self) -> RecordData {
        self.data
    }

    /// Takes a complete record from the beginning of `parser`.
    ///
    /// The parser has to range over the complete message.
    pub fn parse(parser: &mut Parser<'_, [u8]>) -> Result<Self, DecodeError> {
        RecordHeader::parse(parser)?.parse_into_record(parser)
    }
}

//--- Display

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.owner,
            self.ttl,
            self.class,
            self.rtype(),
            self.data
        )
    }
}

//------------ RecordHeader --------------------------------------------------

/// The header of a resource record.
///
/// This type encapsulates the common header of a resource record. It consists
/// of the owner, record type, class, TTL, and the length of the record data.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct RecordHeader {
    owner: String,
    rtype: Rtype,
    class: Class,
    ttl: u32,
    rdlen: u16,
}

impl RecordHeader {
    /// Creates a new record header from its components.
    pub fn new(
        owner: impl Into<String>,
        rtype: Rtype,
        class: Class,
        ttl: u32,
        rdlen: u16,
    ) -> Self {
        RecordHeader {
            owner: owner.into(),
            rtype,
            class,
            ttl,
            rdlen,
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    pub fn class(&self) -> Class {
        self.class
    }

    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Returns the length of the record data that follows the header.
    pub fn rdlen(&self) -> u16 {
        self.rdlen
    }

    /// Takes a record header from the beginning of `parser`.
    pub fn parse(parser: &mut Parser<'_, [u8]>) -> Result<Self, DecodeError> {
        Ok(RecordHeader::new(
            parse_name(parser)?,
            Rtype::parse(parser)?,
            Class::parse(parser)?,
            parser.parse_u32_be()?,
            parser.parse_u16_be()?,
        ))
    }

    /// Parses the remainder of the record and returns it.
    ///
    /// The method assumes that the parser is currently positioned right
    /// after the end of the record header.
    pub fn parse_into_record(
        self,
        parser: &mut Parser<'_, [u8]>,
    ) -> Result<Record, DecodeError> {
        let data =
            RecordData::parse(self.rtype, parser, usize::from(self.rdlen))?;
        Ok(Record::new(self.owner, self.class, self.ttl, data))
    }
}

//============ Testing =======================================================
