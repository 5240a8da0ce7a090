//! Basics.
//!
//! This module provides the types for working with DNS messages in wire
//! format.
//!
//!
//! ## Parsing and Composing Messages
//!
//! In order to easily distinguish the process of creating and disecting
//! wire-format messages from other forms of representation conversion, we
//! use the term *parsing* for extracting data from a wire-format
//! representation and *composing* for producing such a representation.
//!
//! Parsing always happens on a buffer holding a complete DNS message since
//! domain names may be compressed by referencing other parts of the message.
//! All parsing goes through [`octseq::parse::Parser`]; running out of data
//! anywhere results in [`DecodeError::Truncated`].
//!
//! The two entry points are [`decode_message`], which takes a complete
//! message and decodes it into a [`Message`], and [`encode_query`], which
//! builds a query with a single question.
//!
//!
//! # Types for DNS Data
//!
//! The types are arranged in submodules:
//!
//! * [header] for the header of DNS messages,
//! * [iana] for the various registered values,
//! * [name] for domain names and the name codec,
//! * [question] for questions,
//! * [record] for DNS resource records, and
//! * [message] and [message_builder] for complete messages.
//!
//! The record data of the individual record types lives in
//! [rdata](crate::rdata).

pub use self::dig_printer::HexDump;
pub use self::header::{Flags, Header, HeaderCounts, HeaderSection};
pub use self::iana::{Class, Opcode, Rcode, Rtype};
pub use self::message::{decode_message, Message, Status};
pub use self::message_builder::{encode_query, QueryType, UnknownQueryType};
pub use self::name::{decode_name, encode_name};
pub use self::question::Question;
pub use self::record::{Record, RecordHeader, Section};
pub use self::wire::{DecodeError, EncodeError, FormError};

mod dig_printer;
pub mod header;
pub mod iana;
pub mod message;
pub mod message_builder;
pub mod name;
pub mod question;
pub mod record;
pub mod wire;
