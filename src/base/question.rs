//! A single question in a DNS message.
//!
//! This module defines the type `Question` which represents an entry in
//! the question section of a DNS message.

use super::iana::{Class, Rtype};
use super::name::{encode_name, parse_name};
use super::wire::{DecodeError, EncodeError};
use core::fmt;
use octseq::builder::infallible;
use octseq::parse::Parser;
use std::string::String;
use std::vec::Vec;

//------------ Question ------------------------------------------------------

/// A question in a DNS message.
///
/// In DNS, a question describes what is requested in a query. It consists
/// of three elements: a domain name, a record type, and a class. This type
/// represents such a question with the domain name in its textual form.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Question {
    /// The domain name of the question.
    qname: String,

    /// The record type of the question.
    qtype: Rtype,

    /// The class of the quesiton.
    qclass: Class,
}

/// # Creation and Conversion
///
impl Question {
    /// Creates a new question from its three componets.
    pub fn new(qname: impl Into<String>, qtype: Rtype, qclass: Class) -> Self {
        Question {
            qname: qname.into(),
            qtype,
            qclass,
        }
    }

    /// Creates a new question from a name and record type, assuming class IN.
    pub fn new_in(qname: impl Into<String>, qtype: Rtype) -> Self {
        Self::new(qname, qtype, Class::IN)
    }

    /// Converts the question into the qname.
    pub fn into_qname(self) -> String {
        self.qname
    }
}

/// # Field Access
///
impl Question {
    /// Returns a reference to the domain nmae in the question,
    pub fn qname(&self) -> &str {
        &self.qname
    }

    /// Returns the record type of the question.
    pub fn qtype(&self) -> Rtype {
        self.qtype
    }

    /// Returns the class of the question.
    pub fn qclass(&self) -> Class {
        self.qclass
    }
}

//--- From

impl<N: Into<String>> From<(N, Rtype, Class)> for Question {
    fn from((name, rtype, class): (N, Rtype, Class)) -> Self {
        Question::new(name, rtype, class)
    }
}

impl<N: Into<String>> From<(N, Rtype)> for Question {
    fn from((name, rtype): (N, Rtype)) -> Self {
        Question::new_in(name, rtype)
    }
}

//--- Parse and Compose

impl Question {
    /// Takes a question from the beginning of `parser`.
    ///
    /// The parser has to range over the complete message.
    pub fn parse(parser: &mut Parser<'_, [u8]>) -> Result<Self, DecodeError> {
        Ok(Question {
            qname: parse_name(parser)?,
            qtype: Rtype::parse(parser)?,
            qclass: Class::parse(parser)?,
        })
    }

    /// Appends the wire format of the question to `target`.
    ///
    /// The name is never compressed.
    pub fn compose(&self, target: &mut Vec<u8>) -> Result<(), EncodeError> {
        target.extend_from_slice(&encode_name(&self.qname)?);
        infallible(self.qtype.compose(target));
        infallible(self.qclass.compose(target));
        Ok(())
    }
}

//--- Display

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.qname, self.qtype, self.qclass)
    }
}

//============ Testing =======================================================
