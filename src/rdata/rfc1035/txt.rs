//! Record data for the TXT record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::iana::Rtype;
use crate::base::wire::DecodeError;
use core::fmt;
use octseq::parse::Parser;
use std::string::String;
use std::vec::Vec;

//------------ Txt ----------------------------------------------------------

/// TXT record data.
///
/// TXT records hold descriptive text. The record data is a sequence of
/// character strings, each a length octet followed by up to 255 octets of
/// data. The strings are kept as is. [`Txt::text`] joins them with a single
/// space for a quick look while the `Display` impl quotes each of them.
///
/// The Txt record type is defined in [RFC 1035, section 3.3.14][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.14
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Txt {
    strings: Vec<Vec<u8>>,
}

impl Txt {
    /// The rtype of this record data type.
    pub const RTYPE: Rtype = Rtype::TXT;

    pub fn new(strings: Vec<Vec<u8>>) -> Self {
        Txt { strings }
    }

    /// Returns an iterator over the character strings.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.strings.iter().map(Vec::as_slice)
    }

    /// Returns the number of character strings.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Returns whether the record data has no character strings at all.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Returns the text of all character strings separated by spaces.
    ///
    /// Octets that aren’t valid UTF-8 are replaced.
    pub fn text(&self) -> String {
        let mut res = String::new();
        for item in self.iter() {
            if !res.is_empty() {
                res.push(' ');
            }
            res.push_str(&String::from_utf8_lossy(item));
        }
        res
    }

    /// Takes the record data from `parser`.
    ///
    /// The parser must end with the record data. Character strings are
    /// taken until it is exhausted. A string claiming more octets than are
    /// left results in [`DecodeError::Truncated`].
    pub fn parse(parser: &mut Parser<'_, [u8]>) -> Result<Self, DecodeError> {
        let mut strings = Vec::new();
        while parser.remaining() > 0 {
            let len = usize::from(parser.parse_u8()?);
            let mut item = vec![0u8; len];
            parser.parse_buf(&mut item)?;
            strings.push(item);
        }
        Ok(Txt { strings })
    }
}

//--- Display

impl fmt::Display for Txt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str("\"")?;
            for &ch in item {
                match ch {
                    b'"' | b'\\' => write!(f, "\\{}", char::from(ch))?,
                    0x20..=0x7E => write!(f, "{}", char::from(ch))?,
                    _ => write!(f, "\\{:03}", ch)?,
                }
            }
            f.write_str("\"")?;
        }
        Ok(())
    }
}

//============ Testing =======================================================
