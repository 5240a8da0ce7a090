//! Label headers of domain names in wire format.
//!
//! This is a private module. Its public types are re-exported by the parent.

use super::super::wire::DecodeError;
use octseq::parse::Parser;

/// The maximum length of a label in octets.
pub const MAX_LABEL_LEN: usize = 63;

/// The maximum length of an encoded domain name in octets.
pub const MAX_NAME_LEN: usize = 255;

//------------ LabelType -----------------------------------------------------

/// The type of a label as given by its first octet.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LabelType {
    /// A normal label with its size in octets.
    ///
    /// The size is never zero.
    Normal(usize),

    /// The empty label terminating an absolute name.
    Root,

    /// A compression pointer with the message offset to continue at.
    Compressed(usize),
}

impl LabelType {
    /// Attempts to take a label type from the beginning of `parser`.
    ///
    /// For a compression pointer both of its octets are taken. The octets
    /// of a normal label are left in the parser.
    pub fn parse(parser: &mut Parser<'_, [u8]>) -> Result<Self, DecodeError> {
        let ltype = parser.parse_u8()?;
        match ltype {
            0 => Ok(LabelType::Root),
            1..=0x3F => Ok(LabelType::Normal(ltype.into())),
            0xC0..=0xFF => {
                let res = usize::from(parser.parse_u8()?);
                let res = res | ((usize::from(ltype) & 0x3F) << 8);
                Ok(LabelType::Compressed(res))
            }
            _ => Err(DecodeError::form_error("invalid label type")),
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    fn parse(slice: &[u8]) -> Result<LabelType, DecodeError> {
        LabelType::parse(&mut Parser::from_ref(slice))
    }

    #[test]
    fn label_types() {
        assert_eq!(parse(b"\x00"), Ok(LabelType::Root));
        assert_eq!(parse(b"\x03www"), Ok(LabelType::Normal(3)));
        assert_eq!(parse(b"\x3f"), Ok(LabelType::Normal(63)));
        assert_eq!(parse(b"\xc0\x0c"), Ok(LabelType::Compressed(12)));
        assert_eq!(parse(b"\xff\xff"), Ok(LabelType::Compressed(0x3fff)));
        assert_eq!(parse(b"\xc0"), Err(DecodeError::Truncated));
        assert_eq!(parse(b""), Err(DecodeError::Truncated));
        assert!(matches!(parse(b"\x40"), Err(DecodeError::Form(_))));
        assert!(matches!(parse(b"\xbf"), Err(DecodeError::Form(_))));
    }
}
