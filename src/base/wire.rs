//! Creating and consuming data in wire format.

use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::ShortInput;

//------------ Compose -------------------------------------------------------

/// A type that can be appended to an octets builder in wire format.
pub trait Compose {
    /// The number of octets the composed value occupies.
    const COMPOSE_LEN: u16 = 0;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError>;
}

impl<'a, T: Compose + ?Sized> Compose for &'a T {
    const COMPOSE_LEN: u16 = T::COMPOSE_LEN;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        (*self).compose(target)
    }
}

impl Compose for u8 {
    const COMPOSE_LEN: u16 = 1;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(&[*self])
    }
}

macro_rules! compose_to_be_bytes {
    ( $type:ident ) => {
        impl Compose for $type {
            const COMPOSE_LEN: u16 = ($type::BITS >> 3) as u16;

            fn compose<Target: OctetsBuilder + ?Sized>(
                &self,
                target: &mut Target,
            ) -> Result<(), Target::AppendError> {
                target.append_slice(&self.to_be_bytes())
            }
        }
    };
}

compose_to_be_bytes!(u16);
compose_to_be_bytes!(u32);

//============ Error Types ===================================================

//------------ DecodeError ---------------------------------------------------

/// Decoding a message or one of its parts failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecodeError {
    /// The buffer is shorter than the twelve octet message header.
    TooShort,

    /// A field extends beyond the end of the data.
    Truncated,

    /// Following compression pointers did not lead to a name.
    ///
    /// Either a pointer didn’t point backwards or the chain of pointers
    /// was too long.
    CompressionLoop,

    /// The data is there but it is malformed.
    Form(FormError),
}

impl DecodeError {
    /// Creates a new decode error as a form error with the given message.
    pub fn form_error(msg: &'static str) -> Self {
        FormError::new(msg).into()
    }
}

//--- From

impl From<ShortInput> for DecodeError {
    fn from(_: ShortInput) -> Self {
        DecodeError::Truncated
    }
}

impl From<FormError> for DecodeError {
    fn from(err: FormError) -> Self {
        DecodeError::Form(err)
    }
}

//--- Display and Error

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DecodeError::TooShort => f.write_str("short message"),
            DecodeError::Truncated => f.write_str("unexpected end of input"),
            DecodeError::CompressionLoop => {
                f.write_str("invalid compression pointer")
            }
            DecodeError::Form(ref err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for DecodeError {}

//------------ FormError -----------------------------------------------------

/// A formatting error occured.
///
/// This is a generic error for all kinds of error cases that result in data
/// not being accepted. For diagnostics, the error is being given a static
/// string describing the error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FormError(&'static str);

impl FormError {
    /// Creates a new form error value with the given diagnostics string.
    pub fn new(msg: &'static str) -> Self {
        FormError(msg)
    }

    /// Returns the diagnostics string.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

//--- Display and Error

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for FormError {}

//------------ EncodeError ---------------------------------------------------

/// Encoding a name or a query failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EncodeError {
    /// A label was longer than 63 octets.
    LabelTooLong,

    /// The name contained an empty label, e.g., two consecutive dots.
    EmptyLabel,

    /// The encoded name would be longer than 255 octets.
    LongName,
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            EncodeError::LabelTooLong => f.write_str("long label"),
            EncodeError::EmptyLabel => f.write_str("empty label"),
            EncodeError::LongName => f.write_str("long domain name"),
        }
    }
}

impl std::error::Error for EncodeError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use octseq::parse::Parser;
    use std::vec::Vec;

    #[test]
    fn compose_be() {
        let mut buf = Vec::new();
        octseq::builder::infallible(0x1234u16.compose(&mut buf));
        octseq::builder::infallible(0xdeadbeefu32.compose(&mut buf));
        assert_eq!(buf, b"\x12\x34\xde\xad\xbe\xef");
        assert_eq!(u16::COMPOSE_LEN, 2);
        assert_eq!(u32::COMPOSE_LEN, 4);
    }

    #[test]
    fn short_input_is_truncated() {
        let mut parser = Parser::from_ref(&b"\x01"[..]);
        let err: DecodeError = parser.parse_u16_be().unwrap_err().into();
        assert_eq!(err, DecodeError::Truncated);
    }

    #[test]
    fn display() {
        assert_eq!(
            DecodeError::form_error("long domain name").to_string(),
            "long domain name"
        );
        assert_eq!(EncodeError::LabelTooLong.to_string(), "long label");
    }
}
