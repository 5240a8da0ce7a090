//! IANA Definitions for DNS.
//!
//! This module contains types for parameters defined in IANA registries
//! that are relevant for this crate.
//!
//! All types defined hereunder follow the same basic structure. They wrap
//! the raw integer value and provide associated constants for the values
//! with a well-known mnemonic. There are two methods `from_int()` and
//! `to_int()` to convert from and to raw integer values as well as
//! implementations of the `From` trait for these. `FromStr` and `Display`
//! are implemented to convert from the string codes to the values and back.
//!
//! Types also implement `parse()` for creation from wire format and
//! `compose()` for composing into wire format data. The exception is
//! [`Rcode`] which only ever lives in four bits of the message header.

pub use self::class::Class;
pub use self::opcode::Opcode;
pub use self::rcode::Rcode;
pub use self::rtype::Rtype;

#[macro_use]
mod macros;

pub mod class;
pub mod opcode;
pub mod rcode;
pub mod rtype;
