//! Encoding DNS queries and decoding DNS messages.
//!
//! This crate provides the wire format handling for a simple DNS client:
//! building a query with a single question, and decoding whatever message
//! comes back, compressed names and all, into owned Rust values.
//!
//! # Modules
//!
//! * [base] contains the wire format codec: the header, domain names,
//!   questions, resource records, and complete messages,
//! * [rdata] contains the record data of the record types that are
//!   decoded into specific types,
//! * [client] contains a minimal blocking UDP transport, and
//! * [logging] sets up a `tracing` subscriber for binaries if the `cli`
//!   feature is enabled.
//!
//! The most commonly used items are re-exported at the crate root.
//!
//! # Example
//!
//! ```
//! use dnsmsg::{decode_message, encode_query, QueryType, Status};
//!
//! let query = encode_query(0x1234, "example.com", QueryType::Mx).unwrap();
//! let msg = decode_message(&query).unwrap();
//! assert_eq!(msg.status(), Status::NoError);
//! assert_eq!(msg.questions().len(), 1);
//! ```
//!
//! # Reference of Feature Flags
//!
//! * `rand`: Enables a random number generator for transaction IDs via
//!   the [rand](https://github.com/rust-random/rand) crate. This feature is
//!   enabled by default.
//! * `cli`: Enables the [logging] module and the `dns-query` binary. This
//!   pulls in `clap` and `tracing-subscriber` and implies `rand`. It is
//!   enabled by default.

#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use self::base::{
    decode_message, decode_name, encode_name, encode_query, DecodeError,
    EncodeError, Message, QueryType, Status,
};

pub mod base;
pub mod client;
#[cfg(feature = "cli")]
#[cfg_attr(docsrs, doc(cfg(feature = "cli")))]
pub mod logging;
pub mod rdata;
