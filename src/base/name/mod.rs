//! Domain names.
//!
//! Domain names are a sequence of labels. In wire format each label is
//! preceded by a length octet and the name is terminated by the empty root
//! label. Inside a message, a name may instead end in a compression pointer
//! referring to the remainder of the name spelled out earlier in the message.
//!
//! This module provides the two halves of the name codec: [`encode_name`]
//! builds the uncompressed wire format of a dotted host name and
//! [`decode_name`] resolves a possibly compressed name inside a message back
//! into text.

pub use self::label::{LabelType, MAX_LABEL_LEN, MAX_NAME_LEN};
pub use self::parsed::{decode_name, parse_name, MAX_COMPRESSION_DEPTH};

use super::wire::EncodeError;
use std::vec::Vec;

mod label;
mod parsed;

//------------ encode_name ---------------------------------------------------

/// Encodes a dotted host name into wire format.
///
/// Each label of `hostname` is emitted as a length octet followed by the
/// label’s octets, and the name is terminated by a zero octet. A single
/// trailing dot is accepted and ignored, so `"example.com."` and
/// `"example.com"` encode identically. Both `""` and `"."` encode as the
/// root name. No compression is ever used.
///
/// # Errors
///
/// Returns [`EncodeError::LabelTooLong`] if a label is longer than 63
/// octets, [`EncodeError::EmptyLabel`] for two consecutive dots or a
/// leading dot, and [`EncodeError::LongName`] if the result would exceed
/// 255 octets.
///
/// # Example
///
/// ```
/// use dnsmsg::base::name::encode_name;
///
/// assert_eq!(
///     encode_name("example.com").unwrap(),
///     b"\x07example\x03com\x00"
/// );
/// ```
pub fn encode_name(hostname: &str) -> Result<Vec<u8>, EncodeError> {
    let hostname = hostname.strip_suffix('.').unwrap_or(hostname);
    let mut res = Vec::with_capacity(hostname.len() + 2);
    if !hostname.is_empty() {
        for label in hostname.split('.') {
            if label.is_empty() {
                return Err(EncodeError::EmptyLabel);
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(EncodeError::LabelTooLong);
            }
            res.push(label.len() as u8);
            res.extend_from_slice(label.as_bytes());
        }
    }
    res.push(0);
    if res.len() > MAX_NAME_LEN {
        return Err(EncodeError::LongName);
    }
    Ok(res)
}

//============ Testing =======================================================
