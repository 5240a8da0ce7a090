//! Domain names parsed from a DNS message.
//!
//! This is a private module. Its public items are re-exported by the parent.

use super::super::wire::DecodeError;
use super::label::{LabelType, MAX_LABEL_LEN, MAX_NAME_LEN};
use octseq::parse::Parser;
use std::string::String;
use tracing::trace;

/// The maximum number of compression pointers followed for a single name.
pub const MAX_COMPRESSION_DEPTH: usize = 128;

//------------ decode_name ---------------------------------------------------

/// Decodes the possibly compressed domain name starting at `start`.
///
/// The `message` has to be the complete message since compression pointers
/// are offsets from its start. Nothing at or beyond `end` is read; an `end`
/// beyond the length of `message` is treated as the length of `message`.
///
/// Returns the name in its textual form, labels separated by dots and
/// without a trailing dot, or `"."` for the root name, together with the
/// offset of the first octet following the encoded name. If the name ends
/// in a compression pointer, that offset is right behind the two octets of
/// the pointer no matter how long the name pointed to is.
///
/// At least two octets have to be available at `start`, even for a root
/// label, or [`DecodeError::Truncated`] is returned.
///
/// A compression pointer must point to a position before the start of the
/// labels it ends, i.e., before `start` for the first pointer and before
/// the target of the previous pointer for every further one. This rules out
/// self references, forward references, and loops through earlier labels.
/// In addition, no more than [`MAX_COMPRESSION_DEPTH`] pointers are
/// followed. Any violation results in [`DecodeError::CompressionLoop`].
///
/// # Example
///
/// ```
/// use dnsmsg::base::name::decode_name;
///
/// let msg = b"\x07example\x03com\x00\x03www\xc0\x00";
/// assert_eq!(
///     decode_name(msg, 13, msg.len()),
///     Ok((String::from("www.example.com"), 19))
/// );
/// ```
pub fn decode_name(
    message: &[u8],
    start: usize,
    end: usize,
) -> Result<(String, usize), DecodeError> {
    let end = end.min(message.len());
    let mut parser = Parser::from_ref(&message[..end]);
    parser.seek(start)?;
    parser.check_len(2)?;
    let name = parse_name(&mut parser)?;
    Ok((name, parser.pos()))
}

/// Takes a domain name from the beginning of `parser`.
///
/// The parser has to range over the whole message starting at offset zero
/// for compression pointers to resolve. On success, it is positioned right
/// behind the name.
pub fn parse_name(parser: &mut Parser<'_, [u8]>) -> Result<String, DecodeError> {
    let mut name = NameText::default();
    let start = parser.pos();
    parse_labels(parser, start, 0, &mut name)?;
    Ok(name.finish())
}

/// Parses the labels at the parser’s position and appends them to `name`.
///
/// The labels are part of a run that started at `limit`. A pointer is
/// followed on a copy of the parser, so `parser` itself only ever moves
/// across the two octets of the pointer.
fn parse_labels(
    parser: &mut Parser<'_, [u8]>,
    limit: usize,
    depth: usize,
    name: &mut NameText,
) -> Result<(), DecodeError> {
    let pos = parser.pos();
    match LabelType::parse(parser)? {
        LabelType::Root => Ok(()),
        LabelType::Normal(len) => {
            // The label plus at least the header of what follows it.
            parser.check_len(len + 1)?;
            let mut buf = [0u8; MAX_LABEL_LEN];
            parser.parse_buf(&mut buf[..len])?;
            name.push_label(&buf[..len])?;
            parse_labels(parser, limit, depth, name)
        }
        LabelType::Compressed(target) => {
            if target >= limit || depth >= MAX_COMPRESSION_DEPTH {
                return Err(DecodeError::CompressionLoop);
            }
            trace!(pos, target, depth, "following compression pointer");
            let mut target_parser = *parser;
            target_parser.seek(target)?;
            parse_labels(&mut target_parser, target, depth + 1, name)
        }
    }
}

//------------ NameText ------------------------------------------------------

/// The textual form of a name being assembled label by label.
#[derive(Default)]
struct NameText {
    text: String,

    /// The wire length of the labels so far, without the root label.
    wire_len: usize,
}

impl NameText {
    fn push_label(&mut self, label: &[u8]) -> Result<(), DecodeError> {
        self.wire_len += label.len() + 1;
        if self.wire_len >= MAX_NAME_LEN {
            return Err(DecodeError::form_error("long domain name"));
        }
        if !self.text.is_empty() {
            self.text.push('.');
        }
        self.text.push_str(&String::from_utf8_lossy(label));
        Ok(())
    }

    fn finish(self) -> String {
        if self.text.is_empty() {
            String::from(".")
        } else {
            self.text
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use std::vec::Vec;

    fn decode(slice: &[u8], start: usize) -> Result<(String, usize), DecodeError> {
        decode_name(slice, start, slice.len())
    }

    fn ok(name: &str, next: usize) -> Result<(String, usize), DecodeError> {
        Ok((String::from(name), next))
    }

    #[test]
    fn uncompressed() {
        assert_eq!(decode(b"\x00\x00", 0), ok(".", 1));
        assert_eq!(decode_name(b"\x00\x00\x01", 0, 2), ok(".", 1));
        assert_eq!(
            decode(b"\x03www\x07example\x03com\x00\x00\x01", 0),
            ok("www.example.com", 17)
        );
        assert_eq!(
            decode(b"xx\x03www\x07example\x03com\x00", 2),
            ok("www.example.com", 19)
        );
    }

    #[test]
    fn compressed() {
        // once: labels followed by a pointer
        let msg = b"\x03com\x00\x03www\x07example\xc0\x00";
        assert_eq!(decode(msg, 5), ok("www.example.com", 19));

        // twice: a pointer to a name that ends in a pointer
        let msg = b"\x03com\x00\x07example\xc0\x00\x03www\xc0\x05";
        assert_eq!(decode(msg, 15), ok("www.example.com", 21));

        // copy: a bare pointer advances the position by two
        let msg = b"\x03www\x07example\x03com\x00\xc0\x00";
        assert_eq!(decode(msg, 17), ok("www.example.com", 19));

        // pointer to a root label
        let msg = b"\x00\x03www\xc0\x00";
        assert_eq!(decode(msg, 1), ok("www", 7));
    }

    #[test]
    fn short_input() {
        // In the middle of a label.
        assert_eq!(decode(b"\x03www\x07exam", 0), Err(DecodeError::Truncated));

        // At the end of a label.
        assert_eq!(
            decode(b"\x03www\x07example", 0),
            Err(DecodeError::Truncated)
        );

        // Half a pointer.
        assert_eq!(decode(b"\x03www\xc0", 0), Err(DecodeError::Truncated));

        // A root label alone is not enough.
        assert_eq!(decode(b"\x00", 0), Err(DecodeError::Truncated));
        assert_eq!(
            decode_name(b"\x00\x00", 0, 1),
            Err(DecodeError::Truncated)
        );
        assert_eq!(decode(b"xx\x00", 2), Err(DecodeError::Truncated));

        // Start at or beyond the end.
        assert_eq!(decode(b"\x00", 1), Err(DecodeError::Truncated));
        assert_eq!(decode(b"\x00", 5), Err(DecodeError::Truncated));

        // The end bound is honoured even if the buffer goes on.
        assert_eq!(
            decode_name(b"\x03www\x00", 0, 4),
            Err(DecodeError::Truncated)
        );

        // Compression pointer beyond the end of the buffer is also a
        // forward pointer.
        assert_eq!(
            decode(b"\x03www\xc0\xee12", 0),
            Err(DecodeError::CompressionLoop)
        );
    }

    #[test]
    fn bad_pointers() {
        // Pointer to itself.
        assert_eq!(
            decode(b"\x03www\xc0\x0412", 4),
            Err(DecodeError::CompressionLoop)
        );

        // Pointer forward.
        assert_eq!(
            decode(b"\x03www\xc0\x06\x00\x00", 4),
            Err(DecodeError::CompressionLoop)
        );

        // Single-step infinite recursion.
        assert_eq!(decode(b"\xc0\x0012", 0), Err(DecodeError::CompressionLoop));

        // Two-step infinite recursion.
        assert_eq!(
            decode(b"\xc0\x02\xc0\x0012", 2),
            Err(DecodeError::CompressionLoop)
        );

        // Pointer back to the labels it ends.
        assert_eq!(
            decode(b"\x03www\xc0\x0012", 0),
            Err(DecodeError::CompressionLoop)
        );

        // Pointer into the labels of the previous pointer’s target.
        assert_eq!(
            decode(b"\x00\x03www\xc0\x02\xc0\x01", 7),
            Err(DecodeError::CompressionLoop)
        );
    }

    #[test]
    fn pointer_depth() {
        // A root label followed by a chain of pointers each pointing at
        // the previous one.
        fn chain(len: usize) -> Vec<u8> {
            let mut buf = vec![0u8];
            let mut target = 0u16;
            for _ in 0..len {
                let pos = buf.len() as u16;
                buf.extend_from_slice(&(0xC000 | target).to_be_bytes());
                target = pos;
            }
            buf
        }

        let buf = chain(MAX_COMPRESSION_DEPTH);
        assert_eq!(decode(&buf, buf.len() - 2), ok(".", buf.len()));

        let buf = chain(MAX_COMPRESSION_DEPTH + 1);
        assert_eq!(
            decode(&buf, buf.len() - 2),
            Err(DecodeError::CompressionLoop)
        );
    }

    #[test]
    fn bad_label() {
        assert!(matches!(
            decode(b"\x03www\x07example\xbffoo", 0),
            Err(DecodeError::Form(_))
        ));
    }

    #[test]
    fn long_name() {
        // 255 octets is fine.
        let mut buf = Vec::from(&b"\x03123\0"[..]);
        for _ in 0..25 {
            buf.extend_from_slice(b"\x09123456789");
        }
        buf.extend_from_slice(b"\xc0\x0012");
        let (name, next) = decode(&buf, 5).unwrap();
        assert_eq!(name.len(), 253);
        assert_eq!(next, buf.len() - 2);

        // 256 octets are bad.
        let mut buf = Vec::from(&b"\x041234\x00"[..]);
        for _ in 0..25 {
            buf.extend_from_slice(b"\x09123456789");
        }
        buf.extend_from_slice(b"\xc0\x0012");
        assert!(matches!(decode(&buf, 6), Err(DecodeError::Form(_))));
    }
}
