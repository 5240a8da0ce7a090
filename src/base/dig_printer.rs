use core::fmt;

use super::message::Message;
use super::record::Section;

/// Interal type for printing a message in dig style
///
/// This is only exposed to users of this library as `impl fmt::Display`.
pub(super) struct DigPrinter<'a> {
    pub msg: &'a Message,
}

impl<'a> fmt::Display for DigPrinter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = self.msg;

        // Header
        let header = msg.header();
        let counts = msg.counts();

        writeln!(
            f,
            ";; ->>HEADER<<- opcode: {}, rcode: {}, id: {}",
            header.opcode(),
            header.rcode(),
            header.id()
        )?;
        write!(f, ";; flags: {}", header.flags())?;
        writeln!(
            f,
            "; QUERY: {}, ANSWER: {}, AUTHORITY: {}, ADDITIONAL: {}",
            counts.qdcount(),
            counts.ancount(),
            counts.nscount(),
            counts.arcount()
        )?;

        if msg.is_error() {
            writeln!(f, ";; status: {}", msg.status())?;
            return Ok(());
        }

        // Question
        if !msg.questions().is_empty() {
            writeln!(f, "\n;; QUESTION SECTION:")?;
            for item in msg.questions() {
                writeln!(f, ";{}", item)?;
            }
        }

        // Answer, Authority, and Additional
        let mut section = Some(Section::Answer);
        while let Some(current) = section {
            let records = msg.section(current);
            if !records.is_empty() {
                writeln!(f, "\n;; {} SECTION:", current)?;
                for item in records {
                    writeln!(f, "{}", item)?;
                }
            }
            section = current.next_section();
        }

        if msg.has_trailing_unparsed_bytes() {
            writeln!(
                f,
                "\n;; {} octets of unread data left over",
                msg.trailing_len()
            )?;
        }

        Ok(())
    }
}

//------------ HexDump -------------------------------------------------------

/// A raw dump of a message’s octets.
///
/// Each octet is written on a line of its own with its offset, its value
/// in hexadecimal and decimal, and the character it represents if that is
/// printable ASCII.
#[derive(Clone, Copy, Debug)]
pub struct HexDump<'a>(pub &'a [u8]);

impl<'a> fmt::Display for HexDump<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pos, &ch) in self.0.iter().enumerate() {
            let printable = if ch.is_ascii_graphic() || ch == b' ' {
                char::from(ch)
            } else {
                '.'
            };
            writeln!(f, "{:02}: {:02x} {:03} '{}'", pos, ch, ch, printable)?;
        }
        Ok(())
    }
}

//============ Testing =======================================================
