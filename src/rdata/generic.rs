//! Record data for types without a specific implementation.

use crate::base::iana::Rtype;
use core::fmt;
use std::vec::Vec;

//------------ UnknownRecordData --------------------------------------------

/// The record data of a type this crate doesn’t understand.
///
/// The data is kept as the raw octets. The `Display` impl uses the generic
/// format defined in [RFC 3597], a `\#` followed by the length and the data
/// in hexadecimal.
///
/// [RFC 3597]: https://tools.ietf.org/html/rfc3597
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct UnknownRecordData {
    rtype: Rtype,
    data: Vec<u8>,
}

impl UnknownRecordData {
    pub fn from_octets(rtype: Rtype, data: Vec<u8>) -> Self {
        UnknownRecordData { rtype, data }
    }

    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

//--- Display

impl fmt::Display for UnknownRecordData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\\# {}", self.data.len())?;
        for chunk in self.data.chunks(4) {
            f.write_str(" ")?;
            for ch in chunk {
                write!(f, "{:02x}", ch)?;
            }
        }
        Ok(())
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        let data = UnknownRecordData::from_octets(
            Rtype::from_int(99),
            b"\x01\x02\x03\x04\xab".to_vec(),
        );
        assert_eq!(data.to_string(), "\\# 5 01020304 ab");

        let empty = UnknownRecordData::from_octets(Rtype::SOA, Vec::new());
        assert_eq!(empty.to_string(), "\\# 0");
    }
}
