use rstest::rstest;

use dnsmsg::base::iana::{Class, Rcode, Rtype};
use dnsmsg::base::name::decode_name;
use dnsmsg::base::Section;
use dnsmsg::rdata::{RecordData, Txt};
use dnsmsg::{decode_message, encode_query, DecodeError, QueryType, Status};

//----------- Test Messages --------------------------------------------------

/// example.com MX with a compressed answer and a glue record.
const MX_RESPONSE: &[u8] = b"\
    \x12\x34\x81\x80\x00\x01\x00\x01\x00\x00\x00\x01\
    \x07example\x03com\x00\x00\x0f\x00\x01\
    \xc0\x0c\x00\x0f\x00\x01\x00\x00\x0e\x10\x00\x09\
        \x00\x0a\x04mail\xc0\x0c\
    \x04mail\xc0\x0c\x00\x01\x00\x01\x00\x00\x0e\x10\x00\x04\
        \xc0\x00\x02\x01";

/// example.com TXT with two character strings.
const TXT_RESPONSE: &[u8] = b"\
    \x00\x01\x81\x80\x00\x01\x00\x01\x00\x00\x00\x00\
    \x07example\x03com\x00\x00\x10\x00\x01\
    \xc0\x0c\x00\x10\x00\x01\x00\x00\x01\x2c\x00\x0c\
        \x05hello\x05world";

/// example.com AAAA with the SOA of the zone in the authority section.
///
/// The SOA record data is kept opaque.
const AAAA_RESPONSE: &[u8] = b"\
    \xbe\xef\x81\x80\x00\x01\x00\x01\x00\x01\x00\x00\
    \x07example\x03com\x00\x00\x1c\x00\x01\
    \xc0\x0c\x00\x1c\x00\x01\x00\x00\x0e\x10\x00\x10\
        \x26\x06\x28\x00\x02\x20\x00\x01\x02\x48\x18\x93\x25\xc8\x19\x46\
    \xc0\x0c\x00\x06\x00\x01\x00\x00\x0e\x10\x00\x04\
        \xde\xad\xbe\xef";

/// A name error for nonexistent.example.
const NXDOMAIN_RESPONSE: &[u8] = b"\
    \xab\xcd\x81\x83\x00\x01\x00\x00\x00\x00\x00\x00\
    \x0bnonexistent\x07example\x00\x00\x01\x00\x01";

//----------- Tests ----------------------------------------------------------

#[rstest]
#[case::mx(MX_RESPONSE)]
#[case::txt(TXT_RESPONSE)]
#[case::aaaa(AAAA_RESPONSE)]
fn truncated_at_every_offset(#[case] msg: &[u8]) {
    assert!(decode_message(msg).is_ok());
    for len in 0..msg.len() {
        let expected = if len < 12 {
            DecodeError::TooShort
        } else {
            DecodeError::Truncated
        };
        assert_eq!(
            decode_message(&msg[..len]),
            Err(expected),
            "len {}",
            len
        );
    }
}

#[rstest]
#[case::a(QueryType::A, Rtype::A)]
#[case::aaaa(QueryType::Aaaa, Rtype::AAAA)]
#[case::mx(QueryType::Mx, Rtype::MX)]
#[case::txt(QueryType::Txt, Rtype::TXT)]
#[case::any(QueryType::Any, Rtype::ANY)]
fn query_round_trip(#[case] qtype: QueryType, #[case] rtype: Rtype) {
    let wire = encode_query(0xABCD, "mail.example.com", qtype).unwrap();
    let msg = decode_message(&wire).unwrap();
    assert_eq!(msg.header().id(), 0xABCD);
    assert!(!msg.header().qr());
    assert!(msg.header().rd());
    assert_eq!(msg.counts().qdcount(), 1);
    assert_eq!(msg.counts().rr_count(), 0);
    let question = msg.first_question().unwrap();
    assert_eq!(question.qname(), "mail.example.com");
    assert_eq!(question.qtype(), rtype);
    assert_eq!(question.qclass(), Class::IN);
    assert!(!msg.has_trailing_unparsed_bytes());
}

#[test]
fn example_query_bytes() {
    let wire = encode_query(0xABCD, "example.com", QueryType::A).unwrap();
    assert_eq!(
        &wire[..12],
        b"\xab\xcd\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00"
    );
    assert_eq!(
        &wire[12..],
        b"\x07\x65\x78\x61\x6d\x70\x6c\x65\x03\x63\x6f\x6d\x00\
          \x00\x01\x00\x01"
    );
}

#[test]
fn compressed_answer_owner() {
    // The answer’s owner at offset 29 is a pointer to the question name.
    let end = MX_RESPONSE.len();
    let (question, _) = decode_name(MX_RESPONSE, 12, end).unwrap();
    let (owner, next) = decode_name(MX_RESPONSE, 29, end).unwrap();
    assert_eq!(owner, question);
    assert_eq!(next, 31);

    let msg = decode_message(MX_RESPONSE).unwrap();
    assert_eq!(msg.answer()[0].owner(), "example.com");
    assert_eq!(msg.answer()[0].data().to_string(), "10 mail.example.com");
    assert_eq!(msg.additional()[0].owner(), "mail.example.com");
}

#[test]
fn server_error_is_not_a_failure() {
    let msg = decode_message(NXDOMAIN_RESPONSE).unwrap();
    assert_eq!(msg.status(), Status::ServerError(Rcode::NXDomain));
    assert_eq!(msg.rcode().to_int(), 3);
    assert!(msg.questions().is_empty());
    assert_eq!(msg.counts().qdcount(), 1);

    // The low four bits make the rcode.
    let mut buf = Vec::from(NXDOMAIN_RESPONSE);
    buf[3] = 0x0f;
    let msg = decode_message(&buf).unwrap();
    assert_eq!(msg.status(), Status::ServerError(Rcode::from_int(15)));
}

#[test]
fn txt_strings() {
    let msg = decode_message(TXT_RESPONSE).unwrap();
    assert_eq!(msg.answer().len(), 1);
    match msg.answer()[0].data() {
        RecordData::Txt(txt) => {
            assert_eq!(txt.len(), 2);
            assert_eq!(txt.text(), "hello world");
            assert_eq!(txt.to_string(), "\"hello\" \"world\"");
        }
        other => panic!("unexpected record data {:?}", other),
    }
}

#[test]
fn single_txt_string() {
    let mut buf = Vec::from(&TXT_RESPONSE[..TXT_RESPONSE.len() - 6]);
    buf[40] = 6;
    let msg = decode_message(&buf).unwrap();
    assert_eq!(
        msg.answer()[0].data(),
        &RecordData::Txt(Txt::new(vec![b"hello".to_vec()]))
    );
}

#[rstest]
#[case::string_beyond_rdata(6, b"\x09hello")]
#[case::rdata_beyond_message(20, b"\x05hello")]
fn bad_txt_length(#[case] rdlen: u8, #[case] rdata: &[u8]) {
    let mut buf = Vec::from(&TXT_RESPONSE[..TXT_RESPONSE.len() - 12]);
    buf[40] = rdlen;
    buf.extend_from_slice(rdata);
    assert_eq!(decode_message(&buf), Err(DecodeError::Truncated));
}

#[test]
fn unsupported_record_type() {
    let msg = decode_message(AAAA_RESPONSE).unwrap();
    assert_eq!(
        msg.answer()[0].data().to_string(),
        "2606:2800:220:1:248:1893:25c8:1946"
    );
    let soa = &msg.authority()[0];
    assert_eq!(soa.rtype(), Rtype::SOA);
    assert!(!soa.data().is_supported());
    assert_eq!(soa.data().to_string(), "\\# 4 deadbeef");

    let sections: Vec<_> = msg.records().map(|(section, _)| section).collect();
    assert_eq!(sections, [Section::Answer, Section::Authority]);
}

#[test]
fn trailing_unparsed_bytes() {
    let mut buf = Vec::from(TXT_RESPONSE);
    buf.push(0);
    let msg = decode_message(&buf).unwrap();
    assert!(msg.has_trailing_unparsed_bytes());
    assert_eq!(msg.parsed_counts(), msg.counts());
}

#[test]
fn overstated_counts() {
    let mut buf = Vec::from(TXT_RESPONSE);
    buf[11] = 1;
    assert_eq!(decode_message(&buf), Err(DecodeError::Truncated));
}

#[rstest]
#[case::self_reference(29, b"\xc0\x1d")]
#[case::forward(29, b"\xc0\x30")]
#[case::question(12, b"\xc0\x0c")]
fn malicious_pointers(#[case] pos: usize, #[case] pointer: &[u8]) {
    let mut buf = Vec::from(TXT_RESPONSE);
    buf[pos..pos + 2].copy_from_slice(pointer);
    assert_eq!(decode_message(&buf), Err(DecodeError::CompressionLoop));
}
