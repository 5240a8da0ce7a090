//! DNS OpCodes.

//------------ Opcode --------------------------------------------------------

int_enum! {
    /// DNS OpCodes.
    ///
    /// The opcode specifies the kind of query to be performed. It occupies
    /// four bits of the message header.
    ///
    /// The opcode and its initial set of values are defined in [RFC 1035].
    /// Additional values have been defined over time. All currently assigned
    /// values can be found in the [IANA registry].
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    /// [IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-5
    =>
    Opcode, u8;

    /// A standard query (0).
    ///
    /// This query requests all records matching the name, class, and record
    /// type given in the query’s question section.
    (Query => 0, "QUERY")

    /// An inverse query (IQUERY) (1, obsolete).
    ///
    /// This kind of query has always been optional, was never widely
    /// supported, and has therefore been declared obsolete by RFC 3425.
    (IQuery => 1, "IQUERY")

    /// A server status request (2).
    (Status => 2, "STATUS")

    /// A NOTIFY query (4).
    ///
    /// NOTIFY queries allow primary servers to inform secondary servers when
    /// a zone has changed. Defined in RFC 1996.
    (Notify => 4, "NOTIFY")

    /// An UPDATE query (5).
    ///
    /// Defined in RFC 2136.
    (Update => 5, "UPDATE")
}

int_enum_str_with_decimal!(Opcode, u8, "unknown opcode");
