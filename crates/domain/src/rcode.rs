//! DNS response codes as they appear on the `rcode` metric label.

pub const NOERROR: u16 = 0;
pub const NXDOMAIN: u16 = 3;

/// Mnemonic for a response code (RFC 1035, RFC 2136, RFC 2845, RFC 7873).
///
/// Codes without a registered mnemonic share the `UNKNOWN` label so the
/// label set stays bounded.
pub fn rcode_label(rcode: u16) -> &'static str {
    match rcode {
        0 => "NOERROR",
        1 => "FORMERR",
        2 => "SERVFAIL",
        3 => "NXDOMAIN",
        4 => "NOTIMP",
        5 => "REFUSED",
        6 => "YXDOMAIN",
        7 => "YXRRSET",
        8 => "NXRRSET",
        9 => "NOTAUTH",
        10 => "NOTZONE",
        16 => "BADSIG",
        17 => "BADKEY",
        18 => "BADTIME",
        19 => "BADMODE",
        20 => "BADNAME",
        21 => "BADALG",
        22 => "BADTRUNC",
        23 => "BADCOOKIE",
        _ => "UNKNOWN",
    }
}
