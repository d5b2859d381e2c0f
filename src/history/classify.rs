//! Query classification.
//!
//! Maps a lookup subject to one of the [`QueryType`] tags. Each tag has its own
//! predicate; [`classify`] tries them in a fixed precedence order and falls
//! back to [`QueryType::Domain`].
//!
//! The shapes are lax: IPv4 groups and CIDR prefix lengths are
//! not range-checked (`999.999.999.999` is ipv4, `10.0.0.0/99` is cidr), and
//! compressed (`::`) or mixed IPv6 forms are not recognised.

use super::models::QueryType;
use once_cell::sync::Lazy;
use regex::Regex;

// `[0-9]` rather than `\d`: the regex crate's `\d` also matches non-ASCII digits.
static IPV4_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,3}\.){3}[0-9]{1,3}$").expect("Failed to compile IPv4 regex")
});

static IPV6_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}$").expect("Failed to compile IPv6 regex")
});

static ASN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?i:as)[0-9]+$").expect("Failed to compile ASN regex"));

static CIDR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,3}\.){3}[0-9]{1,3}/[0-9]{1,2}$").expect("Failed to compile CIDR regex")
});

/// Classifies a query.
///
/// Precedence is ipv4, ipv6, asn, cidr, then domain. The input is matched as
/// given; callers are expected to trim it first.
///
/// # Example
///
/// ```
/// use lookup_kit::history::{classify, QueryType};
///
/// assert_eq!(classify("1.2.3.4"), QueryType::Ipv4);
/// assert_eq!(classify("1.2.3.4/24"), QueryType::Cidr);
/// assert_eq!(classify("as13335"), QueryType::Asn);
/// assert_eq!(classify("example.com"), QueryType::Domain);
/// ```
pub fn classify(query: &str) -> QueryType {
    if is_ipv4(query) {
        QueryType::Ipv4
    } else if is_ipv6(query) {
        QueryType::Ipv6
    } else if is_asn(query) {
        QueryType::Asn
    } else if is_cidr(query) {
        QueryType::Cidr
    } else {
        QueryType::Domain
    }
}

/// Four dot-separated groups of one to three digits.
pub fn is_ipv4(query: &str) -> bool {
    IPV4_REGEX.is_match(query)
}

/// Eight colon-separated groups of one to four hex digits.
pub fn is_ipv6(query: &str) -> bool {
    IPV6_REGEX.is_match(query)
}

/// `AS` in any case followed by at least one digit.
pub fn is_asn(query: &str) -> bool {
    ASN_REGEX.is_match(query)
}

/// An IPv4-shaped address, `/`, and a one or two digit prefix length.
pub fn is_cidr(query: &str) -> bool {
    CIDR_REGEX.is_match(query)
}
