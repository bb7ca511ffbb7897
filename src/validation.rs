//! Domain validation for candidate tokens.
//!
//! A token is eligible for blocking when it:
//! - is longer than three characters
//! - is not an IPv4 dotted-quad literal
//! - is punycode (`xn--` prefix), or ends in `<label char>.<tld>` where the
//!   final label has at least two characters

use once_cell::sync::Lazy;
use regex::Regex;

/// Prefix of ASCII-compatible encoded (punycode) labels.
pub const PUNYCODE_PREFIX: &str = "xn--";

/// Tokens this short or shorter are never domains.
const MIN_DOMAIN_LEN: usize = 3;

static IPV4_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^((25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$",
    )
    .expect("IPv4 pattern is valid")
});

static DOMAIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^.*[a-zA-Z_0-9]\.[a-zA-Z_0-9]{2,}$").expect("domain pattern is valid")
});

/// Whether `token` is a strict IPv4 dotted quad (every octet 0-255).
///
/// # Examples
/// ```
/// use unbound_blacklister::validation::is_ipv4_literal;
/// assert!(is_ipv4_literal("192.168.1.1"));
/// assert!(!is_ipv4_literal("256.1.1.1"));
/// assert!(!is_ipv4_literal("1.2.3"));
/// ```
pub fn is_ipv4_literal(token: &str) -> bool {
    IPV4_RE.is_match(token)
}

/// Why a token was refused as a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    TooShort,
    Ipv4Literal,
    BadShape,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::TooShort => write!(f, "too short (3 characters or fewer)"),
            Rejection::Ipv4Literal => write!(f, "IPv4 address literal"),
            Rejection::BadShape => write!(f, "does not look like a domain name"),
        }
    }
}

/// Validate a candidate token, saying why it was refused.
///
/// # Errors
/// Returns the first rule the token breaks.
///
/// # Examples
/// ```
/// use unbound_blacklister::validation::{validate_domain, Rejection};
/// assert!(validate_domain("ads.example.com").is_ok());
/// assert_eq!(validate_domain("10.0.0.1"), Err(Rejection::Ipv4Literal));
/// ```
pub fn validate_domain(token: &str) -> Result<(), Rejection> {
    if token.chars().count() <= MIN_DOMAIN_LEN {
        return Err(Rejection::TooShort);
    }
    if is_ipv4_literal(token) {
        return Err(Rejection::Ipv4Literal);
    }
    if token.starts_with(PUNYCODE_PREFIX) || DOMAIN_RE.is_match(token) {
        Ok(())
    } else {
        Err(Rejection::BadShape)
    }
}

/// Whether a candidate token is a domain name that may be blocked.
///
/// # Examples
/// ```
/// use unbound_blacklister::validation::is_valid_domain;
/// assert!(is_valid_domain("a.co"));
/// assert!(is_valid_domain("xn--abc"));
/// assert!(!is_valid_domain("ab"));
/// assert!(!is_valid_domain("192.168.1.1"));
/// ```
pub fn is_valid_domain(token: &str) -> bool {
    validate_domain(token).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_domain_valid() {
        assert!(is_valid_domain("a.co"));
    }

    #[test]
    fn test_too_short_invalid() {
        assert!(!is_valid_domain(""));
        assert!(!is_valid_domain("ab"));
        assert!(!is_valid_domain("a.c"));
        // Even punycode needs more than three characters
        assert!(!is_valid_domain("xn-"));
    }

    #[test]
    fn test_ipv4_literal_invalid() {
        assert!(!is_valid_domain("192.168.1.1"));
        assert!(!is_valid_domain("0.0.0.0"));
        assert!(!is_valid_domain("255.255.255.255"));
    }

    #[test]
    fn test_ipv4_pattern_accepts_leading_zeros() {
        assert!(is_ipv4_literal("010.001.000.009"));
        assert!(!is_valid_domain("010.001.000.009"));
    }

    #[test]
    fn test_out_of_range_quad_falls_through_to_shape_check() {
        // Not an address literal, and the last label is numeric with two
        // or more characters, so the shape pattern accepts it.
        assert!(!is_ipv4_literal("999.168.1.10"));
        assert!(is_valid_domain("999.168.1.10"));
        // Single-character final label fails the shape check
        assert!(!is_valid_domain("256.1.1.1"));
    }

    #[test]
    fn test_ipv4_literal_rejects_extra_octets() {
        assert!(!is_ipv4_literal("1.2.3.4.5"));
        assert!(!is_ipv4_literal("1.2.3"));
        assert!(!is_ipv4_literal("a.b.c.d"));
    }

    #[test]
    fn test_punycode_exempt() {
        assert!(is_valid_domain("xn--abc"));
        assert!(is_valid_domain("xn--80ak6aa92e.com"));
        assert!(is_valid_domain("xn--p1ai"));
    }

    #[test]
    fn test_no_dot_invalid() {
        assert!(!is_valid_domain("not_a_domain"));
        assert!(!is_valid_domain("localhost"));
    }

    #[test]
    fn test_shape_rules() {
        assert!(is_valid_domain("ads.example.com"));
        assert!(is_valid_domain("under_score.example.net"));
        assert!(is_valid_domain("1.2.3.4.example.com"));
        // TLD must be at least two characters
        assert!(!is_valid_domain("example.c"));
        // A dot must follow a label character
        assert!(!is_valid_domain("example-.com"));
        assert!(!is_valid_domain("example..com"));
        // Trailing dot (FQDN form) does not match
        assert!(!is_valid_domain("example.com."));
        // Hyphen in the final label is not a TLD character
        assert!(!is_valid_domain("example.co-m"));
    }

    #[test]
    fn test_shape_is_ascii_only() {
        assert!(!is_valid_domain("пример.рф"));
        assert!(!is_valid_domain("example.ﬁx"));
    }

    #[test]
    fn test_validate_domain_reasons() {
        assert_eq!(validate_domain("ab"), Err(Rejection::TooShort));
        assert_eq!(validate_domain("192.168.1.1"), Err(Rejection::Ipv4Literal));
        assert_eq!(validate_domain("not_a_domain"), Err(Rejection::BadShape));
        assert_eq!(validate_domain("xn--abc"), Ok(()));
    }

    #[test]
    fn test_rules_apply_in_order() {
        // Short punycode is still too short
        assert_eq!(validate_domain("xn-"), Err(Rejection::TooShort));
        // A three-character quad never reaches the IPv4 rule
        assert_eq!(validate_domain("1.1"), Err(Rejection::TooShort));
    }

    #[test]
    fn test_length_counts_characters() {
        // Three characters, more than three bytes
        assert!(!is_valid_domain("é.é"));
    }
}
