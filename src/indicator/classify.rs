//! Precedence-ordered recognizers for indicator classification.
//!
//! Every recognizer must match the *entire* trimmed input; substring hits
//! never classify. The table below is the precedence order: exact-length
//! hash families come before anything a base58 pattern could absorb, URLs
//! before bare domains, and addresses before the domain catch-all.

use super::IndicatorType;
use regex::Regex;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;
use url::Url;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

static CVE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^CVE-\d{4}-\d{4,}$").unwrap());

static SHA256_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Fa-f0-9]{64}$").unwrap());

static SHA1_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Fa-f0-9]{40}$").unwrap());

static MD5_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Fa-f0-9]{32}$").unwrap());

static ASN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(?i)AS\d+$").unwrap());

static BTC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[13][a-km-zA-HJ-NP-Z1-9]{25,34}|bc1[ac-hj-np-z02-9]{11,71})$").unwrap()
});

static ETH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^0x[a-fA-F0-9]{40}$").unwrap());

static DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z]{2,}$").unwrap()
});

fn is_url(s: &str) -> bool {
    // Url::parse would happily percent-encode interior whitespace, which
    // must stay unclassified.
    if s.contains(char::is_whitespace) {
        return false;
    }
    match Url::parse(s) {
        Ok(u) => {
            matches!(u.scheme(), "http" | "https")
                && u.host_str().is_some_and(|h| h.contains('.'))
        }
        Err(_) => false,
    }
}

fn is_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

fn is_cve(s: &str) -> bool {
    CVE_RE.is_match(s)
}

fn is_sha256(s: &str) -> bool {
    SHA256_RE.is_match(s)
}

fn is_sha1(s: &str) -> bool {
    SHA1_RE.is_match(s)
}

fn is_md5(s: &str) -> bool {
    MD5_RE.is_match(s)
}

fn is_asn(s: &str) -> bool {
    ASN_RE.is_match(s)
}

fn is_ipv4(s: &str) -> bool {
    s.parse::<Ipv4Addr>().is_ok()
}

fn is_ipv6(s: &str) -> bool {
    s.parse::<Ipv6Addr>().is_ok()
}

fn is_btc(s: &str) -> bool {
    BTC_RE.is_match(s)
}

fn is_eth(s: &str) -> bool {
    ETH_RE.is_match(s)
}

fn is_domain(s: &str) -> bool {
    DOMAIN_RE.is_match(s)
}

/// The classifier: recognizers in precedence order, first full match wins.
static RECOGNIZERS: &[(fn(&str) -> bool, IndicatorType)] = &[
    (is_url, IndicatorType::Url),
    (is_email, IndicatorType::Email),
    (is_cve, IndicatorType::Cve),
    (is_sha256, IndicatorType::Sha256),
    (is_sha1, IndicatorType::Sha1),
    (is_md5, IndicatorType::Md5),
    (is_asn, IndicatorType::Asn),
    (is_ipv4, IndicatorType::Ip),
    (is_ipv6, IndicatorType::Ipv6),
    (is_btc, IndicatorType::Btc),
    (is_eth, IndicatorType::Eth),
    (is_domain, IndicatorType::Domain),
];

/// Classify trimmed text into the highest-precedence matching type.
///
/// Returns `None` for empty input and for text no recognizer claims;
/// callers fall back to the generic `text` analyzers in that case.
pub fn classify(text: &str) -> Option<IndicatorType> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    RECOGNIZERS
        .iter()
        .find(|(matches, _)| matches(text))
        .map(|&(_, indicator)| indicator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_canonical_indicators() {
        let cases = [
            ("https://example.com/path?q=1", IndicatorType::Url),
            ("alice@example.com", IndicatorType::Email),
            ("CVE-2020-0796", IndicatorType::Cve),
            (
                "275a021bbfb6489e54d471899f7db9d1663fc695ec2fe2a2c4538aabf651fd0f",
                IndicatorType::Sha256,
            ),
            ("da39a3ee5e6b4b0d3255bfef95601890afd80709", IndicatorType::Sha1),
            ("d41d8cd98f00b204e9800998ecf8427e", IndicatorType::Md5),
            ("AS15169", IndicatorType::Asn),
            ("8.8.8.8", IndicatorType::Ip),
            ("2001:db8::1", IndicatorType::Ipv6),
            ("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", IndicatorType::Btc),
            ("bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq", IndicatorType::Btc),
            (
                "0x32be343b94f860124dc4fee278fdcbd38c102d88",
                IndicatorType::Eth,
            ),
            ("example.com", IndicatorType::Domain),
            ("www.example.co.uk", IndicatorType::Domain),
        ];
        for (input, expected) in cases {
            assert_eq!(classify(input), Some(expected), "input: {input}");
        }
    }

    #[test]
    fn test_classify_trims_whitespace() {
        assert_eq!(classify("  8.8.8.8\n"), Some(IndicatorType::Ip));
        assert_eq!(classify("\texample.com "), Some(IndicatorType::Domain));
    }

    #[test]
    fn test_whitespace_only_is_unclassified() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("   "), None);
        assert_eq!(classify(" \t\n"), None);
    }

    #[test]
    fn test_free_text_is_unclassified() {
        assert_eq!(classify("suspicious attachment from last night"), None);
        assert_eq!(classify("powershell -enc SQBFAFgA"), None);
    }

    #[test]
    fn test_no_substring_classification() {
        assert_eq!(classify("ip is 8.8.8.8 ok"), None);
        assert_eq!(classify("see https://example.com now"), None);
    }

    #[test]
    fn test_hashes_win_over_base58_lookalikes() {
        // 32 hex chars starting with '3' fit the base58 pattern too;
        // the hash family has precedence.
        assert_eq!(
            classify("3fcd67a5bd45a4a84e2d8ab73f48ba23"),
            Some(IndicatorType::Md5)
        );
    }

    #[test]
    fn test_url_wins_over_domain() {
        assert_eq!(classify("https://example.com"), Some(IndicatorType::Url));
        assert_eq!(classify("example.com"), Some(IndicatorType::Domain));
    }

    #[test]
    fn test_ip_wins_over_domain_shape() {
        // All-numeric labels never match the domain recognizer anyway,
        // but the precedence table puts ip first regardless.
        assert_eq!(classify("8.8.8.8"), Some(IndicatorType::Ip));
    }

    #[test]
    fn test_case_sensitivity() {
        // CVE prefix is fixed-case.
        assert_eq!(classify("cve-2020-0796"), None);
        // Hex digests and the ASN prefix are not.
        assert_eq!(
            classify("D41D8CD98F00B204E9800998ECF8427E"),
            Some(IndicatorType::Md5)
        );
        assert_eq!(classify("as15169"), Some(IndicatorType::Asn));
        assert_eq!(classify("EXAMPLE.COM"), Some(IndicatorType::Domain));
    }

    #[test]
    fn test_scheme_required_for_url() {
        assert_eq!(classify("ftp://example.com/file"), None);
        assert_eq!(classify("http://localhost/admin"), None);
    }
}
