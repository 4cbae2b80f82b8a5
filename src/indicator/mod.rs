//! Indicator types and the precedence-ordered classifier.

pub mod classify;

pub use classify::classify;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of security-relevant indicator a piece of text represents.
///
/// `Text` is the catch-all for selections that match no specific pattern;
/// it is what the generic web-search analyzers accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorType {
    Text,
    Ip,
    Ipv6,
    Domain,
    Url,
    Email,
    Asn,
    Cve,
    Btc,
    Eth,
    Md5,
    Sha1,
    Sha256,
}

impl IndicatorType {
    /// Wire spelling used in the encoded directive grammar.
    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorType::Text => "text",
            IndicatorType::Ip => "ip",
            IndicatorType::Ipv6 => "ipv6",
            IndicatorType::Domain => "domain",
            IndicatorType::Url => "url",
            IndicatorType::Email => "email",
            IndicatorType::Asn => "asn",
            IndicatorType::Cve => "cve",
            IndicatorType::Btc => "btc",
            IndicatorType::Eth => "eth",
            IndicatorType::Md5 => "md5",
            IndicatorType::Sha1 => "sha1",
            IndicatorType::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for IndicatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndicatorType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(IndicatorType::Text),
            "ip" => Ok(IndicatorType::Ip),
            "ipv6" => Ok(IndicatorType::Ipv6),
            "domain" => Ok(IndicatorType::Domain),
            "url" => Ok(IndicatorType::Url),
            "email" => Ok(IndicatorType::Email),
            "asn" => Ok(IndicatorType::Asn),
            "cve" => Ok(IndicatorType::Cve),
            "btc" => Ok(IndicatorType::Btc),
            "eth" => Ok(IndicatorType::Eth),
            "md5" => Ok(IndicatorType::Md5),
            "sha1" => Ok(IndicatorType::Sha1),
            "sha256" => Ok(IndicatorType::Sha256),
            _ => Err(()),
        }
    }
}
