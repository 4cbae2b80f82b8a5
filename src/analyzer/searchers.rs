//! The searcher catalog.
//!
//! Declaration order is the registry order: generic text searchers first,
//! then the per-indicator services. Menu layouts and `search-all` output
//! follow this order directly.

use super::Searcher;
use crate::indicator::IndicatorType::{
    self, Asn, Btc, Cve, Domain, Email, Eth, Ip, Ipv6, Md5, Sha1, Sha256, Text, Url,
};

/// Percent-encode a query for use inside a query-string parameter.
fn encode(query: &str) -> String {
    url::form_urlencoded::byte_serialize(query.as_bytes()).collect()
}

fn censys(query: &str, _: IndicatorType) -> String {
    format!(
        "https://search.censys.io/search?resource=hosts&q={}",
        encode(query)
    )
}

fn public_www(query: &str, _: IndicatorType) -> String {
    format!("https://publicwww.com/websites/{}/", encode(&format!("\"{query}\"")))
}

fn intelligence_x(query: &str, _: IndicatorType) -> String {
    format!("https://intelx.io/?s={}", encode(query))
}

fn shodan(query: &str, indicator: IndicatorType) -> String {
    match indicator {
        Ip | Ipv6 => format!("https://www.shodan.io/host/{query}"),
        Asn => format!(
            "https://www.shodan.io/search?query={}",
            encode(&format!("asn:{}", query.to_uppercase()))
        ),
        _ => format!("https://www.shodan.io/search?query={}", encode(query)),
    }
}

fn virustotal(query: &str, _: IndicatorType) -> String {
    format!("https://www.virustotal.com/gui/search/{}", encode(query))
}

fn abuse_ipdb(query: &str, _: IndicatorType) -> String {
    format!("https://www.abuseipdb.com/check/{query}")
}

fn greynoise(query: &str, _: IndicatorType) -> String {
    format!("https://viz.greynoise.io/ip/{query}")
}

fn talos(query: &str, _: IndicatorType) -> String {
    format!(
        "https://talosintelligence.com/reputation_center/lookup?search={}",
        encode(query)
    )
}

fn bgpview(query: &str, indicator: IndicatorType) -> String {
    match indicator {
        Asn => {
            let number = query
                .trim_start_matches(['A', 'a'])
                .trim_start_matches(['S', 's']);
            format!("https://bgpview.io/asn/{number}")
        }
        _ => format!("https://bgpview.io/ip/{query}"),
    }
}

fn urlscan(query: &str, _: IndicatorType) -> String {
    format!("https://urlscan.io/search/#{}", encode(query))
}

fn security_trails(query: &str, indicator: IndicatorType) -> String {
    match indicator {
        Domain => format!("https://securitytrails.com/domain/{query}/dns"),
        Email => format!("https://securitytrails.com/list/email/{query}"),
        _ => format!("https://securitytrails.com/list/ip/{query}"),
    }
}

fn crt_sh(query: &str, _: IndicatorType) -> String {
    format!("https://crt.sh/?q={}", encode(query))
}

fn web_archive(query: &str, _: IndicatorType) -> String {
    format!("https://web.archive.org/web/*/{query}")
}

fn emailrep(query: &str, _: IndicatorType) -> String {
    format!("https://emailrep.io/{query}")
}

fn nvd(query: &str, _: IndicatorType) -> String {
    format!("https://nvd.nist.gov/vuln/detail/{}", query.to_uppercase())
}

fn vulmon(query: &str, _: IndicatorType) -> String {
    format!("https://vulmon.com/vulnerabilitydetails?qid={}", encode(query))
}

fn cve_details(query: &str, _: IndicatorType) -> String {
    format!("https://www.cvedetails.com/cve/{}/", query.to_uppercase())
}

fn blockchain_com(query: &str, _: IndicatorType) -> String {
    format!("https://www.blockchain.com/explorer/addresses/btc/{query}")
}

fn blockcypher(query: &str, _: IndicatorType) -> String {
    format!("https://live.blockcypher.com/btc/address/{query}/")
}

fn etherscan(query: &str, _: IndicatorType) -> String {
    format!("https://etherscan.io/address/{}", query.to_lowercase())
}

fn hybrid_analysis(query: &str, _: IndicatorType) -> String {
    format!(
        "https://www.hybrid-analysis.com/search?query={}",
        encode(query)
    )
}

fn malware_bazaar(query: &str, _: IndicatorType) -> String {
    format!(
        "https://bazaar.abuse.ch/browse.php?search={}",
        encode(&format!("sha256:{query}"))
    )
}

static SEARCHERS: &[Searcher] = &[
    Searcher {
        name: "Censys",
        types: &[Text, Ip, Ipv6, Domain],
        build: censys,
    },
    Searcher {
        name: "PublicWWW",
        types: &[Text],
        build: public_www,
    },
    Searcher {
        name: "Intelligence X",
        types: &[Text, Email, Md5, Sha1, Sha256],
        build: intelligence_x,
    },
    Searcher {
        name: "Shodan",
        types: &[Ip, Ipv6, Domain, Asn],
        build: shodan,
    },
    Searcher {
        name: "VirusTotal",
        types: &[Ip, Domain, Url, Md5, Sha1, Sha256],
        build: virustotal,
    },
    Searcher {
        name: "AbuseIPDB",
        types: &[Ip],
        build: abuse_ipdb,
    },
    Searcher {
        name: "GreyNoise",
        types: &[Ip],
        build: greynoise,
    },
    Searcher {
        name: "Talos",
        types: &[Ip, Domain],
        build: talos,
    },
    Searcher {
        name: "BGPView",
        types: &[Ip, Ipv6, Asn],
        build: bgpview,
    },
    Searcher {
        name: "urlscan.io",
        types: &[Ip, Domain, Url],
        build: urlscan,
    },
    Searcher {
        name: "SecurityTrails",
        types: &[Ip, Domain, Email],
        build: security_trails,
    },
    Searcher {
        name: "crt.sh",
        types: &[Domain],
        build: crt_sh,
    },
    Searcher {
        name: "Web Archive",
        types: &[Url, Domain],
        build: web_archive,
    },
    Searcher {
        name: "EmailRep",
        types: &[Email],
        build: emailrep,
    },
    Searcher {
        name: "NVD",
        types: &[Cve],
        build: nvd,
    },
    Searcher {
        name: "Vulmon",
        types: &[Cve],
        build: vulmon,
    },
    Searcher {
        name: "CVE Details",
        types: &[Cve],
        build: cve_details,
    },
    Searcher {
        name: "Blockchain.com",
        types: &[Btc],
        build: blockchain_com,
    },
    Searcher {
        name: "BlockCypher",
        types: &[Btc],
        build: blockcypher,
    },
    Searcher {
        name: "Etherscan",
        types: &[Eth],
        build: etherscan,
    },
    Searcher {
        name: "Hybrid Analysis",
        types: &[Md5, Sha1, Sha256],
        build: hybrid_analysis,
    },
    Searcher {
        name: "MalwareBazaar",
        types: &[Sha256],
        build: malware_bazaar,
    },
];

/// The full catalog in declaration order.
pub fn all() -> &'static [Searcher] {
    SEARCHERS
}
