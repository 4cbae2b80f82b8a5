//! Analyzer registry — searchers (URL templating) and scanners (API calls).

pub mod scanners;
pub mod searchers;

use crate::indicator::IndicatorType;

/// A searcher: builds a destination URL by pure template substitution,
/// no credentials involved.
pub struct Searcher {
    /// Unique display name, also the directive target token.
    pub name: &'static str,
    /// Indicator types this searcher accepts. Containing
    /// [`IndicatorType::Text`] marks it as a generic searcher that
    /// accepts any selection.
    pub types: &'static [IndicatorType],
    build: fn(&str, IndicatorType) -> String,
}

impl Searcher {
    /// Whether this searcher handles the given type. Generic text
    /// searchers handle everything.
    pub fn supports(&self, indicator: IndicatorType) -> bool {
        self.types.contains(&indicator) || self.types.contains(&IndicatorType::Text)
    }

    /// Build the destination URL for a query.
    ///
    /// Total for any non-empty query; the query is not validated against
    /// the type here — classification already happened in the selector.
    pub fn build_url(&self, query: &str, indicator: IndicatorType) -> String {
        (self.build)(query, indicator)
    }
}

/// A resolved pairing of an analyzer with a concrete query and type.
///
/// Produced fresh per classification call and never persisted.
#[derive(Clone)]
pub struct AnalyzerEntry {
    pub name: &'static str,
    pub query: String,
    pub indicator: IndicatorType,
}

/// All searchers able to handle `indicator`, in registry declaration order.
pub fn searchers_for(indicator: IndicatorType) -> Vec<&'static Searcher> {
    searchers::all()
        .iter()
        .filter(|s| s.supports(indicator))
        .collect()
}

/// Look up a single searcher by name among those handling `indicator`.
pub fn find_searcher(name: &str, indicator: IndicatorType) -> Option<&'static Searcher> {
    searchers::all()
        .iter()
        .find(|s| s.name == name && s.supports(indicator))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_is_stable() {
        let first: Vec<&str> = searchers_for(IndicatorType::Ip)
            .iter()
            .map(|s| s.name)
            .collect();
        let second: Vec<&str> = searchers_for(IndicatorType::Ip)
            .iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_generic_searchers_lead_every_type() {
        for indicator in [IndicatorType::Ip, IndicatorType::Cve, IndicatorType::Btc] {
            let names: Vec<&str> = searchers_for(indicator).iter().map(|s| s.name).collect();
            assert_eq!(&names[..3], &["Censys", "PublicWWW", "Intelligence X"]);
        }
    }

    #[test]
    fn test_find_searcher_respects_type() {
        assert!(find_searcher("Shodan", IndicatorType::Ip).is_some());
        assert!(find_searcher("Shodan", IndicatorType::Cve).is_none());
        assert!(find_searcher("NoSuchService", IndicatorType::Ip).is_none());
    }

    #[test]
    fn test_unsupported_combination_is_empty_not_error() {
        // Every type has at least the generic searchers, so filter them out
        // to observe the specific set.
        let specific: Vec<&str> = searchers_for(IndicatorType::Eth)
            .iter()
            .filter(|s| !s.types.contains(&IndicatorType::Text))
            .map(|s| s.name)
            .collect();
        assert_eq!(specific, vec!["Etherscan"]);
    }
}
