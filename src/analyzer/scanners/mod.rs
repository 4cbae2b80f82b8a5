//! Scanners — analyzers that submit the indicator to a remote API and
//! resolve to a report-page URL.

pub mod urlscan;
pub mod virustotal;

use crate::config::ApiKeys;
use crate::error::Error;
use crate::indicator::IndicatorType;
use async_trait::async_trait;

pub use urlscan::UrlscanScanner;
pub use virustotal::VirusTotalScanner;

/// An analyzer that needs a provisioning call before it has a URL to open.
///
/// `scan` performs exactly one remote call per invocation. It fails with
/// [`Error::MissingCredential`] before any network I/O when the required
/// key is absent, and with [`Error::Upstream`] when the remote side errors.
#[async_trait]
pub trait Scanner: Send + Sync {
    /// Unique display name, also the directive target token.
    fn name(&self) -> &'static str;

    /// Indicator types this scanner accepts.
    fn types(&self) -> &'static [IndicatorType];

    fn supports(&self, indicator: IndicatorType) -> bool {
        self.types().contains(&indicator)
    }

    /// Submit the query and resolve to the report URL.
    async fn scan(&self, query: &str, keys: &ApiKeys) -> Result<String, Error>;
}

static SCANNERS: [&(dyn Scanner); 2] = [&UrlscanScanner, &VirusTotalScanner];

/// All scanners able to handle `indicator`, in registry declaration order.
pub fn scanners_for(indicator: IndicatorType) -> Vec<&'static dyn Scanner> {
    SCANNERS
        .iter()
        .copied()
        .filter(|s| s.supports(indicator))
        .collect()
}

/// Look up a single scanner by name among those handling `indicator`.
pub fn find_scanner(name: &str, indicator: IndicatorType) -> Option<&'static dyn Scanner> {
    SCANNERS
        .iter()
        .copied()
        .find(|s| s.name() == name && s.supports(indicator))
}
