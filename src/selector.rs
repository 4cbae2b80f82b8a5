//! Classify selected text and resolve analyzer entries from the registry.

use crate::analyzer::{scanners, searchers_for, AnalyzerEntry};
use crate::indicator::{self, IndicatorType};
use tracing::debug;

/// Holds one piece of selected text and resolves the actions available
/// for it. Cheap to construct; built fresh for every selection.
pub struct Selector {
    text: String,
}

impl Selector {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.trim().to_string(),
        }
    }

    /// The trimmed selection this selector operates on.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Highest-precedence indicator type of the selection, if any.
    pub fn classify(&self) -> Option<IndicatorType> {
        let indicator = indicator::classify(&self.text);
        debug!(text = %self.text, ?indicator, "classified selection");
        indicator
    }

    /// Searcher entries for the selection, in registry order.
    ///
    /// Unclassifiable non-empty text falls back to the generic text
    /// searchers so there is always something to offer; empty or
    /// whitespace-only selections resolve to nothing.
    pub fn searcher_entries(&self) -> Vec<AnalyzerEntry> {
        if self.text.is_empty() {
            return Vec::new();
        }
        let indicator = self.classify().unwrap_or(IndicatorType::Text);
        searchers_for(indicator)
            .into_iter()
            .map(|s| AnalyzerEntry {
                name: s.name,
                query: self.text.clone(),
                indicator,
            })
            .collect()
    }

    /// Scanner entries for the selection, in registry order.
    ///
    /// No fallback here: a selection with no classified type, or a type
    /// no scanner accepts, resolves to an empty list.
    pub fn scanner_entries(&self) -> Vec<AnalyzerEntry> {
        let Some(indicator) = self.classify() else {
            return Vec::new();
        };
        scanners::scanners_for(indicator)
            .into_iter()
            .map(|s| AnalyzerEntry {
                name: s.name(),
                query: self.text.clone(),
                indicator,
            })
            .collect()
    }
}
