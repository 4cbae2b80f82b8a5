//! Menu-entry construction for a host UI.
//!
//! Entry ids are encoded directives (see [`crate::command`]); the host
//! hands the chosen id back verbatim, so ids are produced by formatting
//! real [`Command`] values and are guaranteed to decode.

use crate::command::Command;
use crate::config::SearcherStates;
use crate::selector::Selector;
use serde::Serialize;

/// One action a host can offer for the current selection.
#[derive(Debug, Clone, Serialize)]
pub struct MenuEntry {
    /// Encoded directive, the entry's identifier.
    pub id: String,
    /// Human-readable label.
    pub title: String,
}

/// Build the full entry list for a selection: one search entry per enabled
/// searcher, an aggregate search-all entry when a specific indicator type
/// was classified, then one scan entry per applicable scanner.
pub fn menu_entries(text: &str, states: &SearcherStates) -> Vec<MenuEntry> {
    let selector = Selector::new(text);
    let mut entries = Vec::new();

    for entry in selector.searcher_entries() {
        if !states.is_enabled(entry.name) {
            continue;
        }
        let command = Command::search_on(&entry.query, entry.indicator, entry.name);
        entries.push(MenuEntry {
            id: command.to_string(),
            title: format!("Search this {} on {}", entry.indicator, entry.name),
        });
    }

    // The aggregate entry only makes sense once classification found a
    // specific type; bare text offers the individual engines instead.
    if let Some(indicator) = selector.classify() {
        let command = Command::search_all_of(selector.text(), indicator);
        entries.push(MenuEntry {
            id: command.to_string(),
            title: format!("Search this {indicator} on all"),
        });
    }

    for entry in selector.scanner_entries() {
        let command = Command::scan_on(&entry.query, entry.indicator, entry.name);
        entries.push(MenuEntry {
            id: command.to_string(),
            title: format!("Scan this {} on {}", entry.indicator, entry.name),
        });
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Action, ALL_TARGET};

    #[test]
    fn test_ids_decode_back_to_commands() {
        let entries = menu_entries("https://example.com", &SearcherStates::default());
        assert!(!entries.is_empty());
        for entry in &entries {
            let command: Command = entry.id.parse().unwrap();
            assert_eq!(command.query, "https://example.com");
        }
    }

    #[test]
    fn test_aggregate_entry_present_for_specific_type() {
        let entries = menu_entries("8.8.8.8", &SearcherStates::default());
        let aggregate: Vec<&MenuEntry> = entries
            .iter()
            .filter(|e| e.id.parse::<Command>().unwrap().target == ALL_TARGET)
            .collect();
        assert_eq!(aggregate.len(), 1);
        assert_eq!(aggregate[0].title, "Search this ip on all");
    }

    #[test]
    fn test_no_aggregate_entry_for_plain_text() {
        let entries = menu_entries("plain words", &SearcherStates::default());
        assert!(entries
            .iter()
            .all(|e| e.id.parse::<Command>().unwrap().target != ALL_TARGET));
    }

    #[test]
    fn test_disabled_searchers_are_skipped() {
        let mut states = SearcherStates::default();
        states.set("Shodan", false);
        let entries = menu_entries("8.8.8.8", &states);
        assert!(entries.iter().all(|e| !e.title.ends_with("on Shodan")));
    }

    #[test]
    fn test_scan_entries_follow_search_entries() {
        let entries = menu_entries("https://example.com", &SearcherStates::default());
        let first_scan = entries
            .iter()
            .position(|e| e.id.parse::<Command>().unwrap().action == Action::Scan)
            .unwrap();
        assert!(entries[first_scan..]
            .iter()
            .all(|e| e.id.parse::<Command>().unwrap().action == Action::Scan));
        assert!(entries[first_scan].title.starts_with("Scan this url on"));
    }

    #[test]
    fn test_empty_selection_has_no_entries() {
        assert!(menu_entries("  ", &SearcherStates::default()).is_empty());
    }
}
