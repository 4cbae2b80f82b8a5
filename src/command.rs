//! Directive encoding, decoding, and execution.
//!
//! A directive is the single string a host UI uses as the menu-entry
//! identifier: `"<Verb> <query> as a <type> on <target>"`. The string is
//! both the external protocol and the internal structured form, so
//! decoding must recover exactly the fields the menu builder encoded.

use crate::analyzer::scanners::find_scanner;
use crate::analyzer::{find_searcher, searchers_for};
use crate::config::{ApiKeys, SearcherStates};
use crate::error::Error;
use crate::indicator::IndicatorType;
use std::fmt;
use std::str::FromStr;

/// Target token that turns a search directive into search-all.
pub const ALL_TARGET: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Search,
    SearchAll,
    Scan,
}

impl Action {
    fn as_str(&self) -> &'static str {
        match self {
            Action::Search => "search",
            Action::SearchAll => "search-all",
            Action::Scan => "scan",
        }
    }
}

/// A decoded menu directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub action: Action,
    pub query: String,
    pub indicator: IndicatorType,
    pub target: String,
}

impl Command {
    /// A search directive against one named searcher.
    pub fn search_on(query: &str, indicator: IndicatorType, name: &str) -> Self {
        Self {
            action: Action::Search,
            query: query.to_string(),
            indicator,
            target: name.to_string(),
        }
    }

    /// A search-all directive across every enabled searcher.
    pub fn search_all_of(query: &str, indicator: IndicatorType) -> Self {
        Self {
            action: Action::SearchAll,
            query: query.to_string(),
            indicator,
            target: ALL_TARGET.to_string(),
        }
    }

    /// A scan directive against one named scanner.
    pub fn scan_on(query: &str, indicator: IndicatorType, name: &str) -> Self {
        Self {
            action: Action::Scan,
            query: query.to_string(),
            indicator,
            target: name.to_string(),
        }
    }

    fn require_action(&self, action: Action) -> Result<(), Error> {
        if self.action == action {
            Ok(())
        } else {
            Err(Error::ActionMismatch {
                action: self.action.as_str(),
                requested: action.as_str(),
            })
        }
    }

    /// Build the destination URL of the one named searcher.
    ///
    /// An unknown name is an error rather than a silent empty result so
    /// the host can show the user why nothing opened.
    pub fn search(&self) -> Result<String, Error> {
        self.require_action(Action::Search)?;
        let searcher =
            find_searcher(&self.target, self.indicator).ok_or_else(|| Error::UnknownAnalyzer {
                name: self.target.clone(),
                indicator: self.indicator,
            })?;
        Ok(searcher.build_url(&self.query, self.indicator))
    }

    /// Build one URL per enabled searcher for the indicator type,
    /// in registry order. All-disabled resolves to an empty list.
    pub fn search_all(&self, states: &SearcherStates) -> Result<Vec<String>, Error> {
        self.require_action(Action::SearchAll)?;
        Ok(searchers_for(self.indicator)
            .into_iter()
            .filter(|s| states.is_enabled(s.name))
            .map(|s| s.build_url(&self.query, self.indicator))
            .collect())
    }

    /// Submit the query to the one named scanner and resolve its report
    /// URL. Credential and upstream failures propagate to the caller for
    /// user notification.
    pub async fn scan(&self, keys: &ApiKeys) -> Result<String, Error> {
        self.require_action(Action::Scan)?;
        let scanner =
            find_scanner(&self.target, self.indicator).ok_or_else(|| Error::UnknownAnalyzer {
                name: self.target.clone(),
                indicator: self.indicator,
            })?;
        scanner.scan(&self.query, keys).await
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.action {
            Action::Scan => "Scan",
            Action::Search | Action::SearchAll => "Search",
        };
        write!(
            f,
            "{verb} {} as a {} on {}",
            self.query, self.indicator, self.target
        )
    }
}

impl FromStr for Command {
    type Err = Error;

    /// Parse anchors on the verb token, the rightmost `" on "`, and the
    /// rightmost `" as a "` before it. The generator appends the type and
    /// target after the query, so those rightmost separators are always
    /// its own even when the query contains the same words.
    fn from_str(s: &str) -> Result<Self, Error> {
        let parse_err = || Error::Parse(s.to_string());

        let (verb, rest) = s.split_once(' ').ok_or_else(parse_err)?;
        let (head, target) = rest.rsplit_once(" on ").ok_or_else(parse_err)?;
        let (query, type_tag) = head.rsplit_once(" as a ").ok_or_else(parse_err)?;
        if query.is_empty() || target.is_empty() {
            return Err(parse_err());
        }

        let indicator: IndicatorType = type_tag.parse().map_err(|_| parse_err())?;
        let action = match verb.to_lowercase().as_str() {
            "scan" => Action::Scan,
            "search" if target == ALL_TARGET => Action::SearchAll,
            "search" => Action::Search,
            _ => return Err(parse_err()),
        };

        Ok(Command {
            action,
            query: query.to_string(),
            indicator,
            target: target.to_string(),
        })
    }
}
