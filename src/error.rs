//! Error taxonomy for directive parsing, analyzer lookup, and scanning.

use crate::indicator::IndicatorType;
use thiserror::Error;

/// Errors produced by the command and scanner layers.
///
/// Classification and URL templating are total and never return these;
/// only decoding a directive, resolving an analyzer by name, and talking
/// to a remote scan API can fail.
#[derive(Debug, Error)]
pub enum Error {
    /// The encoded directive did not match the menu-entry grammar.
    ///
    /// Callers treat this as a no-op rather than a user-facing failure.
    #[error("unrecognized directive: {0}")]
    Parse(String),

    /// A directive named an analyzer the registry does not have for
    /// the classified indicator type.
    #[error("no analyzer named {name} handles a {indicator}")]
    UnknownAnalyzer {
        name: String,
        indicator: IndicatorType,
    },

    /// A directive was executed with the wrong action kind.
    #[error("a {action} directive cannot be executed as {requested}")]
    ActionMismatch {
        action: &'static str,
        requested: &'static str,
    },

    /// A scanner requires an API key that is not configured.
    ///
    /// The message names the credential slot so the user can fix it.
    #[error("{scanner} needs an API key: set {env_var} or api_keys.{slot} in the config file")]
    MissingCredential {
        scanner: &'static str,
        slot: &'static str,
        env_var: &'static str,
    },

    /// The remote scan call failed or returned a non-success status.
    #[error("{scanner} scan failed: {message}")]
    Upstream {
        scanner: &'static str,
        message: String,
    },
}
