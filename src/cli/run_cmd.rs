//! Decode an encoded directive and execute it — the CLI analogue of a
//! host's menu-click listener.

use crate::cli::notify;
use crate::command::{Action, Command};
use crate::config::Config;
use crate::error::Error;
use anyhow::Result;
use tracing::debug;

pub async fn execute(directive: &str) -> Result<()> {
    // A malformed directive is a no-op, never a crash: the host listener
    // must survive identifiers it does not recognize.
    let command: Command = match directive.parse() {
        Ok(command) => command,
        Err(Error::Parse(raw)) => {
            debug!(directive = %raw, "ignoring unrecognized directive");
            return Ok(());
        }
        Err(err) => notify(&err),
    };

    let config = Config::load()?;
    match command.action {
        Action::Search => match command.search() {
            Ok(url) => println!("{url}"),
            Err(err) => notify(&err),
        },
        Action::SearchAll => match command.search_all(&config.searcher_states) {
            Ok(urls) => {
                for url in urls {
                    println!("{url}");
                }
            }
            Err(err) => notify(&err),
        },
        Action::Scan => match command.scan(&config.api_keys).await {
            Ok(url) => println!("{url}"),
            Err(err) => notify(&err),
        },
    }
    Ok(())
}
