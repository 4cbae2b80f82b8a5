//! Build search URLs for a selection.

use crate::cli::notify;
use crate::command::Command;
use crate::config::Config;
use crate::indicator::IndicatorType;
use crate::selector::Selector;
use anyhow::Result;

/// With a service name, build that one searcher's URL; without, build one
/// URL per enabled searcher for the classified type.
pub fn execute(text: &str, on: Option<&str>) -> Result<()> {
    let selector = Selector::new(text);
    if selector.text().is_empty() {
        return Ok(());
    }
    let indicator = selector.classify().unwrap_or(IndicatorType::Text);
    let config = Config::load()?;

    match on {
        Some(name) => {
            let command = Command::search_on(selector.text(), indicator, name);
            match command.search() {
                Ok(url) => println!("{url}"),
                Err(err) => notify(&err),
            }
        }
        None => {
            let command = Command::search_all_of(selector.text(), indicator);
            match command.search_all(&config.searcher_states) {
                Ok(urls) => {
                    for url in urls {
                        println!("{url}");
                    }
                }
                Err(err) => notify(&err),
            }
        }
    }
    Ok(())
}
