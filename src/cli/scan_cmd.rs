//! Submit a selection to a scanner and print its report URL.

use crate::cli::notify;
use crate::command::Command;
use crate::config::Config;
use crate::indicator::IndicatorType;
use crate::selector::Selector;
use anyhow::Result;

pub async fn execute(text: &str, on: &str) -> Result<()> {
    let selector = Selector::new(text);
    if selector.text().is_empty() {
        return Ok(());
    }
    let indicator = selector.classify().unwrap_or(IndicatorType::Text);
    let config = Config::load()?;

    let command = Command::scan_on(selector.text(), indicator, on);
    match command.scan(&config.api_keys).await {
        Ok(url) => println!("{url}"),
        Err(err) => notify(&err),
    }
    Ok(())
}
