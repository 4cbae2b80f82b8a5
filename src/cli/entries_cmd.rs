//! List the menu entries available for a selection.

use crate::config::Config;
use crate::menu;
use anyhow::Result;

pub fn execute(text: &str, json: bool) -> Result<()> {
    let config = Config::load()?;
    let entries = menu::menu_entries(text, &config.searcher_states);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.title);
        println!("    {}", entry.id);
    }
    Ok(())
}
