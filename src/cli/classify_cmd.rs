//! Print the classified indicator type of a selection.

use crate::indicator::{self, IndicatorType};
use anyhow::Result;

pub fn execute(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Ok(());
    }
    let indicator = indicator::classify(text).unwrap_or(IndicatorType::Text);
    println!("{indicator}");
    Ok(())
}
