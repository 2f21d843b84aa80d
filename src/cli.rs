//! Shared helpers for the ChainLedger binaries.

use crate::config::{load_config, Config};
use crate::error::ChainError;
use crate::ledger::Ledger;
use colored::*;
use comfy_table::Table;

/// Build a fresh ledger using the genesis payload from `config.toml`
/// (or the built-in defaults when no config file is present).
pub fn load_ledger_from_config() -> Result<(Config, Ledger), Box<dyn std::error::Error>> {
    let config = load_config()?;
    let ledger = Ledger::with_genesis(&config.ledger.genesis_payload);
    Ok((config, ledger))
}

/// Truncate a hex digest for table display. The genesis block's empty
/// `previous_hash` renders as a placeholder.
pub fn preview_digest(digest: &str, preview_len: usize) -> String {
    if digest.is_empty() {
        return "(none)".to_string();
    }
    if digest.len() <= preview_len {
        digest.to_string()
    } else {
        format!("{}…", &digest[..preview_len])
    }
}

/// Render the whole chain as a table: one row per block, digests truncated
/// to `preview_len` characters.
pub fn render_chain(ledger: &Ledger, preview_len: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Timestamp", "Payload", "Previous Hash", "Hash"]);

    for (index, block) in ledger.blocks.iter().enumerate() {
        table.add_row(vec![
            index.to_string(),
            block.timestamp.to_string(),
            block.payload.clone(),
            preview_digest(&block.previous_hash, preview_len),
            preview_digest(&block.hash, preview_len),
        ]);
    }

    table
}

/// Print the integrity verdict for a ledger, with the first violation
/// spelled out when the chain is broken.
pub fn print_verdict(ledger: &Ledger) {
    match ledger.check_integrity() {
        Ok(()) => println!("{}", "Ledger valid: true".bright_green()),
        Err(err) => {
            println!("{}", "Ledger valid: false".bright_red());
            print_violation(&err);
        }
    }
}

fn print_violation(err: &ChainError) {
    println!("  {} {}", "✗".bright_red(), err);
}
