#![forbid(unsafe_code)]
use chainledger::cli::{load_ledger_from_config, print_verdict, render_chain};
use clap::{Parser, Subcommand};
use colored::*;
use tracing::info;

const DEFAULT_PAYLOADS: [&str; 3] = [
    "First Block after Genesis",
    "Second Block after Genesis",
    "Third Block after Genesis",
];

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Builds a ledger, appends the given payloads, prints the chain and
    /// its validity verdict
    Demo {
        /// Payloads to append, in order (defaults to three sample entries)
        payloads: Vec<String>,
        /// Dump the chain as pretty JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Builds a valid ledger, then corrupts one payload to show the
    /// integrity check catching it
    Tamper,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Demo { payloads, json }) => demo(&payloads, json),
        Some(Commands::Tamper) => tamper(),
        None => demo(&[], false),
    }
}

fn demo(payloads: &[String], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (config, mut ledger) = load_ledger_from_config()?;
    if !config.display.color {
        colored::control::set_override(false);
    }

    if payloads.is_empty() {
        for payload in DEFAULT_PAYLOADS {
            ledger.append(payload);
        }
    } else {
        for payload in payloads {
            ledger.append(payload.clone());
        }
    }
    info!("Built chain with {} blocks", ledger.len());

    if json {
        println!("{}", serde_json::to_string_pretty(&ledger)?);
    } else {
        println!("{}", "⛓  ChainLedger".bright_cyan());
        println!("{}", render_chain(&ledger, config.display.hash_preview));
    }

    print_verdict(&ledger);
    Ok(())
}

fn tamper() -> Result<(), Box<dyn std::error::Error>> {
    let (config, mut ledger) = load_ledger_from_config()?;
    if !config.display.color {
        colored::control::set_override(false);
    }

    for payload in DEFAULT_PAYLOADS {
        ledger.append(payload);
    }

    println!("{}", "Before tampering:".bright_cyan());
    print_verdict(&ledger);

    // Rewrite a historical payload without touching any digest.
    ledger.blocks[2].payload = "Hacked".to_string();
    info!("Corrupted payload of block 2");

    println!("{}", "After tampering with block 2:".bright_cyan());
    println!("{}", render_chain(&ledger, config.display.hash_preview));
    print_verdict(&ledger);
    Ok(())
}
