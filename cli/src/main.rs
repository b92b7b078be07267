// Copyright (c) 2026 Linkchain Developers. MIT License.
// See LICENSE for details.

//! # linkchain CLI
//!
//! Entry point for the `linkchain` binary. Parses CLI arguments, initializes
//! logging, and dispatches to a subcommand:
//!
//! - `append`    — build a chain from payloads and validate it
//! - `digest`    — print the SHA-1 digest of a string
//! - `scenarios` — run the built-in corruption scenarios
//! - `version`   — print build version information

mod cli;
mod logging;
mod output;
mod scenarios;

use anyhow::{bail, Context, Result};
use clap::Parser;

use linkchain::config::{HASH_ALGORITHM, SERIALIZATION_VERSION};
use linkchain::crypto::sha1_digest;
use linkchain::{find_faults, Block, Chain, ChainConfig, Digest};

use cli::{AppendArgs, Commands, DigestArgs, LinkchainCli, OutputFormat, ScenarioArgs};
use logging::LogFormat;
use output::ChainOutput;

fn main() -> Result<()> {
    let cli = LinkchainCli::parse();
    logging::init_logging(&cli.log_level, LogFormat::from_flag(cli.json_logs));

    match cli.command {
        Commands::Append(args) => append(args),
        Commands::Digest(args) => digest(args),
        Commands::Scenarios(args) => run_scenarios(args),
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Builds a chain from the given payloads, corrupting the requested
/// positions, then prints the chain and its report.
fn append(args: AppendArgs) -> Result<()> {
    if let Some(&bad) = args.corrupt.iter().find(|&&p| p >= args.data.len()) {
        bail!(
            "--corrupt {} is out of range for {} payload(s)",
            bad,
            args.data.len()
        );
    }

    let config = if args.legacy_index {
        ChainConfig::caller_assigned()
    } else {
        ChainConfig::default()
    };
    let mut chain = Chain::with_config(config);

    for (position, data) in args.data.into_iter().enumerate() {
        let block = Block::new(data);
        if args.corrupt.contains(&position) {
            tracing::info!(position, "corrupting predecessor link");
            chain.append_with(block, |b| b.previous_digest = Digest::filled(0xFF));
        } else {
            chain.append(block);
        }
    }

    let report = chain.validate();
    let faults = find_faults(&chain);

    match args.format {
        OutputFormat::Text => {
            print!("{}", output::render_chain_text(&chain, &report, &faults));
        }
        OutputFormat::Json => {
            let out = ChainOutput {
                blocks: &chain,
                report,
                faults: &faults,
            };
            let json = serde_json::to_string_pretty(&out).context("failed to encode chain")?;
            println!("{}", json);
        }
    }
    Ok(())
}

fn digest(args: DigestArgs) -> Result<()> {
    println!("{}", sha1_digest(args.text.as_bytes()));
    Ok(())
}

/// Runs the built-in scenarios. Fails the process if any scenario fails.
fn run_scenarios(args: ScenarioArgs) -> Result<()> {
    let results = scenarios::run_all();

    match args.format {
        OutputFormat::Text => print!("{}", output::render_scenarios_text(&results)),
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&results).context("failed to encode results")?;
            println!("{}", json);
        }
    }

    let failed = results.iter().filter(|r| !r.passed).count();
    if failed > 0 {
        bail!("{} of {} scenario(s) failed", failed, results.len());
    }
    Ok(())
}

fn print_version() {
    println!("linkchain {}", env!("CARGO_PKG_VERSION"));
    println!(
        "digest: {} ({} bytes), preimage format v{}",
        HASH_ALGORITHM,
        linkchain::config::DIGEST_LENGTH,
        SERIALIZATION_VERSION
    );
}
