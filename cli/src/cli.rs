//! # CLI Interface
//!
//! Defines the command-line argument structure for `linkchain` using
//! `clap` derive. Supports four subcommands: `append`, `digest`,
//! `scenarios`, and `version`.

use clap::{Parser, Subcommand, ValueEnum};

/// Build and check tamper-evident block chains.
#[derive(Parser, Debug)]
#[command(
    name = "linkchain",
    about = "Build and check tamper-evident block chains",
    version,
    propagate_version = true
)]
pub struct LinkchainCli {
    /// Default log filter when `RUST_LOG` is unset.
    #[arg(long, global = true, env = "LINKCHAIN_LOG", default_value = "warn")]
    pub log_level: String,

    /// Emit JSON log lines instead of human-readable ones.
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Append payloads to a fresh chain, then print the blocks and the
    /// validation report.
    Append(AppendArgs),
    /// Print the SHA-1 digest of a string.
    Digest(DigestArgs),
    /// Run the built-in corruption scenarios and report pass/fail.
    Scenarios(ScenarioArgs),
    /// Print version information and exit.
    Version,
}

/// Output rendering for commands that print chains or reports.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned, human-readable text.
    Text,
    /// Pretty-printed JSON on stdout.
    Json,
}

/// Arguments for the `append` subcommand.
#[derive(Parser, Debug)]
pub struct AppendArgs {
    /// Payloads, one block each, in append order.
    #[arg(required = true)]
    pub data: Vec<String>,

    /// Hash the unassigned index sentinel instead of the chain position.
    #[arg(long)]
    pub legacy_index: bool,

    /// Overwrite the predecessor link of the block at this position with
    /// all-0xFF bytes, to see what the validator reports.
    #[arg(long, value_name = "POSITION")]
    pub corrupt: Vec<usize>,

    /// Output format.
    #[arg(long, short = 'f', env = "LINKCHAIN_FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the `digest` subcommand.
#[derive(Parser, Debug)]
pub struct DigestArgs {
    /// Text to hash, as UTF-8 bytes.
    pub text: String,
}

/// Arguments for the `scenarios` subcommand.
#[derive(Parser, Debug)]
pub struct ScenarioArgs {
    /// Output format.
    #[arg(long, short = 'f', env = "LINKCHAIN_FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        LinkchainCli::command().debug_assert();
    }

    #[test]
    fn parses_append_with_corruption() {
        let cli = LinkchainCli::try_parse_from([
            "linkchain", "append", "x", "y", "--corrupt", "1", "-f", "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Append(args) => {
                assert_eq!(args.data, vec!["x", "y"]);
                assert_eq!(args.corrupt, vec![1]);
                assert_eq!(args.format, OutputFormat::Json);
                assert!(!args.legacy_index);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn append_requires_data() {
        assert!(LinkchainCli::try_parse_from(["linkchain", "append"]).is_err());
    }
}
