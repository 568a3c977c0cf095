mod commands;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use zkcall_sdk::config::{self, Settings};

use commands::show_proof::Calldata;
use commands::{ProofArgs, SenderArgs};

#[derive(Parser)]
#[command(
    name = "zkcall",
    version,
    about = "Submit PGHR13 proofs to Ethereum verifier contracts"
)]
struct Cli {
    /// Machine-readable JSON on stdout
    #[arg(long, global = true)]
    json: bool,
    /// Node URL, overriding config and ZKCALL_RPC_URL
    #[arg(long, global = true)]
    rpc_url: Option<String>,
    /// Build artifact directory, overriding config and ZKCALL_ARTIFACTS_DIR
    #[arg(long, global = true)]
    artifacts: Option<std::path::PathBuf>,
    /// Log verbosity (-v info, -vv debug); RUST_LOG wins when set
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Simulate verifyTx on the verifier contract (eth_call)
    Verify {
        #[command(flatten)]
        proof: ProofArgs,
        #[command(flatten)]
        sender: SenderArgs,
    },
    /// Send f(proof x4) to the test contract and report gas
    Submit {
        #[command(flatten)]
        proof: ProofArgs,
        #[command(flatten)]
        sender: SenderArgs,
    },
    /// Node, network and contract health
    Status,
    /// Print a proof bundle
    ShowProof {
        #[command(flatten)]
        proof: ProofArgs,
        /// Print the 18-word proof array instead of the bundle
        #[arg(long, conflicts_with = "calldata")]
        flat: bool,
        /// Print encoded call data for `verify` or `submit`
        #[arg(long)]
        calldata: Option<Calldata>,
    },
    /// Show or edit ~/.zkcall/config.json
    Config {
        #[command(subcommand)]
        action: ConfigCmd,
    },
}

#[derive(Subcommand)]
enum ConfigCmd {
    /// Print every setting
    Show,
    /// Update one setting (`none` clears an optional key)
    Set { key: String, value: String },
    /// Write a config file with defaults
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Stored settings with env and flag overrides applied.
    fn settings(&self) -> anyhow::Result<Settings> {
        let mut settings = config::load_settings()?;
        if let Some(url) = &self.rpc_url {
            settings.rpc_url = url.clone();
        }
        if let Some(dir) = &self.artifacts {
            settings.artifacts_dir = dir.clone();
        }
        tracing::debug!(
            rpc_url = %settings.rpc_url,
            artifacts = %settings.artifacts_dir.display(),
            "effective settings"
        );
        Ok(settings)
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Runs the command; `Ok(false)` means it printed a failure outcome.
async fn dispatch(cli: &Cli) -> anyhow::Result<bool> {
    Ok(match &cli.command {
        Cmd::Verify { proof, sender } => {
            commands::verify::run(cli.settings()?, proof, sender).await?
        }
        Cmd::Submit { proof, sender } => {
            commands::submit::run(cli.settings()?, proof, sender).await?
        }
        Cmd::Status => commands::status::run(cli.settings()?).await?,
        Cmd::ShowProof {
            proof,
            flat,
            calldata,
        } => commands::show_proof::run(proof, *flat, *calldata)?,
        Cmd::Config { action } => match action {
            ConfigCmd::Show => commands::config::show(cli.settings()?)?,
            ConfigCmd::Set { key, value } => commands::config::set(key, value)?,
            ConfigCmd::Init { force } => commands::config::init(*force)?,
        },
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    output::set_json_mode(cli.json);
    init_tracing(cli.verbose);

    let ok = match dispatch(&cli).await {
        Ok(ok) => ok,
        Err(e) if output::is_json() => {
            output::json_output(&output::error_document(&e));
            false
        }
        Err(e) => return Err(e),
    };
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "zkcall",
            "verify",
            "--json",
            "-vv",
            "--rpc-url",
            "http://10.0.0.2:8545",
            "--tamper",
            "K",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.rpc_url.as_deref(), Some("http://10.0.0.2:8545"));
        assert!(matches!(cli.command, Cmd::Verify { .. }));
    }

    #[test]
    fn config_subcommands() {
        let cli = Cli::try_parse_from(["zkcall", "config", "set", "network_id", "5777"]).unwrap();
        match cli.command {
            Cmd::Config {
                action: ConfigCmd::Set { key, value },
            } => {
                assert_eq!(key, "network_id");
                assert_eq!(value, "5777");
            }
            _ => panic!("expected config set"),
        }
        assert!(Cli::try_parse_from(["zkcall", "config", "init", "--force"]).is_ok());
    }

    #[test]
    fn show_proof_flat_and_calldata_conflict() {
        assert!(Cli::try_parse_from(["zkcall", "show-proof", "--flat"]).is_ok());
        assert!(Cli::try_parse_from(["zkcall", "show-proof", "--calldata", "submit"]).is_ok());
        assert!(
            Cli::try_parse_from(["zkcall", "show-proof", "--flat", "--calldata", "verify"]).is_err()
        );
    }

    #[test]
    fn failed_command_yields_error_document() {
        let cli = Cli::try_parse_from([
            "zkcall",
            "--json",
            "show-proof",
            "--proof",
            "/nonexistent/zkcall/proof.json",
        ])
        .unwrap();
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let err = rt.block_on(dispatch(&cli)).unwrap_err();
        let doc = output::error_document(&err);
        assert_eq!(doc["success"], false);
        let msg = doc["error"].as_str().unwrap();
        assert!(msg.contains("failed to load proof"), "{msg}");
        assert!(msg.contains("/nonexistent/zkcall/proof.json"), "{msg}");
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["zkcall"]).is_err());
    }
}
