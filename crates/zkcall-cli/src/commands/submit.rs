use anyhow::Result;
use serde_json::json;
use zkcall_sdk::client::{SubmitOutcome, ZkClient};
use zkcall_sdk::config::Settings;
use zkcall_sdk::Fixture;

use super::{ProofArgs, SenderArgs};
use crate::output::{self, Line, Report, Tone};

/// Account 1; account 0 usually deployed the contracts.
const DEFAULT_SENDER: usize = 1;

pub async fn run(settings: Settings, proof: &ProofArgs, sender: &SenderArgs) -> Result<bool> {
    let bundle = proof.load(Fixture::TestContract)?;
    let sender = sender.resolve(DEFAULT_SENDER)?;
    let client = ZkClient::new(settings)?;

    output::label("proof", &proof.describe(Fixture::TestContract));

    let pb = output::spinner("sending f and waiting for the receipt...");
    let outcome = client.submit(&bundle.proof, sender).await;
    pb.finish_and_clear();

    Ok(report(&outcome?).emit())
}

pub fn report(outcome: &SubmitOutcome) -> Report {
    match outcome {
        SubmitOutcome::Mined(tx) => {
            let mut lines = vec![
                Line::text(Tone::Good, "TX successful: called function f"),
                Line::text(Tone::Plain, format!("Gas used: {}", tx.gas_used)),
                Line::label("tx", Tone::Plain, format!("{:?}", tx.hash)),
            ];
            if !tx.gas_plausible() {
                lines.push(Line::text(
                    Tone::Warn,
                    "gas used is outside (0, block gas limit)",
                ));
            }
            Report {
                lines,
                json: json!({
                    "outcome": "mined",
                    "tx_hash": format!("{:?}", tx.hash),
                    "block_number": tx.block_number.map(|b| b.as_u64()),
                    "gas_used": tx.gas_used.to_string(),
                    "block_gas_limit": tx.block_gas_limit.map(|l| l.to_string()),
                    "success": true,
                }),
                ok: true,
            }
        }
        SubmitOutcome::Rejected(r) => Report {
            lines: vec![
                Line::text(Tone::Bad, "TX failed: could not call function f"),
                Line::Detail(r.message.clone()),
            ],
            json: json!({
                "outcome": "rejected",
                "revert": r.revert,
                "reason": r.message,
                "success": false,
            }),
            ok: false,
        },
    }
}
