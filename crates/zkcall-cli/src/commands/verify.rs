use anyhow::Result;
use serde_json::json;
use zkcall_sdk::client::{VerifyOutcome, ZkClient};
use zkcall_sdk::config::Settings;
use zkcall_sdk::Fixture;

use super::{ProofArgs, SenderArgs};
use crate::output::{self, Line, Report, Tone};

/// Account 0, as the verifier has always been called from.
const DEFAULT_SENDER: usize = 0;

pub async fn run(settings: Settings, proof: &ProofArgs, sender: &SenderArgs) -> Result<bool> {
    let bundle = proof.load(Fixture::Verifier)?;
    let sender = sender.resolve(DEFAULT_SENDER)?;
    let client = ZkClient::new(settings)?;

    output::label("proof", &proof.describe(Fixture::Verifier));
    output::label("input", &bundle.input.decimal_strings().join(", "));

    let pb = output::spinner("calling verifyTx...");
    let outcome = client.verify(&bundle, sender).await;
    pb.finish_and_clear();

    Ok(report(&outcome?).emit())
}

pub fn report(outcome: &VerifyOutcome) -> Report {
    let ok = outcome.is_success();
    match outcome {
        VerifyOutcome::Verified(true) => Report {
            lines: vec![
                Line::text(Tone::Good, "Success: proof verification did not raise an error!"),
                Line::text(Tone::Good, "Verification result: true"),
            ],
            json: json!({ "outcome": "verified", "result": true, "success": ok }),
            ok,
        },
        VerifyOutcome::Verified(false) => Report {
            lines: vec![
                Line::text(Tone::Bad, "Failure: proof verification returned false"),
                Line::text(Tone::Bad, "Verification result: false"),
            ],
            json: json!({ "outcome": "verified", "result": false, "success": ok }),
            ok,
        },
        VerifyOutcome::Rejected(r) => Report {
            lines: vec![
                Line::text(Tone::Bad, "Failure: proof verification raised an error!"),
                Line::Detail(r.message.clone()),
            ],
            json: json!({
                "outcome": "rejected",
                "revert": r.revert,
                "reason": r.message,
                "success": ok,
            }),
            ok,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zkcall_sdk::client::Rejection;

    #[test]
    fn true_result_is_the_only_success() {
        let r = report(&VerifyOutcome::Verified(true));
        assert!(r.ok);
        assert_eq!(
            r.lines[0],
            Line::text(Tone::Good, "Success: proof verification did not raise an error!")
        );
        assert_eq!(r.lines[1], Line::text(Tone::Good, "Verification result: true"));
        assert_eq!(r.json["success"], true);
        assert_eq!(r.json["result"], true);
    }

    #[test]
    fn false_result_reads_as_failure() {
        let r = report(&VerifyOutcome::Verified(false));
        assert!(!r.ok);
        assert!(r.lines.iter().all(|l| !matches!(l, Line::Text(Tone::Good, _))));
        assert!(matches!(&r.lines[0], Line::Text(Tone::Bad, s) if s.starts_with("Failure")));
        assert_eq!(r.json["outcome"], "verified");
        assert_eq!(r.json["result"], false);
        assert_eq!(r.json["success"], false);
    }

    #[test]
    fn rejection_carries_reason() {
        let r = report(&VerifyOutcome::Rejected(Rejection {
            message: "execution reverted".into(),
            revert: true,
        }));
        assert!(!r.ok);
        assert_eq!(
            r.lines,
            vec![
                Line::text(Tone::Bad, "Failure: proof verification raised an error!"),
                Line::Detail("execution reverted".into()),
            ]
        );
        assert_eq!(r.json["outcome"], "rejected");
        assert_eq!(r.json["revert"], true);
        assert_eq!(r.json["reason"], "execution reverted");
    }
}
