use anyhow::Result;
use clap::ValueEnum;
use zkcall_sdk::{abi, Coord, Fixture, Proof};

use super::ProofArgs;
use crate::output;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Calldata {
    /// verifyTx(proof fields, input)
    Verify,
    /// f(proof x4)
    Submit,
}

/// The 18 proof words as `0x` hex, in submission order.
pub fn proof_arr(proof: &Proof) -> Vec<String> {
    proof.coords().map(Coord::to_hex).collect()
}

/// Proofs are printed to stdout in every mode so they can be piped.
pub fn run(proof: &ProofArgs, flat: bool, calldata: Option<Calldata>) -> Result<bool> {
    let bundle = proof.load(Fixture::Verifier)?;

    if let Some(kind) = calldata {
        let data = match kind {
            Calldata::Verify => {
                let function = abi::builtin_verify(bundle.input.len())?;
                abi::encode_verify_call(&function, &bundle)?
            }
            Calldata::Submit => abi::encode_submit_call(&abi::builtin_submit()?, &bundle.proof)?,
        };
        let hex = format!("0x{}", hex::encode(&data));
        if output::is_json() {
            output::json_output(&serde_json::json!({ "calldata": hex, "bytes": data.len() }));
        } else {
            println!("{hex}");
        }
        return Ok(true);
    }

    if flat {
        let words = proof_arr(&bundle.proof);
        if output::is_json() {
            output::json_output(&serde_json::json!({ "proof_arr": words }));
        } else {
            println!("[{}]", words.join(", "));
        }
        return Ok(true);
    }

    println!("{}", bundle.to_json_pretty()?);
    Ok(true)
}
