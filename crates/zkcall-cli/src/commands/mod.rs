pub mod config;
pub mod show_proof;
pub mod status;
pub mod submit;
pub mod verify;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use zkcall_sdk::client::Sender;
use zkcall_sdk::config::parse_address;
use zkcall_sdk::{Fixture, ProofBundle, ProofField, PublicInput};

/// Where the proof comes from, and what to do to it before sending.
#[derive(Args, Debug, Default)]
pub struct ProofArgs {
    /// Proof bundle JSON (ZoKrates proof.json layout)
    #[arg(long, conflicts_with = "fixture")]
    pub proof: Option<PathBuf>,
    /// Built-in data set: `verifier` or `test-contract`
    #[arg(long)]
    pub fixture: Option<Fixture>,
    /// Replace the proof with all zeros, keeping the input
    #[arg(long)]
    pub zero: bool,
    /// Bump the first coordinate of one field (A, A_p, B, B_p, C, C_p, H, K)
    #[arg(long, conflicts_with = "zero")]
    pub tamper: Option<ProofField>,
    /// Replace the public input, comma separated (e.g. 15,1)
    #[arg(long)]
    pub input: Option<PublicInput>,
}

impl ProofArgs {
    pub fn load(&self, default: Fixture) -> Result<ProofBundle> {
        let mut bundle = match &self.proof {
            Some(path) => ProofBundle::load(path)
                .with_context(|| format!("failed to load proof from {}", path.display()))?,
            None => self.fixture.unwrap_or(default).bundle(),
        };
        if let Some(input) = &self.input {
            bundle.input = input.clone();
        }
        if self.zero {
            bundle = bundle.zeroed();
        }
        if let Some(field) = self.tamper {
            bundle.proof = bundle.proof.tamper(field);
        }
        Ok(bundle)
    }

    /// Short human description, e.g. `fixture verifier (tampered C)`.
    pub fn describe(&self, default: Fixture) -> String {
        let mut s = match &self.proof {
            Some(path) => format!("file {}", path.display()),
            None => format!("fixture {}", self.fixture.unwrap_or(default)),
        };
        if self.zero {
            s.push_str(" (all-zero proof)");
        }
        if let Some(field) = self.tamper {
            s.push_str(&format!(" (tampered {field})"));
        }
        s
    }
}

#[derive(Args, Debug, Default)]
pub struct SenderArgs {
    /// Sender address, unlocked on the node
    #[arg(long, conflicts_with_all = ["from_index", "no_from"])]
    pub from: Option<String>,
    /// Sender as an index into the node's accounts
    #[arg(long, conflicts_with = "no_from")]
    pub from_index: Option<usize>,
    /// Omit the sender (read-only calls only)
    #[arg(long)]
    pub no_from: bool,
}

impl SenderArgs {
    pub fn resolve(&self, default_index: usize) -> Result<Sender> {
        if self.no_from {
            return Ok(Sender::Anonymous);
        }
        if let Some(addr) = &self.from {
            return Ok(Sender::Address(parse_address(addr)?));
        }
        Ok(Sender::Index(self.from_index.unwrap_or(default_index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        proof: ProofArgs,
        #[command(flatten)]
        sender: SenderArgs,
    }

    fn parse(args: &[&str]) -> Harness {
        Harness::try_parse_from(std::iter::once("zkcall").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_to_given_fixture() {
        let h = parse(&[]);
        let bundle = h.proof.load(Fixture::Verifier).unwrap();
        assert_eq!(bundle, Fixture::Verifier.bundle());
        assert_eq!(h.sender.resolve(1).unwrap(), Sender::Index(1));
    }

    #[test]
    fn zero_keeps_input() {
        let h = parse(&["--fixture", "test-contract", "--zero"]);
        let bundle = h.proof.load(Fixture::Verifier).unwrap();
        assert!(bundle.proof.is_zero());
        assert_eq!(bundle.input, PublicInput::from_u64s(&[113569, 1]));
        assert!(h.proof.describe(Fixture::Verifier).contains("all-zero"));
    }

    #[test]
    fn tamper_and_input_override() {
        let h = parse(&["--tamper", "A_p", "--input", "16,1"]);
        let bundle = h.proof.load(Fixture::Verifier).unwrap();
        let original = Fixture::Verifier.bundle();
        assert_ne!(bundle.proof.a_p, original.proof.a_p);
        assert_eq!(bundle.proof.a, original.proof.a);
        assert_eq!(bundle.input, PublicInput::from_u64s(&[16, 1]));
    }

    #[test]
    fn zero_and_tamper_conflict() {
        let res = Harness::try_parse_from(["zkcall", "--zero", "--tamper", "A"]);
        assert!(res.is_err());
    }

    #[test]
    fn bad_field_is_a_parse_error() {
        assert!(Harness::try_parse_from(["zkcall", "--tamper", "Q"]).is_err());
        assert!(Harness::try_parse_from(["zkcall", "--fixture", "rsa"]).is_err());
    }

    #[test]
    fn sender_forms() {
        let h = parse(&["--from", "0x5fbdb2315678afecb367f032d93f642f64180aa3"]);
        assert!(matches!(h.sender.resolve(0).unwrap(), Sender::Address(_)));
        let h = parse(&["--from-index", "3"]);
        assert_eq!(h.sender.resolve(0).unwrap(), Sender::Index(3));
        let h = parse(&["--no-from"]);
        assert_eq!(h.sender.resolve(0).unwrap(), Sender::Anonymous);
        let h = parse(&["--from", "0x12"]);
        assert!(h.sender.resolve(0).is_err());
    }
}
