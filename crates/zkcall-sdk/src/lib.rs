// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! # zkcall-sdk
//!
//! Client library for submitting PGHR13 proofs to Ethereum contracts.
//!
//! The proof check itself runs on-chain. This crate finds the deployed
//! contract, encodes the proof as call data, makes the call and turns
//! the node's answer into an explicit outcome.
//!
//! ## Crate layout
//!
//! | Module | Purpose |
//! |---|---|
//! | *crate root* | Re-exports proof types (`Proof`, `ProofBundle`, …) |
//! | [`rpc`] | Ethereum JSON-RPC over HTTP |
//! | [`registry`] | Contract lookup from build artifacts |
//! | [`abi`] | `verifyTx` / `f` call data |
//! | [`client`] | `verify` and `submit` flows |
//! | [`config`] | Settings persistence and env overrides |
//! | [`error`] | Typed errors |
//!
//! ## Typical flow
//!
//! ```rust,no_run
//! use zkcall_sdk::client::{Sender, SubmitOutcome, ZkClient};
//! use zkcall_sdk::{config, fixtures};
//!
//! # async fn example() -> zkcall_sdk::error::ZkResult<()> {
//! let client = ZkClient::new(config::load_settings()?)?;
//! let bundle = fixtures::test_contract_proof();
//! if let SubmitOutcome::Mined(report) = client.submit(&bundle.proof, Sender::Index(1)).await? {
//!     println!("gas used: {}", report.gas_used);
//! }
//! # Ok(())
//! # }
//! ```

pub use zkcall_types::{
    fixtures, Coord, Fixture, G1Point, G2Point, Proof, ProofBundle, ProofField, PublicInput,
    TypesError, PROOF_WORDS,
};

pub mod abi;
pub mod client;
pub mod config;
pub mod error;
pub mod registry;
pub mod rpc;
