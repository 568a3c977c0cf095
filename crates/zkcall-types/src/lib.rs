// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

pub mod bundle;
pub mod coord;
pub mod error;
pub mod fixtures;
pub mod input;
pub mod proof;

pub use bundle::ProofBundle;
pub use coord::{strip_0x, Coord};
pub use error::TypesError;
pub use fixtures::Fixture;
pub use input::PublicInput;
pub use proof::{G1Point, G2Point, Proof, ProofField, PROOF_WORDS};

/// 256-bit word used for every coordinate and public input value.
pub use ethers_core::types::U256;
