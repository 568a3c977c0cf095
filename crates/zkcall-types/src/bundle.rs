// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Proof plus public input, in the `proof.json` layout emitted by
//! ZoKrates for PGHR13:
//!
//! ```json
//! { "proof": { "A": ["0x..", "0x.."], "A_p": [..], "B": [[..], [..]], ... },
//!   "input": ["15", "1"] }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TypesError;
use crate::input::PublicInput;
use crate::proof::Proof;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofBundle {
    pub proof: Proof,
    pub input: PublicInput,
}

impl ProofBundle {
    pub fn from_json(s: &str) -> Result<Self, TypesError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, TypesError> {
        let data = fs::read_to_string(path).map_err(|source| TypesError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&data)
    }

    pub fn to_json_pretty(&self) -> Result<String, TypesError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Same input, all-zero proof.
    pub fn zeroed(&self) -> Self {
        Self {
            proof: Proof::zero(),
            input: self.input.clone(),
        }
    }
}
