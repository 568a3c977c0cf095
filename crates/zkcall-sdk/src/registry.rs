// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Deployed contract lookup from build artifacts.
//!
//! Each compiled contract has an artifact at `<dir>/<Name>.json`:
//!
//! ```json
//! { "contractName": "Verifier",
//!   "abi": [ ... ],
//!   "networks": { "5777": { "address": "0x..." } } }
//! ```
//!
//! Resolution picks the address recorded for the node's network id. An
//! explicit address skips the `networks` table; the artifact is then
//! only read for its ABI, and may be missing altogether.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use ethers_core::abi::Abi;
use ethers_core::types::Address;
use serde::Deserialize;
use tracing::info;

use crate::error::{ZkError, ZkResult};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Artifact {
    #[serde(default)]
    contract_name: Option<String>,
    #[serde(default)]
    abi: Option<Abi>,
    #[serde(default)]
    networks: HashMap<String, NetworkEntry>,
}

#[derive(Deserialize)]
struct NetworkEntry {
    address: Address,
}

/// A live contract: where it is and, when known, its ABI.
#[derive(Clone, Debug)]
pub struct ContractHandle {
    pub name: String,
    pub address: Address,
    pub abi: Option<Abi>,
}

pub struct ArtifactRegistry {
    dir: PathBuf,
}

impl ArtifactRegistry {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn artifact_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }

    fn load(&self, name: &str) -> ZkResult<Artifact> {
        let path = self.artifact_path(name);
        let data = fs::read_to_string(&path).map_err(|e| {
            ZkError::Registry(format!("cannot read artifact {}: {e}", path.display()))
        })?;
        let artifact: Artifact = serde_json::from_str(&data).map_err(|e| {
            ZkError::Registry(format!("invalid artifact {}: {e}", path.display()))
        })?;
        if let Some(declared) = &artifact.contract_name {
            if declared != name {
                return Err(ZkError::Registry(format!(
                    "artifact {} describes `{declared}`, not `{name}`",
                    path.display()
                )));
            }
        }
        Ok(artifact)
    }

    /// Look up `name` as deployed on `network_id`.
    pub fn resolve(&self, name: &str, network_id: &str) -> ZkResult<ContractHandle> {
        let artifact = self.load(name)?;
        let entry = artifact.networks.get(network_id).ok_or_else(|| {
            let mut known: Vec<&str> = artifact.networks.keys().map(String::as_str).collect();
            known.sort_unstable();
            ZkError::Registry(format!(
                "{name} is not deployed on network {network_id} (deployed on: [{}])",
                known.join(", ")
            ))
        })?;
        info!(contract = name, network = network_id, address = ?entry.address, "resolved contract");
        Ok(ContractHandle {
            name: name.to_string(),
            address: entry.address,
            abi: artifact.abi,
        })
    }

    /// Like [`resolve`](Self::resolve), but an explicit address wins.
    pub fn resolve_with_override(
        &self,
        name: &str,
        network_id: &str,
        address: Option<Address>,
    ) -> ZkResult<ContractHandle> {
        let Some(address) = address else {
            return self.resolve(name, network_id);
        };
        let abi = if self.artifact_path(name).exists() {
            self.load(name)?.abi
        } else {
            None
        };
        info!(contract = name, address = ?address, "using configured address");
        Ok(ContractHandle {
            name: name.to_string(),
            address,
            abi,
        })
    }
}
