// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! High-level proof submission client.
//!
//! Wraps rpc, registry and abi into two calls:
//!
//! - [`ZkClient::verify`]: read-only `eth_call` of `verifyTx` on the
//!   verifier contract.
//! - [`ZkClient::submit`]: state-changing `f` transaction on the test
//!   contract, waiting for the receipt and reporting gas.
//!
//! Both return an explicit outcome. A contract or node refusing the call
//! is a `Rejected` outcome; an `Err` means the call never happened or
//! its result could not be read.
//!
//! ```rust,no_run
//! use zkcall_sdk::client::{Sender, VerifyOutcome, ZkClient};
//! use zkcall_sdk::config::Settings;
//!
//! # async fn example() -> zkcall_sdk::error::ZkResult<()> {
//! let client = ZkClient::new(Settings::default())?;
//! let bundle = zkcall_types::fixtures::verifier_proof();
//! match client.verify(&bundle, Sender::Index(0)).await? {
//!     VerifyOutcome::Verified(ok) => println!("verified: {ok}"),
//!     VerifyOutcome::Rejected(r) => println!("rejected: {}", r.message),
//! }
//! # Ok(())
//! # }
//! ```

use ethers_core::types::{Address, H256, U256, U64};
use tracing::{info, warn};
use zkcall_types::{Proof, ProofBundle};

use crate::abi;
use crate::config::Settings;
use crate::error::{ZkError, ZkResult};
use crate::registry::{ArtifactRegistry, ContractHandle};
use crate::rpc::{CallRequest, RpcClient, RpcError};

// ---------------------------------------------------------------------------
// Structs
// ---------------------------------------------------------------------------

pub struct ZkClient {
    rpc: RpcClient,
    registry: ArtifactRegistry,
    settings: Settings,
}

/// Which account the call is made from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    Address(Address),
    /// Position in the node's `eth_accounts` list.
    Index(usize),
    /// No `from` field. Only valid for read-only calls.
    Anonymous,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rejection {
    pub message: String,
    /// The EVM executed and aborted, as opposed to the node refusing.
    pub revert: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerifyOutcome {
    Verified(bool),
    Rejected(Rejection),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxReport {
    pub hash: H256,
    pub block_number: Option<U64>,
    pub gas_used: U256,
    pub block_gas_limit: Option<U256>,
}

impl TxReport {
    /// `0 < gas_used < block_gas_limit`; unknown limit only checks positivity.
    pub fn gas_plausible(&self) -> bool {
        !self.gas_used.is_zero() && self.block_gas_limit.map_or(true, |l| self.gas_used < l)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Mined(TxReport),
    Rejected(Rejection),
}

impl VerifyOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, VerifyOutcome::Verified(true))
    }
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Mined(_))
    }
}

/// Node refusals become outcomes; transport trouble stays an error.
fn rejection(err: RpcError) -> ZkResult<Rejection> {
    if err.is_node_rejection() {
        Ok(Rejection {
            revert: err.is_revert(),
            message: err.to_string(),
        })
    } else {
        Err(err.into())
    }
}

// ---------------------------------------------------------------------------
// Constructors
// ---------------------------------------------------------------------------

impl ZkClient {
    pub fn new(settings: Settings) -> ZkResult<Self> {
        let rpc = RpcClient::new(&settings.rpc_url, settings.request_timeout())?;
        let registry = ArtifactRegistry::new(settings.artifacts_dir.clone());
        Ok(Self {
            rpc,
            registry,
            settings,
        })
    }

    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    pub async fn network_id(&self) -> ZkResult<String> {
        if let Some(id) = &self.settings.network_id {
            return Ok(id.clone());
        }
        Ok(self.rpc.net_version().await?)
    }

    pub async fn resolve_verifier(&self) -> ZkResult<ContractHandle> {
        let network = self.network_id().await?;
        self.registry.resolve_with_override(
            &self.settings.verifier_contract,
            &network,
            self.settings.verifier_address,
        )
    }

    pub async fn resolve_test(&self) -> ZkResult<ContractHandle> {
        let network = self.network_id().await?;
        self.registry.resolve_with_override(
            &self.settings.test_contract,
            &network,
            self.settings.test_address,
        )
    }

    /// Map a [`Sender`] to a `from` address.
    pub async fn sender(&self, sender: Sender) -> ZkResult<Option<Address>> {
        match sender {
            Sender::Address(a) => Ok(Some(a)),
            Sender::Anonymous => Ok(None),
            Sender::Index(i) => {
                let accounts = self.rpc.accounts().await?;
                accounts.get(i).copied().map(Some).ok_or_else(|| {
                    ZkError::Config(format!(
                        "account index {i} out of range: node exposes {} account(s)",
                        accounts.len()
                    ))
                })
            }
        }
    }

    // -----------------------------------------------------------------------
    // Submission
    // -----------------------------------------------------------------------

    /// Simulated `verifyTx` call. Nothing is written on-chain.
    pub async fn verify(&self, bundle: &ProofBundle, sender: Sender) -> ZkResult<VerifyOutcome> {
        let handle = self.resolve_verifier().await?;
        let function = abi::select(handle.abi.as_ref(), abi::VERIFY_METHOD, || {
            abi::builtin_verify(bundle.input.len())
        })?;
        let data = abi::encode_verify_call(&function, bundle)?;
        let from = self.sender(sender).await?;

        info!(contract = %handle.name, address = ?handle.address, "calling {}", function.name);
        let tx = CallRequest {
            from,
            to: handle.address,
            data,
            gas: None,
        };
        let output = match self.rpc.call(&tx).await {
            Ok(out) => out,
            Err(e) => return Ok(VerifyOutcome::Rejected(rejection(e)?)),
        };

        if output.is_empty() {
            return Ok(VerifyOutcome::Rejected(Rejection {
                message: format!("empty return data: no contract code at {:?}?", handle.address),
                revert: false,
            }));
        }
        let verified = abi::decode_bool(&function, &output)?;
        info!(verified, "verification call returned");
        Ok(VerifyOutcome::Verified(verified))
    }

    /// `f(proof, proof, proof, proof)` transaction, waiting for the receipt.
    pub async fn submit(&self, proof: &Proof, sender: Sender) -> ZkResult<SubmitOutcome> {
        if sender == Sender::Anonymous {
            return Err(ZkError::Config(
                "a transaction needs a sender account".to_string(),
            ));
        }
        let handle = self.resolve_test().await?;
        let function = abi::select(handle.abi.as_ref(), abi::SUBMIT_METHOD, abi::builtin_submit)?;
        let data = abi::encode_submit_call(&function, proof)?;
        let from = self.sender(sender).await?;

        info!(contract = %handle.name, address = ?handle.address, "sending {}", function.name);
        let tx = CallRequest {
            from,
            to: handle.address,
            data,
            gas: None,
        };
        let hash = match self.rpc.send_transaction(&tx).await {
            Ok(h) => h,
            Err(e) => return Ok(SubmitOutcome::Rejected(rejection(e)?)),
        };

        let receipt = self
            .rpc
            .wait_for_receipt(
                hash,
                self.settings.poll_interval(),
                self.settings.receipt_timeout(),
            )
            .await?;
        info!(hash = ?hash, block = ?receipt.block_number, "receipt received");

        if !receipt.succeeded() {
            return Ok(SubmitOutcome::Rejected(Rejection {
                message: format!("transaction {hash:?} reverted (status 0)"),
                revert: true,
            }));
        }

        let block_gas_limit = match self.rpc.block_gas_limit(receipt.block_number).await {
            Ok(limit) => Some(limit),
            Err(e) => {
                warn!("cannot read block gas limit: {e}");
                None
            }
        };
        let report = TxReport {
            hash,
            block_number: receipt.block_number,
            gas_used: receipt.gas_used.unwrap_or_default(),
            block_gas_limit,
        };
        if !report.gas_plausible() {
            warn!(
                gas_used = %report.gas_used,
                limit = ?report.block_gas_limit,
                "gas used outside (0, block gas limit)"
            );
        }
        Ok(SubmitOutcome::Mined(report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(gas: u64, limit: Option<u64>) -> TxReport {
        TxReport {
            hash: H256::zero(),
            block_number: None,
            gas_used: U256::from(gas),
            block_gas_limit: limit.map(U256::from),
        }
    }

    #[test]
    fn gas_plausibility() {
        assert!(report(21_000, Some(6_721_975)).gas_plausible());
        assert!(report(21_000, None).gas_plausible());
        assert!(!report(0, Some(6_721_975)).gas_plausible());
        assert!(!report(6_721_975, Some(6_721_975)).gas_plausible());
    }

    #[test]
    fn node_errors_become_rejections() {
        let r = rejection(RpcError::Node {
            code: -32000,
            message: "execution reverted".into(),
            data: None,
        })
        .unwrap();
        assert!(r.revert);
        assert!(r.message.contains("execution reverted"));
    }

    #[test]
    fn decode_errors_stay_errors() {
        let source = serde_json::from_str::<u8>("\"x\"").unwrap_err();
        let err = rejection(RpcError::Decode {
            method: "eth_call".into(),
            source,
        });
        assert!(err.is_err());
    }

    #[test]
    fn success_predicates() {
        assert!(VerifyOutcome::Verified(true).is_success());
        assert!(!VerifyOutcome::Verified(false).is_success());
        assert!(SubmitOutcome::Mined(report(1, None)).is_success());
        let rejected = Rejection {
            message: "no".into(),
            revert: true,
        };
        assert!(!VerifyOutcome::Rejected(rejected.clone()).is_success());
        assert!(!SubmitOutcome::Rejected(rejected).is_success());
    }

    #[test]
    fn new_accepts_defaults() {
        assert!(ZkClient::new(Settings::default()).is_ok());
    }

    #[test]
    fn anonymous_submit_is_config_error() {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let client = ZkClient::new(Settings::default()).unwrap();
            let err = client
                .submit(&Proof::zero(), Sender::Anonymous)
                .await
                .unwrap_err();
            assert!(matches!(err, ZkError::Config(_)));
        });
    }
}
