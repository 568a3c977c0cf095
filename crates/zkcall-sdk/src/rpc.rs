// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Ethereum JSON-RPC 2.0 over HTTP.
//!
//! Only the handful of methods the submission flows need. Results are
//! decoded into ethers primitive types (`Address`, `U256`, `Bytes`, ...),
//! which already speak the node's `0x` hex encoding.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use zkcall_sdk::rpc::RpcClient;
//!
//! # async fn example() -> Result<(), zkcall_sdk::rpc::RpcError> {
//! let rpc = RpcClient::new("http://127.0.0.1:8545", Duration::from_secs(30))?;
//! let network = rpc.net_version().await?;
//! let accounts = rpc.accounts().await?;
//! # Ok(())
//! # }
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use ethers_core::types::{Address, Bytes, H256, U256, U64};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("node error {code}: {message}")]
    Node {
        code: i64,
        message: String,
        data: Option<serde_json::Value>,
    },

    #[error("{method}: response carries neither result nor error")]
    EmptyResponse { method: String },

    #[error("{method}: cannot decode result: {source}")]
    Decode {
        method: String,
        source: serde_json::Error,
    },

    #[error("block {0} not found")]
    MissingBlock(String),

    #[error("no receipt for {hash:?} after {waited:?}")]
    ReceiptTimeout { hash: H256, waited: Duration },
}

impl RpcError {
    /// The node executed the call and the EVM aborted it. Nodes that
    /// attach revert output put it in `data`.
    pub fn is_revert(&self) -> bool {
        match self {
            RpcError::Node {
                code,
                message,
                data,
            } => {
                let m = message.to_ascii_lowercase();
                *code == 3
                    || data.is_some()
                    || m.contains("revert")
                    || m.contains("invalid opcode")
                    || m.contains("vm exception")
            }
            _ => false,
        }
    }

    /// The node answered, but refused the request.
    pub fn is_node_rejection(&self) -> bool {
        matches!(self, RpcError::Node { .. })
    }
}

const NO_PARAMS: [u8; 0] = [];

#[derive(Serialize)]
struct JsonRpcRequest<'a, P> {
    jsonrpc: &'a str,
    id: u64,
    method: &'a str,
    params: P,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    #[serde(default)]
    result: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<JsonRpcErrorObject>,
}

impl JsonRpcResponse {
    /// Error object first; a missing and a `null` result are both `None`.
    fn into_result(self) -> Result<Option<serde_json::Value>, RpcError> {
        if let Some(err) = self.error {
            return Err(RpcError::Node {
                code: err.code,
                message: err.message,
                data: err.data,
            });
        }
        Ok(self.result.filter(|v| !v.is_null()))
    }
}

fn decode<R: DeserializeOwned>(method: &str, value: serde_json::Value) -> Result<R, RpcError> {
    serde_json::from_value(value).map_err(|source| RpcError::Decode {
        method: method.to_string(),
        source,
    })
}

#[derive(Deserialize)]
struct JsonRpcErrorObject {
    code: i64,
    message: String,
    #[serde(default)]
    data: Option<serde_json::Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BlockHeader {
    gas_limit: U256,
}

/// Parameters for `eth_call` and `eth_sendTransaction`.
#[derive(Clone, Debug, Serialize)]
pub struct CallRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    pub to: Address,
    pub data: Bytes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<U256>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub transaction_hash: H256,
    #[serde(default)]
    pub block_number: Option<U64>,
    #[serde(default)]
    pub gas_used: Option<U256>,
    /// Absent on pre-Byzantium chains.
    #[serde(default)]
    pub status: Option<U64>,
}

impl Receipt {
    pub fn succeeded(&self) -> bool {
        self.status.map_or(true, |s| !s.is_zero())
    }
}

pub struct RpcClient {
    url: String,
    http: Client,
    next_id: AtomicU64,
}

impl RpcClient {
    pub fn new(url: &str, request_timeout: Duration) -> Result<Self, RpcError> {
        let http = Client::builder().timeout(request_timeout).build()?;
        Ok(Self {
            url: url.to_string(),
            http,
            next_id: AtomicU64::new(1),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Raw result of `method`; `None` when the node sent no result or `null`.
    async fn exchange<P: Serialize>(
        &self,
        method: &str,
        params: P,
    ) -> Result<Option<serde_json::Value>, RpcError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let req = JsonRpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        };
        debug!(method, id, url = %self.url, "rpc request");

        let resp: JsonRpcResponse = self
            .http
            .post(&self.url)
            .json(&req)
            .send()
            .await?
            .json()
            .await?;
        let result = resp.into_result();
        if let Err(RpcError::Node { code, message, .. }) = &result {
            debug!(method, id, code, error = %message, "rpc error");
        }
        result
    }

    /// Call `method` and decode a result that must be present.
    pub async fn request<P, R>(&self, method: &str, params: P) -> Result<R, RpcError>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let value = self
            .exchange(method, params)
            .await?
            .ok_or_else(|| RpcError::EmptyResponse {
                method: method.to_string(),
            })?;
        decode(method, value)
    }

    /// Like [`request`](Self::request), for methods where `null` means
    /// "not yet" or "not found".
    pub async fn request_opt<P, R>(
        &self,
        method: &str,
        params: P,
    ) -> Result<Option<R>, RpcError>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        self.exchange(method, params)
            .await?
            .map(|value| decode(method, value))
            .transpose()
    }

    pub async fn net_version(&self) -> Result<String, RpcError> {
        self.request("net_version", NO_PARAMS).await
    }

    pub async fn chain_id(&self) -> Result<U256, RpcError> {
        self.request("eth_chainId", NO_PARAMS).await
    }

    pub async fn accounts(&self) -> Result<Vec<Address>, RpcError> {
        self.request("eth_accounts", NO_PARAMS).await
    }

    pub async fn block_number(&self) -> Result<U64, RpcError> {
        self.request("eth_blockNumber", NO_PARAMS).await
    }

    /// Gas limit of `block`, or of the latest block when `None`.
    pub async fn block_gas_limit(&self, block: Option<U64>) -> Result<U256, RpcError> {
        let tag = match block {
            Some(n) => serde_json::json!(n),
            None => serde_json::json!("latest"),
        };
        let header: Option<BlockHeader> = self
            .request_opt("eth_getBlockByNumber", (tag.clone(), false))
            .await?;
        header
            .map(|h| h.gas_limit)
            .ok_or_else(|| RpcError::MissingBlock(tag.to_string()))
    }

    pub async fn get_code(&self, address: Address) -> Result<Bytes, RpcError> {
        self.request("eth_getCode", (address, "latest")).await
    }

    pub async fn call(&self, tx: &CallRequest) -> Result<Bytes, RpcError> {
        self.request("eth_call", (tx, "latest")).await
    }

    pub async fn send_transaction(&self, tx: &CallRequest) -> Result<H256, RpcError> {
        self.request("eth_sendTransaction", [tx]).await
    }

    pub async fn transaction_receipt(&self, hash: H256) -> Result<Option<Receipt>, RpcError> {
        self.request_opt("eth_getTransactionReceipt", [hash]).await
    }

    /// Poll until the receipt shows up or `timeout` elapses.
    pub async fn wait_for_receipt(
        &self,
        hash: H256,
        poll_interval: Duration,
        timeout: Duration,
    ) -> Result<Receipt, RpcError> {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            if let Some(receipt) = self.transaction_receipt(hash).await? {
                return Ok(receipt);
            }
            if tokio::time::Instant::now() >= deadline {
                return Err(RpcError::ReceiptTimeout {
                    hash,
                    waited: timeout,
                });
            }
            tokio::time::sleep(poll_interval).await;
        }
    }
}
