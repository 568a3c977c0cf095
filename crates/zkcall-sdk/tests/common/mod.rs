// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! In-process JSON-RPC node emulating a deployed verifier and test
//! contract. The verifier accepts exactly one proof/input pair, reverts
//! on an all-zero proof and returns `false` otherwise.

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use ethers_core::types::{Address, H256, U256};
use serde_json::{json, Value};
use zkcall_sdk::config::Settings;
use zkcall_sdk::{fixtures, Proof, ProofBundle, PROOF_WORDS};

pub const NETWORK_ID: &str = "5777";
pub const GAS_LIMIT: u64 = 6_721_975;
pub const GAS_USED: u64 = 1_212_347;
pub const GAS_USED_FAILED: u64 = 48_113;

pub struct MockNode {
    pub accounts: Vec<Address>,
    pub verifier: Address,
    pub test: Address,
    pub valid: ProofBundle,
    pub valid_submit: Proof,
    /// When false, receipts never appear.
    pub mine: bool,
    /// When true, every response omits both `result` and `error`.
    pub silent: bool,
    txs: Mutex<HashMap<H256, bool>>,
    pub methods: Mutex<Vec<String>>,
}

impl MockNode {
    pub fn new() -> Self {
        Self {
            accounts: vec![Address::repeat_byte(0xa0), Address::repeat_byte(0xa1)],
            verifier: Address::repeat_byte(0x11),
            test: Address::repeat_byte(0x22),
            valid: fixtures::verifier_proof(),
            valid_submit: fixtures::test_contract_proof().proof,
            mine: true,
            silent: false,
            txs: Mutex::new(HashMap::new()),
            methods: Mutex::new(Vec::new()),
        }
    }

    pub fn never_mining() -> Self {
        Self {
            mine: false,
            ..Self::new()
        }
    }

    pub fn silent() -> Self {
        Self {
            silent: true,
            ..Self::new()
        }
    }

    pub fn seen(&self, method: &str) -> usize {
        self.methods
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.as_str() == method)
            .count()
    }
}

fn call_words(tx: &Value) -> Vec<U256> {
    let data = tx["data"].as_str().unwrap_or("0x");
    let bytes = hex::decode(data.trim_start_matches("0x")).unwrap();
    bytes[4..].chunks(32).map(U256::from_big_endian).collect()
}

fn address_of(tx: &Value, key: &str) -> Option<Address> {
    serde_json::from_value(tx[key].clone()).ok()
}

fn bool_word(b: bool) -> String {
    format!("0x{}{}", "0".repeat(63), if b { "1" } else { "0" })
}

fn revert() -> Result<Value, (i64, String)> {
    Err((
        -32000,
        "VM Exception while processing transaction: revert".to_string(),
    ))
}

fn dispatch(node: &MockNode, method: &str, params: &Value) -> Result<Value, (i64, String)> {
    match method {
        "net_version" => Ok(json!(NETWORK_ID)),
        "eth_chainId" => Ok(json!("0x539")),
        "eth_accounts" => Ok(json!(node.accounts)),
        "eth_blockNumber" => Ok(json!("0x2")),
        "eth_getBlockByNumber" => Ok(json!({
            "number": "0x2",
            "gasLimit": U256::from(GAS_LIMIT),
        })),
        "eth_getCode" => {
            let addr: Option<Address> = serde_json::from_value(params[0].clone()).ok();
            if addr == Some(node.verifier) || addr == Some(node.test) {
                Ok(json!("0x6080604052"))
            } else {
                Ok(json!("0x"))
            }
        }
        "eth_call" => {
            let tx = &params[0];
            if address_of(tx, "to") != Some(node.verifier) {
                return Ok(json!("0x"));
            }
            let words = call_words(tx);
            if words.len() < PROOF_WORDS || words[..PROOF_WORDS].iter().all(U256::is_zero) {
                return revert();
            }
            let mut expected = node.valid.proof.flatten().to_vec();
            expected.extend(node.valid.input.iter().copied());
            Ok(json!(bool_word(words == expected)))
        }
        "eth_sendTransaction" => {
            let tx = &params[0];
            let from = address_of(tx, "from");
            if !from.is_some_and(|f| node.accounts.contains(&f)) {
                return Err((-32000, "sender account not recognized".to_string()));
            }
            if address_of(tx, "to") != Some(node.test) {
                return revert();
            }
            let words = call_words(tx);
            let flat = node.valid_submit.flatten();
            let ok = words.len() == 4 * PROOF_WORDS
                && words.chunks(PROOF_WORDS).all(|c| c == flat.as_slice());
            let mut txs = node.txs.lock().unwrap();
            let hash = H256::from_low_u64_be(txs.len() as u64 + 1);
            txs.insert(hash, ok);
            Ok(json!(hash))
        }
        "eth_getTransactionReceipt" => {
            if !node.mine {
                return Ok(Value::Null);
            }
            let hash: H256 = serde_json::from_value(params[0].clone()).unwrap();
            let txs = node.txs.lock().unwrap();
            let Some(&ok) = txs.get(&hash) else {
                return Ok(Value::Null);
            };
            let (gas, status) = if ok {
                (GAS_USED, "0x1")
            } else {
                (GAS_USED_FAILED, "0x0")
            };
            Ok(json!({
                "transactionHash": hash,
                "blockNumber": "0x2",
                "gasUsed": U256::from(gas),
                "status": status,
            }))
        }
        other => Err((-32601, format!("method {other} not found"))),
    }
}

async fn handle(State(node): State<Arc<MockNode>>, Json(req): Json<Value>) -> Json<Value> {
    let method = req["method"].as_str().unwrap_or_default().to_string();
    node.methods.lock().unwrap().push(method.clone());
    let id = req["id"].clone();
    if node.silent {
        return Json(json!({ "jsonrpc": "2.0", "id": id }));
    }
    let body = match dispatch(&node, &method, &req["params"]) {
        Ok(result) => json!({ "jsonrpc": "2.0", "id": id, "result": result }),
        Err((code, message)) => json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": { "code": code, "message": message },
        }),
    };
    Json(body)
}

/// Serve `node` on an ephemeral port; returns its URL.
pub async fn spawn(node: MockNode) -> (String, Arc<MockNode>) {
    let node = Arc::new(node);
    let app = Router::new()
        .route("/", post(handle))
        .with_state(node.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), node)
}

pub fn write_artifacts(dir: &Path, node: &MockNode, with_abi: bool) {
    let verifier_abi = json!([{
        "type": "function",
        "name": "verifyTx",
        "inputs": [
            {"name": "a", "type": "uint256[2]"},
            {"name": "a_p", "type": "uint256[2]"},
            {"name": "b", "type": "uint256[2][2]"},
            {"name": "b_p", "type": "uint256[2]"},
            {"name": "c", "type": "uint256[2]"},
            {"name": "c_p", "type": "uint256[2]"},
            {"name": "h", "type": "uint256[2]"},
            {"name": "k", "type": "uint256[2]"},
            {"name": "input", "type": "uint256[2]"}
        ],
        "outputs": [{"name": "r", "type": "bool"}],
        "stateMutability": "nonpayable"
    }]);
    let test_abi = json!([{
        "type": "function",
        "name": "f",
        "inputs": [
            {"name": "a", "type": "uint256[18]"},
            {"name": "b", "type": "uint256[18]"},
            {"name": "c", "type": "uint256[18]"},
            {"name": "d", "type": "uint256[18]"}
        ],
        "outputs": [],
        "stateMutability": "nonpayable"
    }]);

    for (name, address, abi) in [
        ("Verifier", node.verifier, verifier_abi),
        ("Test", node.test, test_abi),
    ] {
        let mut artifact = json!({
            "contractName": name,
            "networks": { NETWORK_ID: { "address": address } },
        });
        if with_abi {
            artifact["abi"] = abi;
        }
        std::fs::write(
            dir.join(format!("{name}.json")),
            serde_json::to_string_pretty(&artifact).unwrap(),
        )
        .unwrap();
    }
}

pub fn settings(url: &str, artifacts: &Path) -> Settings {
    Settings {
        rpc_url: url.to_string(),
        artifacts_dir: artifacts.to_path_buf(),
        request_timeout_secs: 5,
        receipt_timeout_secs: 1,
        poll_interval_ms: 20,
        ..Settings::default()
    }
}
