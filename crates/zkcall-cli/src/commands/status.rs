use anyhow::Result;
use serde_json::json;
use zkcall_sdk::client::ZkClient;
use zkcall_sdk::config::Settings;
use zkcall_sdk::error::ZkResult;
use zkcall_sdk::registry::ContractHandle;

use crate::output::{self, Line, Report, Tone};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContractStatus {
    pub name: String,
    pub address: Option<String>,
    pub has_code: bool,
    pub error: Option<String>,
}

/// Everything `status` learned from the node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeStatus {
    pub rpc_url: String,
    /// `Err` holds why the node could not be reached.
    pub network_id: Result<String, String>,
    pub chain_id: Option<String>,
    pub accounts: Option<usize>,
    pub block_gas_limit: Option<String>,
    pub contracts: Vec<ContractStatus>,
}

impl NodeStatus {
    /// Node answers and every contract has code.
    pub fn ready(&self) -> bool {
        self.network_id.is_ok()
            && !self.contracts.is_empty()
            && self.contracts.iter().all(|c| c.has_code)
    }
}

async fn check(
    client: &ZkClient,
    name: &str,
    resolved: ZkResult<ContractHandle>,
) -> ContractStatus {
    match resolved {
        Ok(handle) => {
            let has_code = client
                .rpc()
                .get_code(handle.address)
                .await
                .map(|code| !code.is_empty())
                .unwrap_or(false);
            ContractStatus {
                name: handle.name,
                address: Some(format!("{:?}", handle.address)),
                has_code,
                error: None,
            }
        }
        Err(e) => ContractStatus {
            name: name.to_string(),
            address: None,
            has_code: false,
            error: Some(e.to_string()),
        },
    }
}

async fn collect(client: &ZkClient) -> NodeStatus {
    let rpc = client.rpc();
    let mut status = NodeStatus {
        rpc_url: rpc.url().to_string(),
        network_id: rpc.net_version().await.map_err(|e| e.to_string()),
        chain_id: None,
        accounts: None,
        block_gas_limit: None,
        contracts: Vec::new(),
    };
    if status.network_id.is_err() {
        return status;
    }
    status.chain_id = rpc.chain_id().await.ok().map(|c| c.to_string());
    status.accounts = rpc.accounts().await.ok().map(|a| a.len());
    status.block_gas_limit = rpc.block_gas_limit(None).await.ok().map(|l| l.to_string());

    let settings = client.settings();
    let verifier = client.resolve_verifier().await;
    status
        .contracts
        .push(check(client, &settings.verifier_contract, verifier).await);
    let test = client.resolve_test().await;
    status
        .contracts
        .push(check(client, &settings.test_contract, test).await);
    status
}

pub async fn run(settings: Settings) -> Result<bool> {
    let client = ZkClient::new(settings)?;
    let pb = output::spinner("querying node...");
    let status = collect(&client).await;
    pb.finish_and_clear();
    Ok(report(&status).emit())
}

pub fn report(status: &NodeStatus) -> Report {
    let ready = status.ready();
    let url = &status.rpc_url;
    let contracts: Vec<_> = status
        .contracts
        .iter()
        .map(|c| {
            json!({
                "name": c.name,
                "address": c.address,
                "has_code": c.has_code,
                "error": c.error,
            })
        })
        .collect();
    let json = json!({
        "rpc_url": url,
        "node_reachable": status.network_id.is_ok(),
        "network_id": status.network_id.as_ref().ok(),
        "chain_id": status.chain_id,
        "accounts": status.accounts,
        "block_gas_limit": status.block_gas_limit,
        "contracts": contracts,
        "ready": ready,
    });

    let mut lines = Vec::new();
    match &status.network_id {
        Ok(id) => {
            lines.push(Line::label("node", Tone::Good, format!("reachable ({url})")));
            lines.push(Line::label("network", Tone::Plain, id));
        }
        Err(e) => {
            lines.push(Line::label("node", Tone::Bad, format!("unreachable ({url})")));
            lines.push(Line::Detail(e.clone()));
            lines.push(Line::text(
                Tone::Plain,
                "start a node or run `zkcall config set rpc_url <url>`",
            ));
            return Report { lines, json, ok: false };
        }
    }
    if let Some(id) = &status.chain_id {
        lines.push(Line::label("chain id", Tone::Plain, id));
    }
    if let Some(n) = status.accounts {
        lines.push(Line::label("accounts", Tone::Plain, n.to_string()));
    }
    if let Some(limit) = &status.block_gas_limit {
        lines.push(Line::label("block gas limit", Tone::Plain, limit));
    }
    for c in &status.contracts {
        let (tone, state) = match (&c.address, &c.error) {
            (Some(addr), _) if c.has_code => (Tone::Good, format!("deployed at {addr}")),
            (Some(addr), _) => (Tone::Warn, format!("no code at {addr}")),
            (None, Some(err)) => (Tone::Bad, format!("unresolved ({err})")),
            (None, None) => (Tone::Bad, "unresolved".to_string()),
        };
        lines.push(Line::label(&c.name, tone, state));
    }
    Report {
        lines,
        json,
        ok: ready,
    }
}
