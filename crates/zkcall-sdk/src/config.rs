// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Settings persistence.
//!
//! Stored as JSON at `~/.zkcall/config.json`. A missing file means
//! defaults. `ZKCALL_RPC_URL` and `ZKCALL_ARTIFACTS_DIR` override the
//! file when set.
//!
//! # Example
//!
//! ```rust,no_run
//! use zkcall_sdk::config::{load_settings, save_settings};
//!
//! # fn example() -> zkcall_sdk::error::ZkResult<()> {
//! let mut settings = load_settings()?;
//! settings.set("rpc_url", "http://127.0.0.1:7545")?;
//! save_settings(&settings)?;
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use ethers_core::types::Address;
use serde::{Deserialize, Serialize};
use zkcall_types::strip_0x;

use crate::error::{ZkError, ZkResult};

pub const ENV_RPC_URL: &str = "ZKCALL_RPC_URL";
pub const ENV_ARTIFACTS_DIR: &str = "ZKCALL_ARTIFACTS_DIR";

pub const ALLOWED_KEYS: &[&str] = &[
    "rpc_url",
    "artifacts_dir",
    "verifier_contract",
    "test_contract",
    "verifier_address",
    "test_address",
    "network_id",
    "request_timeout_secs",
    "receipt_timeout_secs",
    "poll_interval_ms",
];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub rpc_url: String,
    pub artifacts_dir: PathBuf,
    pub verifier_contract: String,
    pub test_contract: String,
    pub verifier_address: Option<Address>,
    pub test_address: Option<Address>,
    /// Skip `net_version` and use this id for artifact lookup.
    pub network_id: Option<String>,
    pub request_timeout_secs: u64,
    pub receipt_timeout_secs: u64,
    pub poll_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rpc_url: "http://127.0.0.1:8545".into(),
            artifacts_dir: PathBuf::from("build/contracts"),
            verifier_contract: "Verifier".into(),
            test_contract: "Test".into(),
            verifier_address: None,
            test_address: None,
            network_id: None,
            request_timeout_secs: 30,
            receipt_timeout_secs: 60,
            poll_interval_ms: 500,
        }
    }
}

pub fn parse_address(s: &str) -> ZkResult<Address> {
    let raw = s.trim();
    let digits = strip_0x(raw);
    if digits.len() != 40 {
        return Err(ZkError::Config(format!("invalid address `{s}`: expected 20 bytes")));
    }
    digits
        .parse::<Address>()
        .map_err(|e| ZkError::Config(format!("invalid address `{s}`: {e}")))
}

fn parse_secs(key: &str, value: &str) -> ZkResult<u64> {
    match value.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err(ZkError::Config(format!(
            "{key} must be a positive integer, got `{value}`"
        ))),
        Ok(n) => Ok(n),
    }
}

fn optional(value: &str) -> Option<&str> {
    match value.trim() {
        "" | "none" | "unset" => None,
        v => Some(v),
    }
}

fn show<T: ToString>(v: &Option<T>) -> String {
    v.as_ref().map_or_else(|| "unset".to_string(), T::to_string)
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn receipt_timeout(&self) -> Duration {
        Duration::from_secs(self.receipt_timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Set one key from its string form. `none` clears optional keys.
    pub fn set(&mut self, key: &str, value: &str) -> ZkResult<()> {
        match key {
            "rpc_url" => self.rpc_url = value.trim().to_string(),
            "artifacts_dir" => self.artifacts_dir = PathBuf::from(value.trim()),
            "verifier_contract" => self.verifier_contract = value.trim().to_string(),
            "test_contract" => self.test_contract = value.trim().to_string(),
            "verifier_address" => {
                self.verifier_address = optional(value).map(parse_address).transpose()?
            }
            "test_address" => self.test_address = optional(value).map(parse_address).transpose()?,
            "network_id" => self.network_id = optional(value).map(str::to_string),
            "request_timeout_secs" => self.request_timeout_secs = parse_secs(key, value)?,
            "receipt_timeout_secs" => self.receipt_timeout_secs = parse_secs(key, value)?,
            "poll_interval_ms" => self.poll_interval_ms = parse_secs(key, value)?,
            _ => {
                return Err(ZkError::Config(format!(
                    "unknown config key: {key} (allowed keys: {})",
                    ALLOWED_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }

    /// Every key with its display value, in [`ALLOWED_KEYS`] order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("rpc_url", self.rpc_url.clone()),
            ("artifacts_dir", self.artifacts_dir.display().to_string()),
            ("verifier_contract", self.verifier_contract.clone()),
            ("test_contract", self.test_contract.clone()),
            ("verifier_address", show(&self.verifier_address.map(|a| format!("{a:?}")))),
            ("test_address", show(&self.test_address.map(|a| format!("{a:?}")))),
            ("network_id", show(&self.network_id)),
            ("request_timeout_secs", self.request_timeout_secs.to_string()),
            ("receipt_timeout_secs", self.receipt_timeout_secs.to_string()),
            ("poll_interval_ms", self.poll_interval_ms.to_string()),
        ]
    }

    /// Apply environment overrides through `lookup` (normally `std::env::var`).
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_RPC_URL).filter(|v| !v.is_empty()) {
            self.rpc_url = url;
        }
        if let Some(dir) = lookup(ENV_ARTIFACTS_DIR).filter(|v| !v.is_empty()) {
            self.artifacts_dir = PathBuf::from(dir);
        }
    }
}

pub fn config_path() -> ZkResult<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| ZkError::Config("cannot determine home directory".into()))?;
    Ok(home.join(".zkcall").join("config.json"))
}

pub fn load_settings_from(path: &Path) -> ZkResult<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let data = fs::read_to_string(path)
        .map_err(|e| ZkError::Config(format!("cannot read {}: {e}", path.display())))?;
    serde_json::from_str(&data)
        .map_err(|e| ZkError::Config(format!("invalid config {}: {e}", path.display())))
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> ZkResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| ZkError::Config(format!("cannot create {}: {e}", parent.display())))?;
    }
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| ZkError::Config(e.to_string()))?;
    fs::write(path, json)
        .map_err(|e| ZkError::Config(format!("cannot write {}: {e}", path.display())))
}

/// Settings from the default path, with environment overrides applied.
pub fn load_settings() -> ZkResult<Settings> {
    let mut settings = load_settings_from(&config_path()?)?;
    settings.apply_env(|k| std::env::var(k).ok());
    Ok(settings)
}

pub fn save_settings(settings: &Settings) -> ZkResult<()> {
    save_settings_to(&config_path()?, settings)
}
