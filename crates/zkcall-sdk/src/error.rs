// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Typed errors for [`ZkClient`](crate::client::ZkClient) operations.
//!
//! A contract rejecting a proof is not an error: it comes back as a
//! `Rejected` outcome. Errors here mean the call could not be made.

use crate::rpc::RpcError;

#[derive(Debug, thiserror::Error)]
pub enum ZkError {
    #[error("rpc: {0}")]
    Rpc(#[from] RpcError),

    #[error("registry: {0}")]
    Registry(String),

    #[error("abi: {0}")]
    Abi(String),

    #[error("config: {0}")]
    Config(String),

    #[error("proof: {0}")]
    Proof(#[from] zkcall_types::TypesError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type ZkResult<T> = Result<T, ZkError>;
