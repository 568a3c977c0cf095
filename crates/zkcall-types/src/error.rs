// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

#[derive(Debug, thiserror::Error)]
pub enum TypesError {
    #[error("empty coordinate")]
    EmptyCoord,

    #[error("invalid hex coordinate: {0}")]
    InvalidHex(String),

    #[error("value does not fit in 256 bits: {0}")]
    Overflow(String),

    #[error("invalid public input value: {0}")]
    InvalidInput(String),

    #[error("unknown proof field `{0}` (expected one of A, A_p, B, B_p, C, C_p, H, K)")]
    UnknownField(String),

    #[error("unknown fixture `{0}` (expected `verifier` or `test-contract`)")]
    UnknownFixture(String),

    #[error("proof json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}
