// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Public input: the statement a proof attests to.
//!
//! Elements are accepted as decimal strings (`"15"`), `0x` hex strings
//! or plain JSON numbers, and serialized as decimal strings.

use std::ops::Deref;
use std::str::FromStr;

use ethers_core::types::U256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::coord::strip_0x;
use crate::error::TypesError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PublicInput(pub Vec<U256>);

pub fn parse_value(s: &str) -> Result<U256, TypesError> {
    let s = s.trim();
    if s.starts_with("0x") || s.starts_with("0X") {
        let digits = strip_0x(s);
        if digits.is_empty() || digits.trim_start_matches('0').len() > 64 {
            return Err(TypesError::InvalidInput(s.to_string()));
        }
        return U256::from_str_radix(digits, 16)
            .map_err(|_| TypesError::InvalidInput(s.to_string()));
    }
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        return Err(TypesError::InvalidInput(s.to_string()));
    }
    U256::from_dec_str(s).map_err(|_| TypesError::InvalidInput(s.to_string()))
}

impl PublicInput {
    pub fn from_u64s(values: &[u64]) -> Self {
        Self(values.iter().copied().map(U256::from).collect())
    }

    pub fn decimal_strings(&self) -> Vec<String> {
        self.0.iter().map(|v| v.to_string()).collect()
    }
}

impl Deref for PublicInput {
    type Target = [U256];

    fn deref(&self) -> &[U256] {
        &self.0
    }
}

/// Comma separated list, e.g. `15,1`.
impl FromStr for PublicInput {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        s.split(',')
            .map(parse_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Num(u64),
    Str(String),
}

impl Serialize for PublicInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.decimal_strings().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PublicInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Vec::<RawValue>::deserialize(deserializer)?;
        raw.into_iter()
            .map(|v| match v {
                RawValue::Num(n) => Ok(U256::from(n)),
                RawValue::Str(s) => parse_value(&s).map_err(serde::de::Error::custom),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
