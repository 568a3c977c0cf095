// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! A single curve coordinate, carried as a 256-bit word.
//!
//! Coordinates arrive as hex strings, `0x`-prefixed or not, and are
//! often shorter than 64 digits because leading zeros are dropped
//! (`"0xd3ed30e1..."` is 63 digits). They are written back as
//! `0x`-prefixed lowercase hex without padding.

use std::fmt;
use std::str::FromStr;

use ethers_core::types::U256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypesError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coord(pub U256);

impl Coord {
    pub const ZERO: Coord = Coord(U256([0; 4]));

    pub fn from_hex(s: &str) -> Result<Self, TypesError> {
        let digits = strip_0x(s.trim());
        if digits.is_empty() {
            return Err(TypesError::EmptyCoord);
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(TypesError::InvalidHex(s.to_string()));
        }
        if digits.trim_start_matches('0').len() > 64 {
            return Err(TypesError::Overflow(s.to_string()));
        }
        U256::from_str_radix(digits, 16)
            .map(Coord)
            .map_err(|_| TypesError::InvalidHex(s.to_string()))
    }

    pub fn to_hex(&self) -> String {
        format!("0x{:x}", self.0)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

/// `0x` or `0X` prefix removed, if present.
pub fn strip_0x(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

impl From<U256> for Coord {
    fn from(v: U256) -> Self {
        Coord(v)
    }
}

impl From<u64> for Coord {
    fn from(v: u64) -> Self {
        Coord(U256::from(v))
    }
}

impl FromStr for Coord {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coord::from_hex(s)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

impl Serialize for Coord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Coord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Coord::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
