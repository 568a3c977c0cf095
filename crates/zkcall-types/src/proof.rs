// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! PGHR13 proof layout: eight points, `B` on G2 and the rest on G1.

use std::fmt;
use std::str::FromStr;

use ethers_core::types::U256;
use serde::{Deserialize, Serialize};

use crate::coord::Coord;
use crate::error::TypesError;

/// Number of 256-bit words in a flattened proof.
pub const PROOF_WORDS: usize = 18;

pub type G1Point = [Coord; 2];
pub type G2Point = [[Coord; 2]; 2];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    #[serde(rename = "A")]
    pub a: G1Point,
    #[serde(rename = "A_p")]
    pub a_p: G1Point,
    #[serde(rename = "B")]
    pub b: G2Point,
    #[serde(rename = "B_p")]
    pub b_p: G1Point,
    #[serde(rename = "C")]
    pub c: G1Point,
    #[serde(rename = "C_p")]
    pub c_p: G1Point,
    #[serde(rename = "H")]
    pub h: G1Point,
    #[serde(rename = "K")]
    pub k: G1Point,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProofField {
    A,
    APrime,
    B,
    BPrime,
    C,
    CPrime,
    H,
    K,
}

impl ProofField {
    pub const ALL: [ProofField; 8] = [
        ProofField::A,
        ProofField::APrime,
        ProofField::B,
        ProofField::BPrime,
        ProofField::C,
        ProofField::CPrime,
        ProofField::H,
        ProofField::K,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ProofField::A => "A",
            ProofField::APrime => "A_p",
            ProofField::B => "B",
            ProofField::BPrime => "B_p",
            ProofField::C => "C",
            ProofField::CPrime => "C_p",
            ProofField::H => "H",
            ProofField::K => "K",
        }
    }
}

impl FromStr for ProofField {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // accept A', A_p and lowercase spellings
        let norm = s.trim().replace('\'', "_p").to_ascii_lowercase();
        ProofField::ALL
            .iter()
            .copied()
            .find(|f| f.name().to_ascii_lowercase() == norm)
            .ok_or_else(|| TypesError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for ProofField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Proof {
    pub fn zero() -> Self {
        let g1 = [Coord::ZERO; 2];
        Self {
            a: g1,
            a_p: g1,
            b: [g1; 2],
            b_p: g1,
            c: g1,
            c_p: g1,
            h: g1,
            k: g1,
        }
    }

    /// Coordinates in submission order: A, A_p, B[0], B[1], B_p, C, C_p, H, K.
    pub fn coords(&self) -> impl Iterator<Item = &Coord> {
        self.a
            .iter()
            .chain(self.a_p.iter())
            .chain(self.b.iter().flatten())
            .chain(self.b_p.iter())
            .chain(self.c.iter())
            .chain(self.c_p.iter())
            .chain(self.h.iter())
            .chain(self.k.iter())
    }

    pub fn flatten(&self) -> [U256; PROOF_WORDS] {
        let mut out = [U256::zero(); PROOF_WORDS];
        for (slot, c) in out.iter_mut().zip(self.coords()) {
            *slot = c.0;
        }
        out
    }

    pub fn is_zero(&self) -> bool {
        self.coords().all(Coord::is_zero)
    }

    /// Copy of the proof with the first coordinate of `field` bumped by one.
    pub fn tamper(&self, field: ProofField) -> Self {
        let mut out = self.clone();
        let target = match field {
            ProofField::A => &mut out.a[0],
            ProofField::APrime => &mut out.a_p[0],
            ProofField::B => &mut out.b[0][0],
            ProofField::BPrime => &mut out.b_p[0],
            ProofField::C => &mut out.c[0],
            ProofField::CPrime => &mut out.c_p[0],
            ProofField::H => &mut out.h[0],
            ProofField::K => &mut out.k[0],
        };
        target.0 = target.0.overflowing_add(U256::one()).0;
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered() -> Proof {
        let mut n = 0u64;
        let mut next = || {
            n += 1;
            Coord::from(n)
        };
        Proof {
            a: [next(), next()],
            a_p: [next(), next()],
            b: [[next(), next()], [next(), next()]],
            b_p: [next(), next()],
            c: [next(), next()],
            c_p: [next(), next()],
            h: [next(), next()],
            k: [next(), next()],
        }
    }

    #[test]
    fn flatten_preserves_submission_order() {
        let flat = numbered().flatten();
        let expected: Vec<U256> = (1..=18u64).map(U256::from).collect();
        assert_eq!(flat.to_vec(), expected);
    }

    #[test]
    fn zero_proof_is_zero() {
        assert!(Proof::zero().is_zero());
        assert!(!numbered().is_zero());
        assert!(Proof::zero().flatten().iter().all(|w| w.is_zero()));
    }

    #[test]
    fn tamper_changes_only_target_field() {
        let p = numbered();
        let t = p.tamper(ProofField::CPrime);
        assert_ne!(p, t);
        assert_eq!(t.c_p[0], Coord::from(14u64));
        assert_eq!(t.c_p[1], p.c_p[1]);
        assert_eq!(t.a, p.a);
        assert_eq!(t.b, p.b);
    }

    #[test]
    fn tamper_wraps_at_max() {
        let mut p = Proof::zero();
        p.k[0] = Coord(U256::MAX);
        assert!(p.tamper(ProofField::K).k[0].is_zero());
    }

    #[test]
    fn field_names_parse() {
        assert_eq!("A_p".parse::<ProofField>().unwrap(), ProofField::APrime);
        assert_eq!("a'".parse::<ProofField>().unwrap(), ProofField::APrime);
        assert_eq!("b".parse::<ProofField>().unwrap(), ProofField::B);
        assert!("Z".parse::<ProofField>().is_err());
        for f in ProofField::ALL {
            assert_eq!(f.name().parse::<ProofField>().unwrap(), f);
        }
    }

    #[test]
    fn json_uses_zokrates_field_names() {
        let json = serde_json::to_value(numbered()).unwrap();
        for key in ["A", "A_p", "B", "B_p", "C", "C_p", "H", "K"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["B"][1][0], "0x7");
    }
}
