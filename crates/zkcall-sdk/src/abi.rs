// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Call data for the two contract methods.
//!
//! - `verifyTx(A, A_p, B, B_p, C, C_p, H, K, input)` on the verifier,
//!   with every proof field passed positionally.
//! - `f(proof, proof, proof, proof)` on the test contract, with the
//!   proof flattened to 18 words and passed four times.
//!
//! When the artifact carries an ABI its definition is used, otherwise
//! the built-in signature. Either way the data is type-checked against
//! the function before anything is sent.

use ethers_core::abi::{self, Abi, Function, ParamType, Token};
use ethers_core::types::{Bytes, U256};
use zkcall_types::{Coord, G1Point, G2Point, Proof, ProofBundle, PROOF_WORDS};

use crate::error::{ZkError, ZkResult};

pub const VERIFY_METHOD: &str = "verifyTx";
pub const SUBMIT_METHOD: &str = "f";

/// `f` receives the flattened proof this many times.
pub const SUBMIT_COPIES: usize = 4;

pub fn verify_signature(inputs: usize) -> String {
    format!(
        "function {VERIFY_METHOD}(uint256[2],uint256[2],uint256[2][2],uint256[2],uint256[2],\
         uint256[2],uint256[2],uint256[2],uint256[{inputs}]) returns (bool)"
    )
}

pub fn submit_signature() -> String {
    let arg = format!("uint256[{PROOF_WORDS}]");
    let args = vec![arg; SUBMIT_COPIES].join(",");
    format!("function {SUBMIT_METHOD}({args})")
}

fn parse_one(signature: &str, name: &str) -> ZkResult<Function> {
    let parsed = abi::parse_abi(&[signature])
        .map_err(|e| ZkError::Abi(format!("cannot parse `{signature}`: {e}")))?;
    parsed
        .function(name)
        .cloned()
        .map_err(|e| ZkError::Abi(e.to_string()))
}

pub fn builtin_verify(inputs: usize) -> ZkResult<Function> {
    parse_one(&verify_signature(inputs), VERIFY_METHOD)
}

pub fn builtin_submit() -> ZkResult<Function> {
    parse_one(&submit_signature(), SUBMIT_METHOD)
}

/// First overload of `name` in `abi`, or the fallback when there is no ABI.
pub fn select<F>(abi: Option<&Abi>, name: &str, fallback: F) -> ZkResult<Function>
where
    F: FnOnce() -> ZkResult<Function>,
{
    match abi {
        Some(abi) => abi
            .function(name)
            .cloned()
            .map_err(|_| ZkError::Abi(format!("contract ABI has no function `{name}`"))),
        None => fallback(),
    }
}

fn uint(c: &Coord) -> Token {
    Token::Uint(c.0)
}

fn g1(p: &G1Point) -> Token {
    Token::FixedArray(p.iter().map(uint).collect())
}

fn g2(p: &G2Point) -> Token {
    Token::FixedArray(p.iter().map(g1).collect())
}

fn words(kind: &ParamType, values: &[U256], what: &str) -> ZkResult<Token> {
    let tokens: Vec<Token> = values.iter().copied().map(Token::Uint).collect();
    match kind {
        ParamType::Array(_) => Ok(Token::Array(tokens)),
        ParamType::FixedArray(_, n) if *n == values.len() => Ok(Token::FixedArray(tokens)),
        ParamType::FixedArray(_, n) => Err(ZkError::Abi(format!(
            "{what} expects {n} values, got {}",
            values.len()
        ))),
        other => Err(ZkError::Abi(format!("{what} has unsupported type {other}"))),
    }
}

fn check_arity(function: &Function, got: usize) -> ZkResult<()> {
    if function.inputs.len() != got {
        return Err(ZkError::Abi(format!(
            "{} takes {} arguments, got {got}",
            function.name,
            function.inputs.len()
        )));
    }
    Ok(())
}

fn encode(function: &Function, tokens: &[Token]) -> ZkResult<Bytes> {
    function
        .encode_input(tokens)
        .map(Bytes::from)
        .map_err(|e| ZkError::Abi(format!("{}: {e}", function.signature())))
}

pub fn verify_tokens(function: &Function, bundle: &ProofBundle) -> ZkResult<Vec<Token>> {
    check_arity(function, 9)?;
    let p = &bundle.proof;
    let input = words(&function.inputs[8].kind, &bundle.input, "public input")?;
    Ok(vec![
        g1(&p.a),
        g1(&p.a_p),
        g2(&p.b),
        g1(&p.b_p),
        g1(&p.c),
        g1(&p.c_p),
        g1(&p.h),
        g1(&p.k),
        input,
    ])
}

pub fn encode_verify_call(function: &Function, bundle: &ProofBundle) -> ZkResult<Bytes> {
    let tokens = verify_tokens(function, bundle)?;
    encode(function, &tokens)
}

pub fn encode_submit_call(function: &Function, proof: &Proof) -> ZkResult<Bytes> {
    check_arity(function, SUBMIT_COPIES)?;
    let flat = proof.flatten();
    let tokens = function
        .inputs
        .iter()
        .map(|param| words(&param.kind, &flat, "proof array"))
        .collect::<ZkResult<Vec<_>>>()?;
    encode(function, &tokens)
}

pub fn decode_bool(function: &Function, output: &[u8]) -> ZkResult<bool> {
    let tokens = if function.outputs.is_empty() {
        abi::decode(&[ParamType::Bool], output)
    } else {
        function.decode_output(output)
    }
    .map_err(|e| ZkError::Abi(format!("cannot decode {} result: {e}", function.name)))?;

    match tokens.first() {
        Some(Token::Bool(b)) => Ok(*b),
        other => Err(ZkError::Abi(format!(
            "{} returned {other:?}, expected bool",
            function.name
        ))),
    }
}
