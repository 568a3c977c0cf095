// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Built-in proof data sets.
//!
//! `verifier` is checked with `verifyTx` against public input `[15, 1]`.
//! `test-contract` is the data set sent to the `Test` contract's `f`,
//! with public input `[113569, 1]`.

use std::fmt;
use std::str::FromStr;

use crate::bundle::ProofBundle;
use crate::error::TypesError;

const VERIFIER_JSON: &str = r#"{
    "proof": {
        "A": ["0x271d87916459e1288dfcab818e292c7d06061a5c994f036243510ee9cb9423ae",
              "0xc80501da6f9cf0945a87811f9783118070ed26e7f72cb9f4a27cb042450acb5"],
        "A_p": ["0x7ba62bcda05b603b18142469edd4adc1e933ea0ac8cd8cd3fec6a1ec94ade15",
                "0x178f51b31f7c8086f74a6d90be6845d1c7cf614c2fac1dfdae5d5ccd73e3afd9"],
        "B": [["0x2a835fe82a750bc2d7e89f6200c6eb4726555eeab03a59b0274af5d97d3a5eb4",
               "0x20ad076aafad93ba9808c62074fff7ee94d9d141c1b104c6f19ba17c39c14b98"],
              ["0x10874f3eaae67dba4221a713cdd351ce306322a677352eb3a447b715c5b9c466",
               "0x1a8421aebbb287246061e69bc82f5ac1985ca58957e437039f3861bce88aecd4"]],
        "B_p": ["0x2c8cca60a1dd32ad9027d8ba95b207b1c724b3e8b9ce6821bfe8f362d6980f97",
                "0x2c5ba421d16805dc837dcf2688e9eae9adcc4a12efddaccded35a45cf515dd38"],
        "C": ["0x2ba8f195a8f52cd55c40a6faee3aaf703e382e657b8ccc2faeaef6ac9de9fd0e",
              "0xe5cfc8ad0fac863ebc60377e6d937253a19b34394e7b82ed88b7b7a26167f2b"],
        "C_p": ["0x1258394c2927d0a2cd3df024dd566d7b38ce4de82127b62e14ff6c41623af079",
                "0xdc34c889d6af59a4679d3a5b18176efc53a9e831fec8f1ced29a3c461f57927"],
        "H": ["0x103159ec7fc38b06d4e36569a5b645263b3a2b530277fb3d69f593cc5739fb5",
              "0x2abfd3ce7e64d470801591cd731d65c13105bf5eefdae5a39004f5ab969745cd"],
        "K": ["0x25bb69853ba9e06bb625a609ff0a34bab333f7fa22bdd8c2a912174434cd041a",
              "0x2d0537e05858d6f34f1fefd342e42610e5049dad2145445ac5a5f0c8aa945f27"]
    },
    "input": ["15", "1"]
}"#;

const TEST_CONTRACT_JSON: &str = r#"{
    "proof": {
        "A": ["0x11c26d16970ebd76162d92e844036592d8c352c04647172a0f6784ea2b64454b",
              "0xd3ed30e17e093967ca96b573a35dc78a59bd754ffae171c5095a2ddac60887e"],
        "A_p": ["0x118d9decb90caa8a167c5ef7ce7a97c8660578e6dc0789e863af73e0c204c96d",
                "0x2626b563dd7b01c2fdf46f72597338670d2ef9876a747598a601952c6db187a0"],
        "B": [["0x16974ad2255f664e1981f7970db24521fedbe6153ce33b04cfebb09db808e0bc",
               "0xbc295db6638af810c05c9a58847dce0beeb21106880fd7e18c85cfd6aa1fb53"],
              ["0x2e2f069d41776327d70d958dc285d8237285cb03b479d6be9aab4e57c430ddf3",
               "0x25193ddc083c302e46c477aa7960541b89277e6e1ec4c7f1790562a3f3ab6d84"]],
        "B_p": ["0x29c4a0f9d407731833a489865252369c3743081a1756407847eabeea1a658264",
                "0xb0889f2d0aa5315290ef450eee2d11c4f270f2e3e7702654d161454c4f91629"],
        "C": ["0x1895a9a5b963863eb39c6c6623a41a3734fab9a8092cf0ce8cab054f17201c7b",
              "0x5c510168beccb2e51b21ad859c862d7ae4dfe1eaaa11e16c063aa76b95ea2f5"],
        "C_p": ["0x41a7d7a8c76bb76959bc58f9b2744d751870f95f52a608b7b12188e5beab553",
                "0x1d30b46f9b44690232b836e803c80aa691951c553e744b5775b6db8dbe778f54"],
        "H": ["0xc69f69fd027b905c35bfd2dd7b845472c9452865e6abe0b3a2e8251e4a79d90",
              "0x27e653a8f7b9c34017d3a61cff11e45d3277f63d30cf16cb57870a4d81ace339"],
        "K": ["0xb7a42a1411f681910dd80cf1336956b691d01fd48e8d31fe7eae842ea29cb9a",
              "0x16c7c03f53fcd32996b9174a8a086facc5bcd38e24ef3accb280f1b20ca884b7"]
    },
    "input": [113569, 1]
}"#;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fixture {
    Verifier,
    TestContract,
}

impl Fixture {
    pub const ALL: [Fixture; 2] = [Fixture::Verifier, Fixture::TestContract];

    pub fn name(&self) -> &'static str {
        match self {
            Fixture::Verifier => "verifier",
            Fixture::TestContract => "test-contract",
        }
    }

    pub fn bundle(&self) -> ProofBundle {
        match self {
            Fixture::Verifier => verifier_proof(),
            Fixture::TestContract => test_contract_proof(),
        }
    }
}

impl FromStr for Fixture {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "verifier" => Ok(Fixture::Verifier),
            "test-contract" | "test_contract" | "test" => Ok(Fixture::TestContract),
            _ => Err(TypesError::UnknownFixture(s.to_string())),
        }
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn verifier_proof() -> ProofBundle {
    ProofBundle::from_json(VERIFIER_JSON).expect("built-in verifier fixture is valid")
}

pub fn test_contract_proof() -> ProofBundle {
    ProofBundle::from_json(TEST_CONTRACT_JSON).expect("built-in test-contract fixture is valid")
}
