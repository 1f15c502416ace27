//! NIST ACVP (Automated Cryptographic Validation Protocol) tests for SLH-DSA.
//!
//! These tests use official NIST test vectors from:
//! https://github.com/usnistgov/ACVP-Server/tree/master/gen-val/json-files
//!
//! `tests/acvp/` holds a subset of the `SLH-DSA-{keyGen,sigGen,sigVer}-FIPS205`
//! `internalProjection.json` files, which carry prompts and expected results
//! side by side. The subset covers SHA2 and SHAKE sets, both "s" and "f".

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use stela_slh_dsa::{
    encode_message, keygen_internal, sign_internal, verify_internal, ParamId, PrivateKey, PublicKey,
};

/// ACVP file structure
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AcvpFile<T> {
    test_groups: Vec<TestGroup<T>>,
}

/// Test group; interface fields are absent from the internal-only revision.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TestGroup<T> {
    tg_id: u32,
    parameter_set: String,
    #[serde(default)]
    deterministic: bool,
    #[serde(default)]
    signature_interface: Option<String>,
    #[serde(default)]
    pre_hash: Option<String>,
    tests: Vec<T>,
}

/// KeyGen test case
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct KeyGenTest {
    tc_id: u32,
    sk_seed: String,
    sk_prf: String,
    pk_seed: String,
    pk: String,
    sk: String,
}

/// SigGen test case
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SigGenTest {
    tc_id: u32,
    sk: String,
    message: String,
    #[serde(default)]
    context: Option<String>,
    #[serde(default)]
    additional_randomness: Option<String>,
    signature: String,
}

/// SigVer test case
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SigVerTest {
    tc_id: u32,
    pk: String,
    message: String,
    #[serde(default)]
    context: Option<String>,
    signature: String,
    test_passed: bool,
    #[serde(default)]
    reason: Option<String>,
}

fn hex_decode(s: &str) -> Vec<u8> {
    hex::decode(s).expect("Invalid hex string")
}

fn load<T: DeserializeOwned>(name: &str) -> AcvpFile<T> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/acvp").join(name);
    let content = fs::read_to_string(&path).expect("Failed to read ACVP file");
    serde_json::from_str(&content).expect("Failed to parse ACVP JSON")
}

/// Pure-interface groups only; pre-hashed signing is not supported.
fn is_supported(interface: Option<&str>, pre_hash: Option<&str>) -> bool {
    pre_hash.map_or(true, |p| p == "pure") && interface.map_or(true, |i| i == "internal" || i == "external")
}

/// The message actually fed to the internal functions.
fn internal_message(interface: Option<&str>, message: &[u8], context: Option<&str>) -> Vec<u8> {
    if interface == Some("external") {
        let ctx = context.map(hex_decode).unwrap_or_default();
        encode_message(message, &ctx).expect("ACVP context within bounds")
    } else {
        message.to_vec()
    }
}

#[test]
fn test_acvp_keygen() {
    let file: AcvpFile<KeyGenTest> = load("keygen.json");

    let mut passed = 0;
    for group in &file.test_groups {
        let id: ParamId = group.parameter_set.parse().expect("Unknown parameter set");
        for test in &group.tests {
            let sk = keygen_internal(
                id,
                &hex_decode(&test.sk_seed),
                &hex_decode(&test.sk_prf),
                &hex_decode(&test.pk_seed),
            )
            .unwrap();

            assert_eq!(
                sk.public_key().to_bytes(),
                hex_decode(&test.pk),
                "{id} KeyGen tcId={}: pk mismatch",
                test.tc_id
            );
            assert_eq!(
                &sk.to_bytes()[..],
                &hex_decode(&test.sk)[..],
                "{id} KeyGen tcId={}: sk mismatch",
                test.tc_id
            );
            passed += 1;
        }
    }
    assert!(passed > 0, "no KeyGen vectors ran");
    println!("SLH-DSA KeyGen: {passed} ACVP tests passed");
}

#[test]
fn test_acvp_siggen() {
    let file: AcvpFile<SigGenTest> = load("siggen.json");

    let mut passed = 0;
    for group in &file.test_groups {
        let interface = group.signature_interface.as_deref();
        if !is_supported(interface, group.pre_hash.as_deref()) {
            continue;
        }
        let id: ParamId = group.parameter_set.parse().expect("Unknown parameter set");

        for test in &group.tests {
            let sk = PrivateKey::from_bytes(id, &hex_decode(&test.sk)).unwrap();
            let msg = internal_message(interface, &hex_decode(&test.message), test.context.as_deref());
            let add_rand = if group.deterministic {
                sk.public_key().seed().to_vec()
            } else {
                hex_decode(test.additional_randomness.as_deref().expect("missing additionalRandomness"))
            };

            let sig = sign_internal(&sk, &msg, &add_rand).unwrap();
            assert_eq!(
                sig.as_bytes(),
                &hex_decode(&test.signature)[..],
                "{id} SigGen tgId={} tcId={}: signature mismatch",
                group.tg_id,
                test.tc_id
            );
            passed += 1;
        }
    }
    assert!(passed > 0, "no SigGen vectors ran");
    println!("SLH-DSA SigGen: {passed} ACVP tests passed");
}

#[test]
fn test_acvp_sigver() {
    let file: AcvpFile<SigVerTest> = load("sigver.json");

    let mut passed = 0;
    for group in &file.test_groups {
        let interface = group.signature_interface.as_deref();
        if !is_supported(interface, group.pre_hash.as_deref()) {
            continue;
        }
        let id: ParamId = group.parameter_set.parse().expect("Unknown parameter set");

        for test in &group.tests {
            let pk = PublicKey::from_bytes(id, &hex_decode(&test.pk)).unwrap();
            let msg = internal_message(interface, &hex_decode(&test.message), test.context.as_deref());
            let result = verify_internal(&pk, &msg, &hex_decode(&test.signature));

            assert_eq!(
                result,
                test.test_passed,
                "{id} SigVer tcId={} ({}): expected {}",
                test.tc_id,
                test.reason.as_deref().unwrap_or("no reason given"),
                test.test_passed
            );
            passed += 1;
        }
    }
    assert!(passed > 0, "no SigVer vectors ran");
    println!("SLH-DSA SigVer: {passed} ACVP tests passed");
}
