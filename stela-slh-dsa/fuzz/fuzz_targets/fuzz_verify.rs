#![no_main]

use std::sync::OnceLock;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use stela_slh_dsa::{keygen_internal, sign_deterministic, verify, verify_internal, ParamId, PrivateKey, Signature};

const MESSAGE: &[u8] = b"stela fuzz verify";

/// One key and signature shared by every iteration; signing is too slow per input.
fn fixture() -> &'static (PrivateKey, Signature) {
    static FIXTURE: OnceLock<(PrivateKey, Signature)> = OnceLock::new();
    FIXTURE.get_or_init(|| {
        let sk = keygen_internal(ParamId::Shake128f, &[1u8; 16], &[2u8; 16], &[3u8; 16]).unwrap();
        let sig = sign_deterministic(&sk, MESSAGE, b"").unwrap();
        (sk, sig)
    })
}

#[derive(Debug, Arbitrary)]
struct VerifyInput {
    raw_signature: Vec<u8>,
    message: Vec<u8>,
    corruption_index: usize,
    corruption_value: u8,
}

fuzz_target!(|input: VerifyInput| {
    let (sk, sig) = fixture();
    let pk = sk.public_key();

    // Arbitrary bytes never panic and essentially never verify.
    let _ = verify_internal(pk, &input.message, &input.raw_signature);

    // Flipping any bit of a valid signature must be rejected.
    let mut corrupted = sig.as_bytes().to_vec();
    let idx = input.corruption_index % corrupted.len();
    corrupted[idx] ^= input.corruption_value | 1; // Ensure at least 1 bit changed
    let corrupted = Signature::from_bytes(ParamId::Shake128f, &corrupted).unwrap();
    assert!(!verify(pk, MESSAGE, &corrupted, b""), "verification should fail with corrupted signature");

    if input.message != MESSAGE {
        assert!(!verify(pk, &input.message, sig, b""), "verification should fail with another message");
    }
});
