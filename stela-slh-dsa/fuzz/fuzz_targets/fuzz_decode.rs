#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use stela_slh_dsa::{derive_key, ParamId, PrivateKey, PublicKey, Signature};

#[derive(Debug, Arbitrary)]
struct DecodeInput {
    id: u8,
    name: String,
    bytes: Vec<u8>,
}

fuzz_target!(|input: DecodeInput| {
    let _ = input.name.parse::<ParamId>();

    let Ok(id) = ParamId::try_from(input.id) else {
        return;
    };
    let p = id.params();

    match PublicKey::from_bytes(id, &input.bytes) {
        Ok(pk) => assert_eq!(pk.to_bytes(), input.bytes),
        Err(_) => assert_ne!(input.bytes.len(), p.public_key_size()),
    }
    match PrivateKey::from_bytes(id, &input.bytes) {
        Ok(sk) => assert_eq!(&sk.to_bytes()[..], &input.bytes[..]),
        Err(_) => assert_ne!(input.bytes.len(), p.private_key_size()),
    }
    match Signature::from_bytes(id, &input.bytes) {
        Ok(sig) => assert_eq!(sig.as_bytes(), &input.bytes[..]),
        Err(_) => assert_ne!(input.bytes.len(), p.signature_size()),
    }
    if input.bytes.len() != p.seed_size() {
        assert!(derive_key(id, &input.bytes).is_err());
    }
});
