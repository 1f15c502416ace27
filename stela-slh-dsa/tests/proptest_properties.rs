//! Property-based tests for SLH-DSA using proptest.
//!
//! These tests verify fundamental cryptographic properties:
//! - Basic properties: roundtrip (sign/verify), key sizes, signature size
//! - Wrong key: verification with wrong public key fails
//! - Tampered message: verification with tampered message fails
//! - Bit flips: any single flipped signature bit is rejected
//! - Determinism: deterministic signing repeats, randomized signing does not
//!
//! Note: SLH-DSA is significantly slower than lattice-based schemes,
//! so we use fewer test cases (4-8 per property) and only the fast sets.

use proptest::prelude::*;

/// Generate arbitrary 32-byte seeds for testing
fn arb_seed() -> impl Strategy<Value = [u8; 32]> {
    prop::array::uniform32(any::<u8>())
}

/// Generate arbitrary messages (0-128 bytes)
fn arb_message() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..128)
}

/// Generate arbitrary context strings (0-32 bytes)
fn arb_context() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..32)
}

macro_rules! slh_dsa_proptest {
    ($mod_name:ident, $id:expr, $cases:expr) => {
        mod $mod_name {
            use super::*;
            use rand::rngs::StdRng;
            use rand::SeedableRng;
            use stela_slh_dsa::{keygen, sign_deterministic, sign_randomized, verify, ParamId, Signature};

            const ID: ParamId = $id;

            proptest! {
                #![proptest_config(ProptestConfig::with_cases($cases))]

                /// Basic properties: roundtrip sign/verify, key sizes, signature size.
                #[test]
                fn basic_properties(seed in arb_seed(), message in arb_message(), ctx in arb_context()) {
                    let mut rng = StdRng::from_seed(seed);
                    let sk = keygen(ID, &mut rng).unwrap();
                    let pk = sk.public_key();

                    prop_assert_eq!(sk.to_bytes().len(), ID.params().private_key_size());
                    prop_assert_eq!(pk.to_bytes().len(), ID.params().public_key_size());

                    let sig = sign_randomized(&sk, &mut rng, &message, &ctx).unwrap();
                    prop_assert_eq!(sig.as_bytes().len(), ID.params().signature_size());

                    prop_assert!(verify(pk, &message, &sig, &ctx));
                }

                /// Verification with wrong public key fails.
                #[test]
                fn wrong_key_fails(seed1 in arb_seed(), seed2 in arb_seed(), message in arb_message()) {
                    prop_assume!(seed1 != seed2);

                    let mut rng1 = StdRng::from_seed(seed1);
                    let mut rng2 = StdRng::from_seed(seed2);

                    let sk1 = keygen(ID, &mut rng1).unwrap();
                    let sk2 = keygen(ID, &mut rng2).unwrap();

                    let sig = sign_deterministic(&sk1, &message, b"").unwrap();
                    prop_assert!(!verify(sk2.public_key(), &message, &sig, b""));
                }

                /// Verification with tampered message fails.
                #[test]
                fn tampered_message_fails(seed in arb_seed(), message in arb_message(), flip_pos in 0usize..128) {
                    prop_assume!(!message.is_empty());

                    let mut rng = StdRng::from_seed(seed);
                    let sk = keygen(ID, &mut rng).unwrap();

                    let sig = sign_deterministic(&sk, &message, b"").unwrap();

                    let mut tampered = message.clone();
                    let pos = flip_pos % tampered.len();
                    tampered[pos] ^= 0xFF;

                    prop_assert!(!verify(sk.public_key(), &tampered, &sig, b""));
                }

                /// Flipping any single bit of a valid signature makes it invalid.
                #[test]
                fn signature_bit_flips_fail(seed in arb_seed(), message in arb_message(), bits in prop::collection::vec(any::<usize>(), 8)) {
                    let mut rng = StdRng::from_seed(seed);
                    let sk = keygen(ID, &mut rng).unwrap();
                    let pk = sk.public_key();
                    let sig = sign_deterministic(&sk, &message, b"").unwrap();

                    for bit in bits {
                        let mut bytes = sig.as_bytes().to_vec();
                        let bit = bit % (bytes.len() * 8);
                        bytes[bit / 8] ^= 1 << (bit % 8);
                        let flipped = Signature::from_bytes(ID, &bytes).unwrap();
                        prop_assert!(!verify(pk, &message, &flipped, b""), "bit {} accepted", bit);
                    }
                }

                /// Deterministic signing repeats; randomized signing varies but verifies.
                #[test]
                fn signing_modes(seed in arb_seed(), message in arb_message(), ctx in arb_context()) {
                    let mut rng = StdRng::from_seed(seed);
                    let sk = keygen(ID, &mut rng).unwrap();
                    let pk = sk.public_key();

                    let d1 = sign_deterministic(&sk, &message, &ctx).unwrap();
                    let d2 = sign_deterministic(&sk, &message, &ctx).unwrap();
                    prop_assert_eq!(&d1, &d2);

                    let r1 = sign_randomized(&sk, &mut rng, &message, &ctx).unwrap();
                    let r2 = sign_randomized(&sk, &mut rng, &message, &ctx).unwrap();
                    prop_assert_ne!(&r1, &r2);
                    prop_assert!(verify(pk, &message, &r1, &ctx));
                    prop_assert!(verify(pk, &message, &r2, &ctx));
                }
            }
        }
    };
}

slh_dsa_proptest!(slh_dsa_shake_128f_props, ParamId::Shake128f, 8);
slh_dsa_proptest!(slh_dsa_sha2_128f_props, ParamId::Sha2_128f, 8);
slh_dsa_proptest!(slh_dsa_shake_192f_props, ParamId::Shake192f, 4);
slh_dsa_proptest!(slh_dsa_sha2_256f_props, ParamId::Sha2_256f, 4);
