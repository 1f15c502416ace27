#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use stela_slh_dsa::{derive_key, sign_deterministic, sign_randomized, verify, ParamId};

/// A deterministic RNG seeded from fuzzer input.
struct FuzzRng {
    seed: [u8; 32],
    counter: u64,
}

impl FuzzRng {
    fn new(seed: &[u8]) -> Self {
        let mut s = [0u8; 32];
        let len = seed.len().min(32);
        s[..len].copy_from_slice(&seed[..len]);
        Self { seed: s, counter: 0 }
    }

    fn next_bytes(&mut self, dest: &mut [u8]) {
        use sha3::{Shake256, digest::{ExtendableOutput, Update, XofReader}};

        let mut hasher = Shake256::default();
        hasher.update(&self.seed);
        hasher.update(&self.counter.to_le_bytes());
        self.counter += 1;

        let mut reader = hasher.finalize_xof();
        reader.read(dest);
    }
}

impl rand_core::RngCore for FuzzRng {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.next_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.next_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.next_bytes(dest);
    }
}

impl rand_core::CryptoRng for FuzzRng {}

#[derive(Debug, Arbitrary)]
struct RoundtripInput {
    key_seed: [u8; 64],
    fast_sha2: bool,
    message: Vec<u8>,
    context: Vec<u8>,
}

fuzz_target!(|input: RoundtripInput| {
    let id = if input.fast_sha2 { ParamId::Sha2_128f } else { ParamId::Shake128f };
    let sk = derive_key(id, &input.key_seed).unwrap();
    let pk = sk.public_key();

    if input.context.len() > 255 {
        assert!(sign_deterministic(&sk, &input.message, &input.context).is_err());
        return;
    }

    let sig = sign_deterministic(&sk, &input.message, &input.context).unwrap();
    assert_eq!(sig.as_bytes().len(), id.params().signature_size());
    assert!(verify(pk, &input.message, &sig, &input.context), "roundtrip verification should always succeed");

    let again = sign_deterministic(&sk, &input.message, &input.context).unwrap();
    assert_eq!(sig, again, "deterministic signing must repeat");

    let mut rng = FuzzRng::new(&input.key_seed);
    let randomized = sign_randomized(&sk, &mut rng, &input.message, &input.context).unwrap();
    assert!(verify(pk, &input.message, &randomized, &input.context));

    // Verification with different message should fail
    let mut wrong_message = input.message.clone();
    wrong_message.push(0xFF);
    assert!(!verify(pk, &wrong_message, &sig, &input.context), "verification with wrong message should fail");
});
