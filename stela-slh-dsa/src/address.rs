//! ADRS (Address) structure for domain separation in SLH-DSA.
//!
//! Every hash call is keyed by an address describing its purpose and tree
//! position. The SHAKE family uses the full 32-byte layout of FIPS 205,
//! Section 4.2. The SHA-2 family uses the compressed 22-byte ADRSc layout
//! of Section 11.2 directly, so no conversion happens per hash call.
//!
//! | Field            | SHAKE (32 bytes) | SHA-2 (22 bytes) |
//! |------------------|------------------|------------------|
//! | layer            | 0..4             | 0                |
//! | tree             | 4..16            | 1..9 (low 64 bits) |
//! | type             | 16..20           | 9                |
//! | key pair         | 20..24           | 10..14           |
//! | chain / height   | 24..28           | 14..18           |
//! | hash / index     | 28..32           | 18..22           |

use core::fmt;

use crate::params::HashFamily;

/// ADRS type constants as defined in FIPS 205, Section 4.2.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdrsType {
    /// WOTS+ hash address (used in chain computation).
    WotsHash = 0,
    /// WOTS+ public key compression address.
    WotsPk = 1,
    /// Merkle tree node address.
    Tree = 2,
    /// FORS tree address.
    ForsTree = 3,
    /// FORS roots compression address.
    ForsRoots = 4,
    /// WOTS+ PRF address (secret key generation).
    WotsPrf = 5,
    /// FORS PRF address (secret key generation).
    ForsPrf = 6,
}

const SHAKE_SIZE: usize = 32;
const SHA2_SIZE: usize = 22;

/// Domain-separation address.
///
/// Fields after the type tag are shared between address types: the chain
/// address and tree height occupy the same word, as do the hash address and
/// tree index.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Address {
    bytes: [u8; SHAKE_SIZE],
    family: HashFamily,
}

impl Address {
    /// Create a zeroed address for the given hash family.
    #[must_use]
    pub const fn new(family: HashFamily) -> Self {
        Self {
            bytes: [0u8; SHAKE_SIZE],
            family,
        }
    }

    /// Hash family this address is laid out for.
    #[must_use]
    pub const fn family(&self) -> HashFamily {
        self.family
    }

    /// The address as fed to the hash function: 22 or 32 bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    /// Encoded length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        match self.family {
            HashFamily::Sha2 => SHA2_SIZE,
            HashFamily::Shake => SHAKE_SIZE,
        }
    }

    /// Always false; addresses have a fixed non-zero length.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    // Offset of the type-specific words relative to the SHA-2 layout.
    const fn offset(&self) -> usize {
        match self.family {
            HashFamily::Sha2 => 0,
            HashFamily::Shake => 10,
        }
    }

    fn put_u32(&mut self, at: usize, value: u32) {
        self.bytes[at..at + 4].copy_from_slice(&value.to_be_bytes());
    }

    fn get_u32(&self, at: usize) -> u32 {
        let mut word = [0u8; 4];
        word.copy_from_slice(&self.bytes[at..at + 4]);
        u32::from_be_bytes(word)
    }

    // =========================================================================
    // Common fields
    // =========================================================================

    /// Set the layer address. SHA-2 keeps only the low byte.
    pub fn set_layer(&mut self, layer: u32) {
        match self.family {
            HashFamily::Sha2 => self.bytes[0] = layer as u8,
            HashFamily::Shake => self.put_u32(0, layer),
        }
    }

    /// Get the layer address.
    #[must_use]
    pub fn layer(&self) -> u32 {
        match self.family {
            HashFamily::Sha2 => u32::from(self.bytes[0]),
            HashFamily::Shake => self.get_u32(0),
        }
    }

    /// Set the 96-bit tree address. SHA-2 keeps only the low 64 bits.
    pub fn set_tree(&mut self, tree: &TreeIndex) {
        let [t0, t1, t2] = tree.0;
        match self.family {
            HashFamily::Sha2 => {
                self.put_u32(1, t1);
                self.put_u32(5, t0);
            }
            HashFamily::Shake => {
                self.put_u32(4, t2);
                self.put_u32(8, t1);
                self.put_u32(12, t0);
            }
        }
    }

    /// Get the tree address.
    #[must_use]
    pub fn tree(&self) -> TreeIndex {
        match self.family {
            HashFamily::Sha2 => TreeIndex([self.get_u32(5), self.get_u32(1), 0]),
            HashFamily::Shake => {
                TreeIndex([self.get_u32(12), self.get_u32(8), self.get_u32(4)])
            }
        }
    }

    /// Write the type tag and zero every field that follows it.
    ///
    /// FIPS 205's setTypeAndClear. Key pair, chain/height, and hash/index
    /// are all cleared; callers set what the new type needs.
    pub fn set_type_and_clear(&mut self, adrs_type: AdrsType) {
        let o = self.offset();
        match self.family {
            HashFamily::Sha2 => self.bytes[9] = adrs_type as u8,
            HashFamily::Shake => self.put_u32(16, adrs_type as u32),
        }
        self.bytes[o + 10..].fill(0);
    }

    /// Get the raw type tag.
    #[must_use]
    pub fn adrs_type(&self) -> u32 {
        match self.family {
            HashFamily::Sha2 => u32::from(self.bytes[9]),
            HashFamily::Shake => self.get_u32(16),
        }
    }

    /// Copy of this address with a new type, clearing the trailing fields
    /// and keeping the key pair address.
    #[must_use]
    pub fn with_type(&self, adrs_type: AdrsType) -> Self {
        let mut adrs = *self;
        adrs.set_type_and_clear(adrs_type);
        adrs.set_keypair(self.keypair());
        adrs
    }

    // =========================================================================
    // Type-specific fields
    // =========================================================================

    /// Set the key pair address.
    pub fn set_keypair(&mut self, keypair: u32) {
        self.put_u32(self.offset() + 10, keypair);
    }

    /// Get the key pair address.
    #[must_use]
    pub fn keypair(&self) -> u32 {
        self.get_u32(self.offset() + 10)
    }

    /// Set the chain address (WOTS+ types).
    pub fn set_chain(&mut self, chain: u32) {
        self.put_u32(self.offset() + 14, chain);
    }

    /// Get the chain address.
    #[must_use]
    pub fn chain(&self) -> u32 {
        self.get_u32(self.offset() + 14)
    }

    /// Set the tree height (tree and FORS types). Aliases the chain address.
    pub fn set_tree_height(&mut self, height: u32) {
        self.put_u32(self.offset() + 14, height);
    }

    /// Get the tree height.
    #[must_use]
    pub fn tree_height(&self) -> u32 {
        self.get_u32(self.offset() + 14)
    }

    /// Set the hash address (WOTS+ chain step).
    pub fn set_hash(&mut self, hash: u32) {
        self.put_u32(self.offset() + 18, hash);
    }

    /// Get the hash address.
    #[must_use]
    pub fn hash(&self) -> u32 {
        self.get_u32(self.offset() + 18)
    }

    /// Set the tree index (tree and FORS types). Aliases the hash address.
    pub fn set_tree_index(&mut self, index: u32) {
        self.put_u32(self.offset() + 18, index);
    }

    /// Get the tree index.
    #[must_use]
    pub fn tree_index(&self) -> u32 {
        self.get_u32(self.offset() + 18)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Address")
            .field("family", &self.family)
            .field("layer", &self.layer())
            .field("tree", &self.tree())
            .field("type", &self.adrs_type())
            .field("keypair", &self.keypair())
            .field("chain_or_height", &self.chain())
            .field("hash_or_index", &self.hash())
            .finish()
    }
}

/// 96-bit tree index held as three 32-bit words, least significant first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TreeIndex(pub [u32; 3]);

impl TreeIndex {
    /// Split off the low `bits` bits as a leaf index and shift the rest down.
    ///
    /// Used to walk from one hypertree layer to the next; `bits` is h' and
    /// must be in `1..32`.
    pub fn next_index(&mut self, bits: u32) -> u32 {
        debug_assert!(bits > 0 && bits < 32);
        let [t0, t1, t2] = self.0;
        let leaf = t0 & low_mask(bits);
        self.0 = [
            (t0 >> bits) | (t1 << (32 - bits)),
            (t1 >> bits) | (t2 << (32 - bits)),
            t2 >> bits,
        ];
        leaf
    }

    /// Whether every word is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0; 3]
    }
}

/// Mask keeping the low `bits` bits of a word; saturates at 32.
pub(crate) const fn low_mask(bits: u32) -> u32 {
    if bits >= 32 {
        u32::MAX
    } else {
        (1u32 << bits) - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shake_layout() {
        let mut adrs = Address::new(HashFamily::Shake);
        adrs.set_layer(0x0102_0304);
        adrs.set_tree(&TreeIndex([0x1112_1314, 0x2122_2324, 0x3132_3334]));
        adrs.set_type_and_clear(AdrsType::WotsHash);
        adrs.set_keypair(0x4142_4344);
        adrs.set_chain(0x5152_5354);
        adrs.set_hash(0x6162_6364);

        let b = adrs.as_bytes();
        assert_eq!(b.len(), 32);
        assert_eq!(&b[0..4], &[1, 2, 3, 4]);
        assert_eq!(&b[4..8], &[0x31, 0x32, 0x33, 0x34]);
        assert_eq!(&b[8..12], &[0x21, 0x22, 0x23, 0x24]);
        assert_eq!(&b[12..16], &[0x11, 0x12, 0x13, 0x14]);
        assert_eq!(&b[16..20], &[0, 0, 0, 0]);
        assert_eq!(&b[20..24], &[0x41, 0x42, 0x43, 0x44]);
        assert_eq!(&b[24..28], &[0x51, 0x52, 0x53, 0x54]);
        assert_eq!(&b[28..32], &[0x61, 0x62, 0x63, 0x64]);
    }

    #[test]
    fn test_sha2_layout() {
        let mut adrs = Address::new(HashFamily::Sha2);
        adrs.set_layer(0x0102_0304);
        adrs.set_tree(&TreeIndex([0x1112_1314, 0x2122_2324, 0x3132_3334]));
        adrs.set_type_and_clear(AdrsType::Tree);
        adrs.set_tree_height(7);
        adrs.set_tree_index(0x6162_6364);

        let b = adrs.as_bytes();
        assert_eq!(b.len(), 22);
        assert_eq!(b[0], 0x04);
        assert_eq!(&b[1..5], &[0x21, 0x22, 0x23, 0x24]);
        assert_eq!(&b[5..9], &[0x11, 0x12, 0x13, 0x14]);
        assert_eq!(b[9], AdrsType::Tree as u8);
        assert_eq!(&b[10..14], &[0, 0, 0, 0]);
        assert_eq!(&b[14..18], &[0, 0, 0, 7]);
        assert_eq!(&b[18..22], &[0x61, 0x62, 0x63, 0x64]);
    }

    #[test]
    fn test_setters_round_trip() {
        for family in [HashFamily::Sha2, HashFamily::Shake] {
            let mut adrs = Address::new(family);
            adrs.set_layer(5);
            adrs.set_tree(&TreeIndex([0xdead_beef, 0x0123_4567, 0]));
            adrs.set_type_and_clear(AdrsType::ForsTree);
            adrs.set_keypair(77);
            adrs.set_tree_height(3);
            adrs.set_tree_index(1234);

            assert_eq!(adrs.layer(), 5);
            assert_eq!(adrs.tree(), TreeIndex([0xdead_beef, 0x0123_4567, 0]));
            assert_eq!(adrs.adrs_type(), AdrsType::ForsTree as u32);
            assert_eq!(adrs.keypair(), 77);
            assert_eq!(adrs.tree_height(), 3);
            assert_eq!(adrs.tree_index(), 1234);
            assert_eq!(adrs.chain(), 3);
            assert_eq!(adrs.hash(), 1234);
        }
    }

    #[test]
    fn test_set_type_and_clear_zeroes_trailing_fields() {
        for family in [HashFamily::Sha2, HashFamily::Shake] {
            let mut adrs = Address::new(family);
            adrs.set_layer(2);
            adrs.set_tree(&TreeIndex([9, 8, 7]));
            adrs.set_keypair(1);
            adrs.set_chain(2);
            adrs.set_hash(3);

            let before = adrs.tree();
            adrs.set_type_and_clear(AdrsType::WotsPk);

            assert_eq!(adrs.layer(), 2);
            assert_eq!(adrs.tree(), before);
            assert_eq!(adrs.adrs_type(), AdrsType::WotsPk as u32);
            assert_eq!(adrs.keypair(), 0);
            assert_eq!(adrs.chain(), 0);
            assert_eq!(adrs.hash(), 0);
        }
    }

    #[test]
    fn test_with_type_keeps_keypair() {
        let mut adrs = Address::new(HashFamily::Shake);
        adrs.set_keypair(42);
        adrs.set_chain(9);
        let prf = adrs.with_type(AdrsType::WotsPrf);
        assert_eq!(prf.keypair(), 42);
        assert_eq!(prf.chain(), 0);
        assert_eq!(prf.adrs_type(), AdrsType::WotsPrf as u32);
        assert_eq!(adrs.chain(), 9);
    }

    #[test]
    fn test_sha2_layer_truncates_to_byte() {
        let mut adrs = Address::new(HashFamily::Sha2);
        adrs.set_layer(0x1ff);
        assert_eq!(adrs.layer(), 0xff);
    }

    #[test]
    fn test_next_index_carries_across_words() {
        let mut idx = TreeIndex([0xffff_fff5, 0x0000_0003, 0x0000_0001]);
        assert_eq!(idx.next_index(4), 0x5);
        assert_eq!(idx.0, [0x3fff_ffff, 0x1000_0000, 0]);
        assert_eq!(idx.next_index(4), 0xf);
        assert_eq!(idx.0, [0x03ff_ffff, 0x0100_0000, 0]);
    }

    #[test]
    fn test_next_index_drains_to_zero() {
        let mut idx = TreeIndex([0x0000_01ff, 0, 0]);
        assert_eq!(idx.next_index(9), 0x1ff);
        assert!(idx.is_zero());
        assert_eq!(idx.next_index(9), 0);
    }

    #[test]
    fn test_low_mask_saturates() {
        assert_eq!(low_mask(0), 0);
        assert_eq!(low_mask(9), 0x1ff);
        assert_eq!(low_mask(32), u32::MAX);
        assert_eq!(low_mask(54), u32::MAX);
    }
}
