//! Diffie-Hellman key agreement over Oakley Group 1 (RFC 2409), the
//! 768-bit MODP group used by the access-point handshake.

use num_bigint::BigUint;
use rand::RngCore;

/// Width, in bytes, that every DH value (private key, public key, shared
/// secret) is normalized to before it is fed to HMAC. The group modulus is
/// 768 bits; values are always left-padded to this width.
pub const DH_KEY_LEN: usize = 96;

const GENERATOR: u64 = 2;

// Oakley Group 1, RFC 2409 section 6.1: a 768-bit MODP prime, 24 32-bit
// words derived from the binary expansion of pi.
const PRIME_HEX: &str = concat!(
    "FFFFFFFF", "FFFFFFFF", "C90FDAA2", "2168C234", "C4C6628B", "80DC1CD1",
    "29024E08", "8A67CC74", "020BBEA6", "3B139B22", "514A0879", "8E3404DD",
    "EF9519B3", "CD3A431B", "302B0A6D", "F25F1437", "4FE1356D", "6D51C245",
    "E485B576", "625E7EC6", "F44C42E9", "A637ED6B", "0BFF5CB6", "F406B7ED",
);

fn prime() -> BigUint {
    BigUint::parse_bytes(PRIME_HEX.as_bytes(), 16).expect("valid Oakley Group 1 prime")
}

fn pad_left(value: &BigUint, len: usize) -> Vec<u8> {
    let mut bytes = value.to_bytes_be();
    if bytes.len() > len {
        // Only the low-order `len` bytes are meaningful for our group.
        let start = bytes.len() - len;
        bytes = bytes[start..].to_vec();
    }
    let mut out = vec![0u8; len - bytes.len()];
    out.extend_from_slice(&bytes);
    out
}

/// A locally-generated DH key pair, created once per connection attempt and
/// discarded after the handshake completes.
pub struct DhLocalKeys {
    private_key: BigUint,
    public_key: BigUint,
}

impl DhLocalKeys {
    pub fn random() -> Self {
        let mut seed = [0u8; DH_KEY_LEN];
        rand::rng().fill_bytes(&mut seed);
        Self::from_private_bytes(&seed)
    }

    /// Builds a key pair from an explicit private-key seed rather than the
    /// system RNG. Used by deterministic test doubles that need a fixed
    /// key pair to assert on a known shared secret.
    pub fn from_private_bytes(seed: &[u8]) -> Self {
        let private_key = BigUint::from_bytes_be(seed);
        let public_key = private_key.modpow(&BigUint::from(GENERATOR), &prime());
        Self {
            private_key,
            public_key,
        }
    }

    pub fn public_key(&self) -> Vec<u8> {
        pad_left(&self.public_key, DH_KEY_LEN)
    }

    pub fn shared_secret(&self, remote_key: &[u8]) -> Vec<u8> {
        let remote = BigUint::from_bytes_be(remote_key);
        let shared = remote.modpow(&self.private_key, &prime());
        pad_left(&shared, DH_KEY_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_secret_matches_between_peers() {
        let alice = DhLocalKeys::random();
        let bob = DhLocalKeys::random();

        let alice_shared = alice.shared_secret(&bob.public_key());
        let bob_shared = bob.shared_secret(&alice.public_key());

        assert_eq!(alice_shared, bob_shared);
        assert_eq!(alice_shared.len(), DH_KEY_LEN);
    }

    #[test]
    fn public_key_is_always_96_bytes() {
        for _ in 0..8 {
            let keys = DhLocalKeys::random();
            assert_eq!(keys.public_key().len(), DH_KEY_LEN);
        }
    }
}
