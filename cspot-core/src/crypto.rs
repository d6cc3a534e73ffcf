//! `CryptoPort`: the primitive capability set the core borrows rather than
//! reimplements — base64, SHA1, HMAC-SHA1, PBKDF2, AES-128-CTR/ECB and the
//! Diffie-Hellman group. `RealCrypto` backs it with the RustCrypto crates;
//! tests use canned byte strings instead of standing up a second impl.

use crate::connection::diffie_hellman::DhLocalKeys;
use aes::cipher::{generic_array::GenericArray, BlockDecrypt, KeyInit, KeyIvInit, StreamCipher};
use aes::Aes128;
use base64::{engine::general_purpose::STANDARD, Engine};
use hmac::{Hmac, Mac};
use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha1::{Digest, Sha1};

type Aes128Ctr = ctr::Ctr128BE<Aes128>;
type HmacSha1 = Hmac<Sha1>;

/// Capability set exposed to the rest of the core. A trait so tests can
/// swap in canned values without touching the real crypto stack.
///
/// The DH methods are stateful: `dh_init` generates (or, for a test
/// double, fixes) a key pair that `dh_public`/`dh_shared` then read back.
/// Each `CryptoPort` instance is expected to be owned by a single
/// connection attempt or `LoginBlob`, so this mirrors §4.2's `dh_init()`/
/// `dh_public()`/`dh_shared()` without threading a key-pair handle through
/// every call site.
pub trait CryptoPort {
    fn base64_decode(&self, input: &str) -> Result<Vec<u8>, crate::error::Error>;
    fn base64_encode(&self, input: &[u8]) -> String;
    fn sha1(&self, data: &[u8]) -> [u8; 20];
    fn hmac_sha1(&self, key: &[u8], data: &[u8]) -> [u8; 20];
    fn pbkdf2_hmac_sha1(&self, password: &[u8], salt: &[u8], iterations: u32, key_len: usize) -> Vec<u8>;
    fn aes128_ctr_xcrypt(&self, key: &[u8], iv: &[u8], data: &mut [u8]);
    fn aes128_ecb_decrypt(&self, key: &[u8], data: &mut [u8]);
    fn random_bytes(&self, n: usize) -> Vec<u8>;
    fn dh_init(&mut self);
    fn dh_public(&self) -> Vec<u8>;
    fn dh_shared(&self, remote_public: &[u8]) -> Vec<u8>;
}

#[derive(Default)]
pub struct RealCrypto {
    dh: Option<DhLocalKeys>,
}

impl CryptoPort for RealCrypto {
    fn base64_decode(&self, input: &str) -> Result<Vec<u8>, crate::error::Error> {
        STANDARD
            .decode(input.trim())
            .map_err(|_| crate::error::Error::BadBase64)
    }

    fn base64_encode(&self, input: &[u8]) -> String {
        STANDARD.encode(input)
    }

    fn sha1(&self, data: &[u8]) -> [u8; 20] {
        Sha1::digest(data).into()
    }

    fn hmac_sha1(&self, key: &[u8], data: &[u8]) -> [u8; 20] {
        let mut mac = HmacSha1::new_from_slice(key).expect("HMAC accepts a key of any size");
        mac.update(data);
        mac.finalize().into_bytes().into()
    }

    fn pbkdf2_hmac_sha1(
        &self,
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        key_len: usize,
    ) -> Vec<u8> {
        let mut out = vec![0u8; key_len];
        pbkdf2_hmac::<Sha1>(password, salt, iterations, &mut out);
        out
    }

    fn aes128_ctr_xcrypt(&self, key: &[u8], iv: &[u8], data: &mut [u8]) {
        let key = GenericArray::from_slice(key);
        let iv = GenericArray::from_slice(iv);
        let mut cipher = Aes128Ctr::new(key, iv);
        cipher.apply_keystream(data);
    }

    fn aes128_ecb_decrypt(&self, key: &[u8], data: &mut [u8]) {
        let cipher = Aes128::new(GenericArray::from_slice(key));
        for block in data.chunks_mut(16) {
            cipher.decrypt_block(GenericArray::from_mut_slice(block));
        }
    }

    fn random_bytes(&self, n: usize) -> Vec<u8> {
        let mut buf = vec![0u8; n];
        rand::rng().fill_bytes(&mut buf);
        buf
    }

    fn dh_init(&mut self) {
        self.dh = Some(DhLocalKeys::random());
    }

    fn dh_public(&self) -> Vec<u8> {
        self.dh
            .as_ref()
            .expect("dh_init must be called before dh_public")
            .public_key()
    }

    fn dh_shared(&self, remote_public: &[u8]) -> Vec<u8> {
        self.dh
            .as_ref()
            .expect("dh_init must be called before dh_shared")
            .shared_secret(remote_public)
    }
}

#[cfg(test)]
pub mod test_double {
    use super::*;

    /// A deterministic stand-in for `RealCrypto`: `dh_init` fixes the key
    /// pair from a constant seed instead of the system RNG, and
    /// `random_bytes` returns a constant fill, so tests can assert on
    /// exact derived key material (see `S2` in the handshake tests)
    /// without depending on RNG output. Everything else delegates to
    /// `RealCrypto`, which is already pure given its inputs.
    #[derive(Default)]
    pub struct MockCrypto {
        dh: Option<DhLocalKeys>,
    }

    const FIXED_DH_SEED: [u8; crate::connection::diffie_hellman::DH_KEY_LEN] =
        [0x07; crate::connection::diffie_hellman::DH_KEY_LEN];

    impl CryptoPort for MockCrypto {
        fn base64_decode(&self, input: &str) -> Result<Vec<u8>, crate::error::Error> {
            RealCrypto::default().base64_decode(input)
        }

        fn base64_encode(&self, input: &[u8]) -> String {
            RealCrypto::default().base64_encode(input)
        }

        fn sha1(&self, data: &[u8]) -> [u8; 20] {
            RealCrypto::default().sha1(data)
        }

        fn hmac_sha1(&self, key: &[u8], data: &[u8]) -> [u8; 20] {
            RealCrypto::default().hmac_sha1(key, data)
        }

        fn pbkdf2_hmac_sha1(
            &self,
            password: &[u8],
            salt: &[u8],
            iterations: u32,
            key_len: usize,
        ) -> Vec<u8> {
            RealCrypto::default().pbkdf2_hmac_sha1(password, salt, iterations, key_len)
        }

        fn aes128_ctr_xcrypt(&self, key: &[u8], iv: &[u8], data: &mut [u8]) {
            RealCrypto::default().aes128_ctr_xcrypt(key, iv, data)
        }

        fn aes128_ecb_decrypt(&self, key: &[u8], data: &mut [u8]) {
            RealCrypto::default().aes128_ecb_decrypt(key, data)
        }

        fn random_bytes(&self, n: usize) -> Vec<u8> {
            vec![0x42; n]
        }

        fn dh_init(&mut self) {
            self.dh = Some(DhLocalKeys::from_private_bytes(&FIXED_DH_SEED));
        }

        fn dh_public(&self) -> Vec<u8> {
            self.dh
                .as_ref()
                .expect("dh_init must be called before dh_public")
                .public_key()
        }

        fn dh_shared(&self, remote_public: &[u8]) -> Vec<u8> {
            self.dh
                .as_ref()
                .expect("dh_init must be called before dh_shared")
                .shared_secret(remote_public)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hmac_sha1_matches_known_vector() {
        // RFC 2202 test case 1.
        let key = [0x0b; 20];
        let data = b"Hi There";
        let expected = [
            0xb6, 0x17, 0x31, 0x86, 0x55, 0x05, 0x72, 0x64, 0xe2, 0x8b, 0xc0, 0xb6, 0xfb, 0x37,
            0x8c, 0x8e, 0xf1, 0x46, 0xbe, 0x00,
        ];
        assert_eq!(RealCrypto::default().hmac_sha1(&key, data), expected);
    }

    #[test]
    fn base64_round_trips() {
        let crypto = RealCrypto::default();
        let data = b"spotify connect blob";
        let encoded = crypto.base64_encode(data);
        assert_eq!(crypto.base64_decode(&encoded).unwrap(), data);
    }

    #[test]
    fn mock_dh_is_deterministic_across_instances() {
        use test_double::MockCrypto;

        let mut a = MockCrypto::default();
        a.dh_init();
        let mut b = MockCrypto::default();
        b.dh_init();

        assert_eq!(a.dh_public(), b.dh_public());
    }
}
