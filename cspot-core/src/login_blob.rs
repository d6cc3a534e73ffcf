//! Decrypts and parses the ZeroConf credential blob handed over by the
//! controller, producing the `LoginCredentials` consumed by `Session`.

use crate::crypto::CryptoPort;
use crate::error::Error;
use crate::protocol::authentication::AuthenticationType;
use crate::util::read_short_varint;
use serde::Serialize;
use std::collections::HashMap;

const IV_SIZE: usize = 16;
const CHECKSUM_SIZE: usize = 20;

const PROTOCOL_VERSION: &str = "2.7.1";
const SW_VERSION: &str = "cspot-1.1";
const BRAND_NAME: &str = "cspot";

#[derive(Debug, Clone, PartialEq)]
pub struct LoginCredentials {
    pub username: String,
    pub auth_type: AuthenticationType,
    pub auth_data: Vec<u8>,
}

#[derive(Serialize)]
struct SpotifyInfo {
    status: i32,
    #[serde(rename = "statusString")]
    status_string: &'static str,
    version: &'static str,
    #[serde(rename = "spotifyError")]
    spotify_error: i32,
    #[serde(rename = "libraryVersion")]
    library_version: &'static str,
    #[serde(rename = "accountReq")]
    account_req: &'static str,
    #[serde(rename = "brandDisplayName")]
    brand_display_name: &'static str,
    #[serde(rename = "modelDisplayName")]
    model_display_name: String,
    #[serde(rename = "voiceSupport")]
    voice_support: &'static str,
    availability: String,
    #[serde(rename = "productID")]
    product_id: i32,
    #[serde(rename = "tokenType")]
    token_type: &'static str,
    #[serde(rename = "groupStatus")]
    group_status: &'static str,
    #[serde(rename = "resolverVersion")]
    resolver_version: &'static str,
    scope: &'static str,
    #[serde(rename = "activeUser")]
    active_user: &'static str,
    #[serde(rename = "deviceID")]
    device_id: String,
    #[serde(rename = "remoteName")]
    remote_name: String,
    #[serde(rename = "publicKey")]
    public_key: String,
    #[serde(rename = "deviceType")]
    device_type: &'static str,
}

/// Owns the device's DH key pair (held inside `crypto`) and, once the
/// controller has POSTed a blob, the decoded login credentials.
pub struct LoginBlob<C> {
    device_name: String,
    device_id: String,
    username: String,
    credentials: Option<LoginCredentials>,
    crypto: C,
}

impl<C: CryptoPort> LoginBlob<C> {
    pub fn new(device_name: impl Into<String>, mut crypto: C) -> Self {
        let device_name = device_name.into();
        let device_id = format!("142137fd329622137a149016{:016x}", stable_hash(&device_name));
        crypto.dh_init();
        Self {
            device_name,
            device_id,
            username: String::new(),
            credentials: None,
            crypto,
        }
    }

    pub fn credentials(&self) -> Option<&LoginCredentials> {
        self.credentials.as_ref()
    }

    pub fn get_info(&self) -> Result<String, Error> {
        let info = SpotifyInfo {
            status: 101,
            status_string: "OK",
            version: PROTOCOL_VERSION,
            spotify_error: 0,
            library_version: SW_VERSION,
            account_req: "PREMIUM",
            brand_display_name: BRAND_NAME,
            model_display_name: self.device_name.clone(),
            voice_support: "NO",
            availability: self.username.clone(),
            product_id: 0,
            token_type: "default",
            group_status: "NONE",
            resolver_version: "0",
            scope: "streaming,client-authorization-universal",
            active_user: "",
            device_id: self.device_id.clone(),
            remote_name: self.device_name.clone(),
            public_key: self.crypto.base64_encode(&self.crypto.dh_public()),
            device_type: "SPEAKER",
        };
        Ok(serde_json::to_string(&info)?)
    }

    /// Accepts the URL-decoded POST body from `/spotify_info`. Returns
    /// `true` iff all required fields were present and the blob decoded
    /// successfully; never leaks *why* a decode failed to the caller.
    pub fn set_info(&mut self, data: &HashMap<String, String>) -> bool {
        self.try_set_info(data).is_ok()
    }

    fn try_set_info(&mut self, data: &HashMap<String, String>) -> Result<(), Error> {
        let username = data
            .get("userName")
            .or_else(|| data.get("username"))
            .ok_or(Error::MissingField("userName"))?;
        let blob_string = data.get("blob").ok_or(Error::MissingField("blob"))?;
        let client_key_string = data
            .get("clientKey")
            .ok_or(Error::MissingField("clientKey"))?;
        let device_name = data
            .get("deviceName")
            .ok_or(Error::MissingField("deviceName"))?;

        let client_key = self.crypto.base64_decode(client_key_string)?;
        let blob = self.crypto.base64_decode(blob_string)?;
        let shared = self.crypto.dh_shared(&client_key);

        let part_decoded = self.decode_blob(&blob, &shared)?;
        let login_data = self.decode_blob_secondary(&part_decoded, username, device_name)?;

        let credentials = parse_login_data(&login_data, username)?;
        self.username = username.clone();
        self.credentials = Some(credentials);
        Ok(())
    }

    fn decode_blob(&self, blob: &[u8], shared: &[u8]) -> Result<Vec<u8>, Error> {
        if blob.len() < IV_SIZE + CHECKSUM_SIZE {
            return Err(Error::TruncatedBlob);
        }
        let iv = &blob[..IV_SIZE];
        let ciphertext = &blob[IV_SIZE..blob.len() - CHECKSUM_SIZE];
        let checksum = &blob[blob.len() - CHECKSUM_SIZE..];

        let base_key = &self.crypto.sha1(shared)[..IV_SIZE];
        let checksum_key = self.crypto.hmac_sha1(base_key, b"checksum");
        let encryption_key = &self.crypto.hmac_sha1(base_key, b"encryption")[..IV_SIZE];

        let mac = self.crypto.hmac_sha1(&checksum_key, ciphertext);
        if mac != checksum {
            return Err(Error::BadMac);
        }

        let mut plaintext = ciphertext.to_vec();
        self.crypto.aes128_ctr_xcrypt(encryption_key, iv, &mut plaintext);
        Ok(plaintext)
    }

    fn decode_blob_secondary(
        &self,
        blob: &[u8],
        username: &str,
        device_name: &str,
    ) -> Result<Vec<u8>, Error> {
        let encoded = std::str::from_utf8(blob).map_err(|_| Error::BadBase64)?;
        let mut data = self.crypto.base64_decode(encoded)?;
        if data.is_empty() || data.len() % 16 != 0 {
            return Err(Error::BadPadding);
        }

        let secret = self.crypto.sha1(device_name.as_bytes());
        let pk_base = self
            .crypto
            .pbkdf2_hmac_sha1(&secret, username.as_bytes(), 256, 20);
        let key = self.crypto.sha1(&pk_base);

        // AES-128 only consumes the first 16 bytes; the remaining
        // `[0,0,0,0x14]` marker from the original construction is never
        // used for anything past the key schedule and is intentionally
        // discarded here.
        self.crypto.aes128_ecb_decrypt(&key[..16], &mut data);

        let len = data.len();
        for i in 0..len - IV_SIZE {
            data[len - 1 - i] ^= data[len - 1 - i - IV_SIZE];
        }

        Ok(data)
    }
}

fn parse_login_data(data: &[u8], username: &str) -> Result<LoginCredentials, Error> {
    let mut pos = 0usize;

    pos += 1;
    let (len1, n) = read_short_varint(data, pos)?;
    pos += n + len1 as usize;

    pos += 1;
    let (auth_type, n) = read_short_varint(data, pos)?;
    pos += n;

    pos += 1;
    let (auth_size, n) = read_short_varint(data, pos)?;
    pos += n;

    let auth_size = auth_size as usize;
    let auth_data = data
        .get(pos..pos + auth_size)
        .ok_or(Error::TruncatedBlob)?
        .to_vec();

    Ok(LoginCredentials {
        username: username.to_owned(),
        auth_type: AuthenticationType::from(auth_type as i32),
        auth_data,
    })
}

/// Mirrors `std::hash::Hash` over the device name as used by the original
/// firmware's `device_id` derivation: any stable 64-bit hash is acceptable
/// since the value only needs to be deterministic per device name, not
/// cryptographically strong.
fn stable_hash(name: &str) -> u64 {
    use std::hash::{Hash, Hasher};
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    name.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::test_double::MockCrypto;
    use serde_json::Value;

    #[test]
    fn get_info_is_idempotent_before_set_info() {
        let blob = LoginBlob::new("Living Room", MockCrypto::default());
        assert_eq!(blob.get_info().unwrap(), blob.get_info().unwrap());
    }

    #[test]
    fn get_info_exposes_96_byte_public_key_and_40_char_device_id() {
        let blob = LoginBlob::new("Kitchen", MockCrypto::default());
        let info: Value = serde_json::from_str(&blob.get_info().unwrap()).unwrap();
        let device_id = info["deviceID"].as_str().unwrap();
        assert_eq!(device_id.len(), 40);
        assert!(device_id.starts_with("142137fd329622137a149016"));

        let public_key = info["publicKey"].as_str().unwrap();
        let decoded = MockCrypto::default().base64_decode(public_key).unwrap();
        assert_eq!(decoded.len(), 96);
    }

    #[test]
    fn set_info_rejects_missing_fields() {
        let mut blob = LoginBlob::new("Kitchen", MockCrypto::default());
        let mut data = HashMap::new();
        data.insert("blob".to_string(), "AAAA".to_string());
        assert!(!blob.set_info(&data));
        assert!(blob.credentials().is_none());
    }

    #[test]
    fn set_info_rejects_bad_checksum() {
        let mut blob = LoginBlob::new("Kitchen", MockCrypto::default());
        let crypto = MockCrypto::default();

        let shared = [0x11u8; 96];
        let base_key = &crypto.sha1(&shared)[..16];
        let checksum_key = crypto.hmac_sha1(base_key, b"checksum");
        let encryption_key = &crypto.hmac_sha1(base_key, b"encryption")[..16];

        let iv = [0x22u8; 16];
        let mut ciphertext = b"deliberately-not-checksummed".to_vec();
        crypto.aes128_ctr_xcrypt(encryption_key, &iv, &mut ciphertext);
        let mut checksum = crypto.hmac_sha1(&checksum_key, &ciphertext).to_vec();
        *checksum.last_mut().unwrap() ^= 0xFF;

        let mut wire_blob = iv.to_vec();
        wire_blob.extend_from_slice(&ciphertext);
        wire_blob.extend_from_slice(&checksum);

        let mut data = HashMap::new();
        data.insert("userName".to_string(), "user".to_string());
        data.insert("blob".to_string(), crypto.base64_encode(&wire_blob));
        data.insert(
            "clientKey".to_string(),
            crypto.base64_encode(&[0x33u8; 96]),
        );
        data.insert("deviceName".to_string(), "Kitchen".to_string());

        assert!(!blob.set_info(&data));
        assert!(blob.credentials().is_none());
    }
}
