pub mod diffie_hellman;
pub mod shannon_codec;

use crate::{
    connection::shannon_codec::ShannonChannel,
    crypto::{CryptoPort, RealCrypto},
    error::Error,
    protocol::keyexchange::{
        APResponseMessage, BuildInfo, ClientHello, ClientResponsePlaintext, Cryptosuite,
        LoginCryptoDiffieHellmanHello, LoginCryptoDiffieHellmanResponse, LoginCryptoHelloUnion,
        LoginCryptoResponseUnion, Platform, Product,
    },
    util::{deserialize_protobuf, serialize_protobuf},
};
use byteorder::{ReadBytesExt, BE};
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha1::Sha1;
use std::io::{self, Read, Write};
use std::net::TcpStream;

/// URI of the access-point resolve endpoint.
const AP_RESOLVE_ENDPOINT: &str = "https://apresolve.spotify.com/";

/// Access point used if resolving fails.
const AP_FALLBACK: &str = "ap.spotify.com:443";

type HmacSha1 = Hmac<Sha1>;

/// Runs the access-point key-exchange handshake, producing a ready-to-use
/// `ShannonChannel` wrapping the connected stream. Generic over the
/// stream and crypto port so tests can replay a captured session over an
/// in-memory stream instead of a real socket.
pub struct ApHandshake;

impl ApHandshake {
    pub fn resolve_ap() -> Result<String, Error> {
        #[derive(Clone, Debug, Deserialize)]
        struct ApResolveData {
            ap_list: Vec<String>,
        }

        let config = crate::util::default_ureq_agent_builder(None).build();
        let agent = ureq::Agent::new_with_config(config);
        let mut response = agent
            .get(AP_RESOLVE_ENDPOINT)
            .call()
            .map_err(|_| Error::ResolveFailed)?;
        let data: ApResolveData = response
            .body_mut()
            .read_json()
            .map_err(|_| Error::ResolveFailed)?;
        data.ap_list.into_iter().next().ok_or(Error::NoAp)
    }

    pub fn resolve_ap_with_fallback() -> String {
        match Self::resolve_ap() {
            Ok(ap) => ap,
            Err(err) => {
                log::warn!("using AP fallback, error while resolving: {:?}", err);
                AP_FALLBACK.into()
            }
        }
    }

    pub fn connect(ap: &str) -> Result<ShannonChannel<TcpStream>, Error> {
        log::trace!("connecting to {}", ap);
        let stream = TcpStream::connect(ap)?;
        stream.set_read_timeout(Some(crate::util::RECEIVE_TIMEOUT))?;
        log::trace!("connected, exchanging keys");
        Self::exchange_keys(stream, RealCrypto::default())
    }

    pub fn exchange_keys<T, C>(mut stream: T, mut crypto: C) -> Result<ShannonChannel<T>, Error>
    where
        T: Read + Write,
        C: CryptoPort,
    {
        crypto.dh_init();

        log::trace!("sending client hello");
        let client_nonce = crypto.random_bytes(16);
        let hello = build_client_hello(crypto.dh_public(), client_nonce);
        let hello_packet = make_packet(&[0, 4], &hello);
        stream.write_all(&hello_packet)?;

        log::trace!("waiting for AP response");
        let apresp_packet = read_packet(&mut stream)?;
        let apresp: APResponseMessage = deserialize_protobuf(&apresp_packet[4..])?;

        let remote_key = apresp
            .challenge
            .ok_or(Error::HandshakeFailed)?
            .login_crypto_challenge
            .diffie_hellman
            .ok_or(Error::HandshakeFailed)?
            .gs;

        let shared = crypto.dh_shared(&remote_key);
        let (challenge_mac, send_key, recv_key) =
            compute_keys(&shared, &hello_packet, &apresp_packet);

        log::trace!("sending client response");
        let response = build_client_response_plaintext(challenge_mac);
        let response_packet = make_packet(&[], &response);
        stream.write_all(&response_packet)?;

        Ok(ShannonChannel::new(stream, &send_key, &recv_key))
    }
}

fn read_packet<T: Read>(stream: &mut T) -> io::Result<Vec<u8>> {
    let size = stream.read_u32::<BE>()?;
    let mut buf = vec![0u8; size as usize];
    buf[..4].copy_from_slice(&size.to_be_bytes());
    stream.read_exact(&mut buf[4..])?;
    Ok(buf)
}

fn make_packet(prefix: &[u8], data: &[u8]) -> Vec<u8> {
    let size = prefix.len() + 4 + data.len();
    let mut buf = Vec::with_capacity(size);
    buf.extend_from_slice(prefix);
    buf.extend_from_slice(&(size as u32).to_be_bytes());
    buf.extend_from_slice(data);
    buf
}

fn build_client_hello(public_key: Vec<u8>, client_nonce: Vec<u8>) -> Vec<u8> {
    let hello = ClientHello {
        build_info: BuildInfo {
            product: Product::PRODUCT_CLIENT,
            product_flags: vec![],
            platform: Platform::PLATFORM_LINUX_X86,
            version: 0x1080_0000_0000,
        },
        cryptosuites_supported: vec![Cryptosuite::CRYPTO_SUITE_SHANNON],
        login_crypto_hello: LoginCryptoHelloUnion {
            diffie_hellman: Some(LoginCryptoDiffieHellmanHello {
                gc: public_key,
                server_keys_known: 1,
            }),
        },
        client_nonce,
        padding: Some(vec![0x1e]),
        feature_set: None,
    };

    serialize_protobuf(&hello).expect("a ClientHello always serializes")
}

fn build_client_response_plaintext(challenge_mac: Vec<u8>) -> Vec<u8> {
    let response = ClientResponsePlaintext {
        login_crypto_response: LoginCryptoResponseUnion {
            diffie_hellman: Some(LoginCryptoDiffieHellmanResponse { hmac: challenge_mac }),
        },
    };

    serialize_protobuf(&response).expect("a ClientResponsePlaintext always serializes")
}

/// Derives the HMAC challenge and the send/recv Shannon keys from the DH
/// shared secret and the two handshake frames, per §4.5.4.
fn compute_keys(
    shared_secret: &[u8],
    hello_packet: &[u8],
    apresp_packet: &[u8],
) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
    let mut data = Vec::with_capacity(0x64);
    for i in 1..6u8 {
        let mut mac: HmacSha1 =
            HmacSha1::new_from_slice(shared_secret).expect("HMAC accepts a key of any size");
        mac.update(hello_packet);
        mac.update(apresp_packet);
        mac.update(&[i]);
        data.extend_from_slice(&mac.finalize().into_bytes());
    }

    let mut mac: HmacSha1 =
        HmacSha1::new_from_slice(&data[..0x14]).expect("HMAC accepts a key of any size");
    mac.update(hello_packet);
    mac.update(apresp_packet);
    let challenge_mac = mac.finalize().into_bytes().to_vec();

    (challenge_mac, data[0x14..0x34].to_vec(), data[0x34..0x54].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// S2: a fixed 96-byte shared secret and two handshake frames derive
    /// the same challenge MAC and send/recv keys as manually computing
    /// `HMAC-SHA1(shared, M || i)` per byte per §4.5.4/§8.
    #[test]
    fn compute_keys_matches_manual_hmac_derivation() {
        let shared = [0x01u8; 96];
        let hello_packet = b"ABCD".to_vec();
        let apresp_packet = b"EFGH".to_vec();

        let mut data = Vec::with_capacity(0x64);
        for i in 1..6u8 {
            let mut mac: HmacSha1 =
                HmacSha1::new_from_slice(&shared).expect("HMAC accepts a key of any size");
            mac.update(&hello_packet);
            mac.update(&apresp_packet);
            mac.update(&[i]);
            data.extend_from_slice(&mac.finalize().into_bytes());
        }
        let mut mac: HmacSha1 =
            HmacSha1::new_from_slice(&data[..0x14]).expect("HMAC accepts a key of any size");
        mac.update(&hello_packet);
        mac.update(&apresp_packet);
        let expected_challenge_mac = mac.finalize().into_bytes().to_vec();
        let expected_send_key = data[0x14..0x34].to_vec();
        let expected_recv_key = data[0x34..0x54].to_vec();

        let (challenge_mac, send_key, recv_key) =
            compute_keys(&shared, &hello_packet, &apresp_packet);

        assert_eq!(challenge_mac, expected_challenge_mac);
        assert_eq!(send_key, expected_send_key);
        assert_eq!(recv_key, expected_recv_key);
    }
}
