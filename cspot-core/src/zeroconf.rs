//! The local HTTP/mDNS credential hand-off surface a Spotify Connect
//! controller talks to before a `Session` ever opens a TCP connection.

use crate::crypto::CryptoPort;
use crate::error::Error;
use crate::login_blob::LoginBlob;
use crate::util::decode_query;
use std::io::Read;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

pub const DEFAULT_PORT: u16 = 7864;

const SERVICE_TYPE: &str = "_spotify-connect._tcp.local.";

/// Collects credentials handed over by a controller app and exposes the
/// `/spotify_info` and `/close` endpoints the mDNS-advertised service
/// points controllers at.
pub struct ZeroConfEndpoint<C> {
    device_name: String,
    login_blob: Arc<Mutex<LoginBlob<C>>>,
    auth_ready: Arc<AtomicBool>,
    closed: Arc<AtomicBool>,
}

impl<C: CryptoPort> ZeroConfEndpoint<C> {
    pub fn new(device_name: impl Into<String>, crypto: C) -> Self {
        let device_name = device_name.into();
        let login_blob = LoginBlob::new(device_name.clone(), crypto);
        Self {
            device_name,
            login_blob: Arc::new(Mutex::new(login_blob)),
            auth_ready: Arc::new(AtomicBool::new(false)),
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_auth_ready(&self) -> bool {
        self.auth_ready.load(Ordering::SeqCst)
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Once `auth_ready` flips, the decoded credentials are available here.
    pub fn take_credentials(&self) -> Option<crate::login_blob::LoginCredentials> {
        self.login_blob.lock().unwrap().credentials().cloned()
    }

    /// Advertises the service over mDNS. Registration failures are logged
    /// and otherwise non-fatal: controllers can still find the device via
    /// manual IP entry.
    pub fn advertise(&self, port: u16) -> Result<mdns_sd::ServiceDaemon, Error> {
        let daemon = mdns_sd::ServiceDaemon::new().map_err(|_| Error::HandshakeFailed)?;
        let hostname = format!("{}.local.", self.device_name.replace(' ', "-"));

        let mut properties = std::collections::HashMap::new();
        properties.insert("VERSION".to_string(), "1.0".to_string());
        properties.insert("CPath".to_string(), "/spotify_info".to_string());
        properties.insert("Stack".to_string(), "SP".to_string());

        // Empty host IP lets `mdns-sd` enumerate and advertise on every
        // local interface rather than pinning to one.
        let service = mdns_sd::ServiceInfo::new(
            SERVICE_TYPE,
            &self.device_name,
            &hostname,
            "",
            port,
            Some(properties),
        )
        .map_err(|_| Error::HandshakeFailed)?;

        daemon
            .register(service)
            .map_err(|_| Error::HandshakeFailed)?;
        Ok(daemon)
    }

    /// Runs the blocking HTTP accept loop until `/close` is hit or the
    /// server is torn down. Dispatches each request on the caller's
    /// thread, matching the single-threaded scheduling model described for
    /// the core.
    pub fn run(&self, server: &tiny_http::Server) -> Result<(), Error> {
        for mut request in server.incoming_requests() {
            if self.closed.load(Ordering::SeqCst) {
                break;
            }

            let url = request.url().to_string();
            let method = request.method().clone();

            let response = match (&method, url.as_str()) {
                (tiny_http::Method::Get, "/spotify_info") => self.handle_get_info(),
                (tiny_http::Method::Post, "/spotify_info") => {
                    let mut body = String::new();
                    request
                        .as_reader()
                        .read_to_string(&mut body)
                        .map_err(Error::from)?;
                    self.handle_set_info(&body)
                }
                (tiny_http::Method::Get, "/close") => {
                    self.closed.store(true, Ordering::SeqCst);
                    ok_empty()
                }
                _ => not_found(),
            };

            let _ = request.respond(response);

            if self.closed.load(Ordering::SeqCst) {
                break;
            }
        }
        Ok(())
    }

    fn handle_get_info(&self) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
        match self.login_blob.lock().unwrap().get_info() {
            Ok(body) => json_response(200, body),
            Err(_) => json_response(500, "{}".to_string()),
        }
    }

    fn handle_set_info(&self, body: &str) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
        let form = decode_query(body);
        let ok = self.login_blob.lock().unwrap().set_info(&form);
        self.auth_ready.store(ok, Ordering::SeqCst);
        // The controller never learns whether the blob actually decoded;
        // it only sees `auth_ready` stop flipping.
        json_response(200, r#"{"status":101,"spotifyError":0,"statusString":"ERROR-OK"}"#.to_string())
    }
}

fn json_response(status: u16, body: String) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    let header = tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
        .expect("static header is always valid");
    tiny_http::Response::from_string(body)
        .with_status_code(status)
        .with_header(header)
}

fn ok_empty() -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    tiny_http::Response::from_string(String::new()).with_status_code(200)
}

fn not_found() -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    tiny_http::Response::from_string(String::new()).with_status_code(404)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::test_double::MockCrypto;

    #[test]
    fn get_before_post_exposes_device_id_and_public_key() {
        let endpoint = ZeroConfEndpoint::new("Test Speaker", MockCrypto::default());
        let body = endpoint.login_blob.lock().unwrap().get_info().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed["deviceID"].as_str().unwrap().len(), 40);
        assert!(!endpoint.is_auth_ready());
    }

    #[test]
    fn post_with_missing_fields_never_flips_auth_ready() {
        let endpoint = ZeroConfEndpoint::new("Test Speaker", MockCrypto::default());
        endpoint.handle_set_info("blob=AAAA");
        assert!(!endpoint.is_auth_ready());
    }
}
