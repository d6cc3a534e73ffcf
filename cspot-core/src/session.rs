//! Orchestrates the handshake, wraps the resulting channel, and runs the
//! single login exchange that authenticates a `LoginBlob`'s credentials
//! against an access point.

use crate::{
    connection::{
        shannon_codec::{ShannonChannel, ShannonMessage},
        ApHandshake,
    },
    error::Error,
    login_blob::LoginCredentials,
    protocol::authentication::{
        APWelcome, ClientResponseEncrypted, CpuFamily, LoginCredentials as WireCredentials, Os,
        SystemInfo,
    },
    system_info::{DEVICE_ID, SW_VERSION},
    util::{deserialize_protobuf, serialize_protobuf},
};
use std::io::{Read, Write};
use std::net::TcpStream;

/// Owns the `ShannonChannel` exclusively once a handshake has completed.
/// Generic over the stream so tests can replay a captured session over an
/// in-memory pipe instead of a real socket.
pub struct Session<T> {
    channel: ShannonChannel<T>,
}

impl Session<TcpStream> {
    /// Resolves an access point (falling back to a well-known host on
    /// failure) and runs the key-exchange handshake against it.
    pub fn connect() -> Result<Self, Error> {
        let ap = ApHandshake::resolve_ap_with_fallback();
        let channel = ApHandshake::connect(&ap)?;
        Ok(Self { channel })
    }
}

impl<T> Session<T>
where
    T: Read + Write,
{
    pub fn from_channel(channel: ShannonChannel<T>) -> Self {
        Self { channel }
    }

    pub fn send_seq(&self) -> u32 {
        self.channel.send_seq()
    }

    pub fn recv_seq(&self) -> u32 {
        self.channel.recv_seq()
    }

    pub fn authenticate(&mut self, credentials: &LoginCredentials) -> Result<Vec<u8>, Error> {
        let request = ClientResponseEncrypted {
            login_credentials: WireCredentials {
                username: Some(credentials.username.clone()),
                typ: credentials.auth_type,
                auth_data: Some(credentials.auth_data.clone()),
            },
            system_info: SystemInfo {
                cpu_family: CpuFamily::CPU_UNKNOWN,
                os: Os::OS_UNKNOWN,
                system_information_string: Some("cspot-player".to_string()),
                device_id: Some(DEVICE_ID.to_string()),
            },
            version_string: Some(SW_VERSION.to_string()),
        };

        let payload = serialize_protobuf(&request)?;
        self.channel.send(ShannonMessage::LOGIN, &payload)?;

        let response = self.channel.receive()?;
        match response.cmd {
            ShannonMessage::AP_WELCOME => {
                let welcome: APWelcome = deserialize_protobuf(&response.payload)?;
                Ok(welcome.reusable_auth_credentials)
            }
            ShannonMessage::AUTH_FAILURE => Err(Error::AuthDeclined),
            other => Err(Error::UnexpectedCommand(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::authentication::AuthenticationType;
    use std::collections::VecDeque;
    use std::io::{self};
    use std::sync::{Arc, Mutex};

    /// Same loopback pipe shape as `shannon_codec`'s tests: independent
    /// read/write ends over a shared byte queue, enough to let a test
    /// canned-response channel and a `Session` channel talk to each other.
    #[derive(Clone)]
    struct LoopbackPipe {
        buf: Arc<Mutex<VecDeque<u8>>>,
    }

    impl LoopbackPipe {
        fn new() -> Self {
            Self {
                buf: Arc::new(Mutex::new(VecDeque::new())),
            }
        }
    }

    impl Read for LoopbackPipe {
        fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
            let mut buf = self.buf.lock().unwrap();
            let n = out.len().min(buf.len());
            for slot in out.iter_mut().take(n) {
                *slot = buf.pop_front().unwrap();
            }
            Ok(n)
        }
    }

    impl Write for LoopbackPipe {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.buf.lock().unwrap().extend(data.iter().copied());
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn canned_credentials() -> LoginCredentials {
        LoginCredentials {
            username: "user".to_string(),
            auth_type: AuthenticationType::AUTHENTICATION_STORED_SPOTIFY_CREDENTIALS,
            auth_data: b"stored-token".to_vec(),
        }
    }

    /// S5: a mock AP replays a captured `AP_WELCOME` frame on the first
    /// receive. `authenticate` returns the reusable credentials and both
    /// sequence counters read back at 1.
    #[test]
    fn authenticate_against_replayed_ap_welcome_advances_sequences() {
        let key_a = [0x05u8; 32];
        let key_b = [0x06u8; 32];
        let pipe = LoopbackPipe::new();

        let mut ap_side = ShannonChannel::new(pipe.clone(), &key_b, &key_a);
        let welcome = APWelcome {
            reusable_auth_credentials: b"reusable-blob".to_vec(),
            ..Default::default()
        };
        let welcome_payload = serialize_protobuf(&welcome).unwrap();
        ap_side.send(ShannonMessage::AP_WELCOME, &welcome_payload).unwrap();

        let client_channel = ShannonChannel::new(pipe, &key_a, &key_b);
        let mut session = Session::from_channel(client_channel);

        let reusable = session.authenticate(&canned_credentials()).unwrap();
        assert_eq!(reusable, b"reusable-blob");
        assert_eq!(session.send_seq(), 1);
        assert_eq!(session.recv_seq(), 1);
    }

    /// S6: a mock AP returns `AUTH_FAILURE` on the first receive;
    /// `authenticate` surfaces `Error::AuthDeclined`.
    #[test]
    fn authenticate_against_auth_failure_is_declined() {
        let key_a = [0x07u8; 32];
        let key_b = [0x08u8; 32];
        let pipe = LoopbackPipe::new();

        let mut ap_side = ShannonChannel::new(pipe.clone(), &key_b, &key_a);
        ap_side.send(ShannonMessage::AUTH_FAILURE, &[]).unwrap();

        let client_channel = ShannonChannel::new(pipe, &key_a, &key_b);
        let mut session = Session::from_channel(client_channel);

        assert!(matches!(
            session.authenticate(&canned_credentials()),
            Err(Error::AuthDeclined)
        ));
    }
}
