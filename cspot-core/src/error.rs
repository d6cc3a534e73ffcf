use std::{error, fmt, io};

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Timeout,
    ResolveFailed,
    NoAp,
    HandshakeFailed,
    BadMac,
    BadPadding,
    TruncatedBlob,
    MissingField(&'static str),
    BadBase64,
    AuthDeclined,
    UnexpectedCommand(u8),
    Protobuf(Box<dyn error::Error + Send + Sync>),
    Json(Box<dyn error::Error + Send + Sync>),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => err.fmt(f),
            Self::Timeout => write!(f, "timed out waiting for a response"),
            Self::ResolveFailed => write!(f, "access point resolve request failed"),
            Self::NoAp => write!(f, "access point resolve returned an empty list"),
            Self::HandshakeFailed => write!(f, "access point handshake failed"),
            Self::BadMac => write!(f, "MAC verification failed"),
            Self::BadPadding => write!(f, "bad padding while decrypting blob"),
            Self::TruncatedBlob => write!(f, "blob is shorter than expected"),
            Self::MissingField(name) => write!(f, "missing required field: {name}"),
            Self::BadBase64 => write!(f, "invalid base64 data"),
            Self::AuthDeclined => write!(f, "access point declined the login credentials"),
            Self::UnexpectedCommand(cmd) => {
                write!(f, "unexpected response command 0x{cmd:02x}")
            }
            Self::Protobuf(err) => err.fmt(f),
            Self::Json(err) => err.fmt(f),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        match err.kind() {
            io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => Error::Timeout,
            _ => Error::Io(err),
        }
    }
}

impl From<quick_protobuf::Error> for Error {
    fn from(err: quick_protobuf::Error) -> Error {
        Error::Protobuf(Box::new(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::Json(Box::new(err))
    }
}
