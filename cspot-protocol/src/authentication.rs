// Automatically generated rust module for 'authentication.proto' file

#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(unused_imports)]
#![allow(unknown_lints)]
#![allow(clippy::all)]
#![cfg_attr(rustfmt, rustfmt_skip)]


use quick_protobuf::{MessageRead, MessageWrite, BytesReader, Writer, WriterBackend, Result};
use quick_protobuf::sizeofs::*;
use super::*;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AuthenticationType {
    AUTHENTICATION_USER_PASS = 0,
    AUTHENTICATION_STORED_SPOTIFY_CREDENTIALS = 1,
    AUTHENTICATION_STORED_FACEBOOK_CREDENTIALS = 2,
    AUTHENTICATION_SPOTIFY_TOKEN = 3,
    AUTHENTICATION_FACEBOOK_TOKEN = 4,
}

impl Default for AuthenticationType {
    fn default() -> Self {
        AuthenticationType::AUTHENTICATION_USER_PASS
    }
}

impl From<i32> for AuthenticationType {
    fn from(i: i32) -> Self {
        match i {
            0 => AuthenticationType::AUTHENTICATION_USER_PASS,
            1 => AuthenticationType::AUTHENTICATION_STORED_SPOTIFY_CREDENTIALS,
            2 => AuthenticationType::AUTHENTICATION_STORED_FACEBOOK_CREDENTIALS,
            3 => AuthenticationType::AUTHENTICATION_SPOTIFY_TOKEN,
            4 => AuthenticationType::AUTHENTICATION_FACEBOOK_TOKEN,
            _ => Self::default(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CpuFamily {
    CPU_UNKNOWN = 0,
    CPU_X86 = 1,
    CPU_X86_64 = 2,
    CPU_ARM = 5,
}

impl Default for CpuFamily {
    fn default() -> Self {
        CpuFamily::CPU_UNKNOWN
    }
}

impl From<i32> for CpuFamily {
    fn from(i: i32) -> Self {
        match i {
            0 => CpuFamily::CPU_UNKNOWN,
            1 => CpuFamily::CPU_X86,
            2 => CpuFamily::CPU_X86_64,
            5 => CpuFamily::CPU_ARM,
            _ => Self::default(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Os {
    OS_UNKNOWN = 0,
    OS_WINDOWS = 1,
    OS_OSX = 2,
    OS_LINUX = 5,
    OS_ANDROID = 7,
}

impl Default for Os {
    fn default() -> Self {
        Os::OS_UNKNOWN
    }
}

impl From<i32> for Os {
    fn from(i: i32) -> Self {
        match i {
            0 => Os::OS_UNKNOWN,
            1 => Os::OS_WINDOWS,
            2 => Os::OS_OSX,
            5 => Os::OS_LINUX,
            7 => Os::OS_ANDROID,
            _ => Self::default(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AccountType {
    Spotify = 0,
    Facebook = 1,
}

impl Default for AccountType {
    fn default() -> Self {
        AccountType::Spotify
    }
}

impl From<i32> for AccountType {
    fn from(i: i32) -> Self {
        match i {
            0 => AccountType::Spotify,
            1 => AccountType::Facebook,
            _ => Self::default(),
        }
    }
}

#[derive(Debug, Default, PartialEq, Clone)]
pub struct LoginCredentials {
    pub username: Option<String>,
    pub typ: authentication::AuthenticationType,
    pub auth_data: Option<Vec<u8>>,
}

impl<'a> MessageRead<'a> for LoginCredentials {
    fn from_reader(r: &mut BytesReader, bytes: &'a [u8]) -> Result<Self> {
        let mut msg = Self::default();
        while !r.is_eof() {
            match r.next_tag(bytes) {
                Ok(82) => msg.username = Some(r.read_string(bytes)?.to_owned()),
                Ok(160) => msg.typ = r.read_enum(bytes)?,
                Ok(242) => msg.auth_data = Some(r.read_bytes(bytes)?.to_owned()),
                Ok(t) => { r.read_unknown(bytes, t)?; }
                Err(e) => return Err(e),
            }
        }
        Ok(msg)
    }
}

impl MessageWrite for LoginCredentials {
    fn get_size(&self) -> usize {
        0
        + self.username.as_ref().map_or(0, |m| 1 + sizeof_len((m).len()))
        + 2 + sizeof_varint(*(&self.typ) as u64)
        + self.auth_data.as_ref().map_or(0, |m| 2 + sizeof_len((m).len()))
    }

    fn write_message<W: WriterBackend>(&self, w: &mut Writer<W>) -> Result<()> {
        if let Some(ref s) = self.username { w.write_with_tag(82, |w| w.write_string(&**s))?; }
        w.write_with_tag(160, |w| w.write_enum(*&self.typ as i32))?;
        if let Some(ref s) = self.auth_data { w.write_with_tag(242, |w| w.write_bytes(&**s))?; }
        Ok(())
    }
}

#[derive(Debug, Default, PartialEq, Clone)]
pub struct SystemInfo {
    pub cpu_family: authentication::CpuFamily,
    pub os: authentication::Os,
    pub system_information_string: Option<String>,
    pub device_id: Option<String>,
}

impl<'a> MessageRead<'a> for SystemInfo {
    fn from_reader(r: &mut BytesReader, bytes: &'a [u8]) -> Result<Self> {
        let mut msg = Self::default();
        while !r.is_eof() {
            match r.next_tag(bytes) {
                Ok(80) => msg.cpu_family = r.read_enum(bytes)?,
                Ok(480) => msg.os = r.read_enum(bytes)?,
                Ok(722) => msg.system_information_string = Some(r.read_string(bytes)?.to_owned()),
                Ok(802) => msg.device_id = Some(r.read_string(bytes)?.to_owned()),
                Ok(t) => { r.read_unknown(bytes, t)?; }
                Err(e) => return Err(e),
            }
        }
        Ok(msg)
    }
}

impl MessageWrite for SystemInfo {
    fn get_size(&self) -> usize {
        0
        + 1 + sizeof_varint(*(&self.cpu_family) as u64)
        + 2 + sizeof_varint(*(&self.os) as u64)
        + self.system_information_string.as_ref().map_or(0, |m| 2 + sizeof_len((m).len()))
        + self.device_id.as_ref().map_or(0, |m| 2 + sizeof_len((m).len()))
    }

    fn write_message<W: WriterBackend>(&self, w: &mut Writer<W>) -> Result<()> {
        w.write_with_tag(80, |w| w.write_enum(*&self.cpu_family as i32))?;
        w.write_with_tag(480, |w| w.write_enum(*&self.os as i32))?;
        if let Some(ref s) = self.system_information_string { w.write_with_tag(722, |w| w.write_string(&**s))?; }
        if let Some(ref s) = self.device_id { w.write_with_tag(802, |w| w.write_string(&**s))?; }
        Ok(())
    }
}

#[derive(Debug, Default, PartialEq, Clone)]
pub struct ClientResponseEncrypted {
    pub login_credentials: authentication::LoginCredentials,
    pub system_info: authentication::SystemInfo,
    pub version_string: Option<String>,
}

impl<'a> MessageRead<'a> for ClientResponseEncrypted {
    fn from_reader(r: &mut BytesReader, bytes: &'a [u8]) -> Result<Self> {
        let mut msg = Self::default();
        while !r.is_eof() {
            match r.next_tag(bytes) {
                Ok(82) => msg.login_credentials = r.read_message::<authentication::LoginCredentials>(bytes)?,
                Ok(402) => msg.system_info = r.read_message::<authentication::SystemInfo>(bytes)?,
                Ok(562) => msg.version_string = Some(r.read_string(bytes)?.to_owned()),
                Ok(t) => { r.read_unknown(bytes, t)?; }
                Err(e) => return Err(e),
            }
        }
        Ok(msg)
    }
}

impl MessageWrite for ClientResponseEncrypted {
    fn get_size(&self) -> usize {
        0
        + 1 + sizeof_len((&self.login_credentials).get_size())
        + 2 + sizeof_len((&self.system_info).get_size())
        + self.version_string.as_ref().map_or(0, |m| 2 + sizeof_len((m).len()))
    }

    fn write_message<W: WriterBackend>(&self, w: &mut Writer<W>) -> Result<()> {
        w.write_with_tag(82, |w| w.write_message(&self.login_credentials))?;
        w.write_with_tag(402, |w| w.write_message(&self.system_info))?;
        if let Some(ref s) = self.version_string { w.write_with_tag(562, |w| w.write_string(&**s))?; }
        Ok(())
    }
}

#[derive(Debug, Default, PartialEq, Clone)]
pub struct APWelcome {
    pub canonical_username: String,
    pub account_type_logged_in: authentication::AccountType,
    pub reusable_auth_credentials_type: authentication::AuthenticationType,
    pub reusable_auth_credentials: Vec<u8>,
}

impl<'a> MessageRead<'a> for APWelcome {
    fn from_reader(r: &mut BytesReader, bytes: &'a [u8]) -> Result<Self> {
        let mut msg = Self::default();
        while !r.is_eof() {
            match r.next_tag(bytes) {
                Ok(82) => msg.canonical_username = r.read_string(bytes)?.to_owned(),
                Ok(160) => msg.account_type_logged_in = r.read_enum(bytes)?,
                Ok(240) => msg.reusable_auth_credentials_type = r.read_enum(bytes)?,
                Ok(322) => msg.reusable_auth_credentials = r.read_bytes(bytes)?.to_owned(),
                Ok(t) => { r.read_unknown(bytes, t)?; }
                Err(e) => return Err(e),
            }
        }
        Ok(msg)
    }
}

impl MessageWrite for APWelcome {
    fn get_size(&self) -> usize {
        0
        + 1 + sizeof_len((&self.canonical_username).len())
        + 2 + sizeof_varint(*(&self.account_type_logged_in) as u64)
        + 2 + sizeof_varint(*(&self.reusable_auth_credentials_type) as u64)
        + 2 + sizeof_len((&self.reusable_auth_credentials).len())
    }

    fn write_message<W: WriterBackend>(&self, w: &mut Writer<W>) -> Result<()> {
        w.write_with_tag(82, |w| w.write_string(&**&self.canonical_username))?;
        w.write_with_tag(160, |w| w.write_enum(*&self.account_type_logged_in as i32))?;
        w.write_with_tag(240, |w| w.write_enum(*&self.reusable_auth_credentials_type as i32))?;
        w.write_with_tag(322, |w| w.write_bytes(&**&self.reusable_auth_credentials))?;
        Ok(())
    }
}
