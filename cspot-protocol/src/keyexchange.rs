// Automatically generated rust module for 'keyexchange.proto' file

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
pub enum Platform {
    PLATFORM_WIN32_X86 = 0,
    PLATFORM_OSX_X86 = 1,
    PLATFORM_LINUX_X86 = 2,
    PLATFORM_IPHONE_ARM = 3,
    PLATFORM_ANDROID_ARM = 6,
    PLATFORM_LINUX_X86_64 = 8,
    PLATFORM_OSX_X86_64 = 9,
    PLATFORM_LINUX_ARM = 17,
}

impl Default for Platform {
    fn default() -> Self {
        Platform::PLATFORM_WIN32_X86
    }
}

impl From<i32> for Platform {
    fn from(i: i32) -> Self {
        match i {
            0 => Platform::PLATFORM_WIN32_X86,
            1 => Platform::PLATFORM_OSX_X86,
            2 => Platform::PLATFORM_LINUX_X86,
            3 => Platform::PLATFORM_IPHONE_ARM,
            6 => Platform::PLATFORM_ANDROID_ARM,
            8 => Platform::PLATFORM_LINUX_X86_64,
            9 => Platform::PLATFORM_OSX_X86_64,
            17 => Platform::PLATFORM_LINUX_ARM,
            _ => Self::default(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Product {
    PRODUCT_CLIENT = 0,
    PRODUCT_LIBSPOTIFY = 1,
    PRODUCT_MOBILE = 2,
    PRODUCT_PARTNER = 3,
}

impl Default for Product {
    fn default() -> Self {
        Product::PRODUCT_CLIENT
    }
}

impl From<i32> for Product {
    fn from(i: i32) -> Self {
        match i {
            0 => Product::PRODUCT_CLIENT,
            1 => Product::PRODUCT_LIBSPOTIFY,
            2 => Product::PRODUCT_MOBILE,
            3 => Product::PRODUCT_PARTNER,
            _ => Self::default(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ProductFlags {
    PRODUCT_FLAG_NONE = 0,
    PRODUCT_FLAG_DEV_BUILD = 1,
}

impl Default for ProductFlags {
    fn default() -> Self {
        ProductFlags::PRODUCT_FLAG_NONE
    }
}

impl From<i32> for ProductFlags {
    fn from(i: i32) -> Self {
        match i {
            0 => ProductFlags::PRODUCT_FLAG_NONE,
            1 => ProductFlags::PRODUCT_FLAG_DEV_BUILD,
            _ => Self::default(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Cryptosuite {
    CRYPTO_SUITE_SHANNON = 0,
    CRYPTO_SUITE_RC4_SHA1_HMAC = 1,
}

impl Default for Cryptosuite {
    fn default() -> Self {
        Cryptosuite::CRYPTO_SUITE_SHANNON
    }
}

impl From<i32> for Cryptosuite {
    fn from(i: i32) -> Self {
        match i {
            0 => Cryptosuite::CRYPTO_SUITE_SHANNON,
            1 => Cryptosuite::CRYPTO_SUITE_RC4_SHA1_HMAC,
            _ => Self::default(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorCode {
    ProtocolError = 0,
    TryAnotherAP = 2,
    BadConnectionId = 5,
    TravelRestriction = 9,
    PremiumAccountRequired = 11,
    BadCredentials = 12,
    CouldNotValidateCredentials = 13,
    AccountExists = 14,
    ExtraVerificationRequired = 15,
    InvalidAppKey = 16,
    ApplicationBanned = 17,
}

impl Default for ErrorCode {
    fn default() -> Self {
        ErrorCode::ProtocolError
    }
}

impl From<i32> for ErrorCode {
    fn from(i: i32) -> Self {
        match i {
            0 => ErrorCode::ProtocolError,
            2 => ErrorCode::TryAnotherAP,
            5 => ErrorCode::BadConnectionId,
            9 => ErrorCode::TravelRestriction,
            11 => ErrorCode::PremiumAccountRequired,
            12 => ErrorCode::BadCredentials,
            13 => ErrorCode::CouldNotValidateCredentials,
            14 => ErrorCode::AccountExists,
            15 => ErrorCode::ExtraVerificationRequired,
            16 => ErrorCode::InvalidAppKey,
            17 => ErrorCode::ApplicationBanned,
            _ => Self::default(),
        }
    }
}

#[derive(Debug, Default, PartialEq, Clone)]
pub struct BuildInfo {
    pub product: keyexchange::Product,
    pub product_flags: Vec<keyexchange::ProductFlags>,
    pub platform: keyexchange::Platform,
    pub version: u64,
}

impl<'a> MessageRead<'a> for BuildInfo {
    fn from_reader(r: &mut BytesReader, bytes: &'a [u8]) -> Result<Self> {
        let mut msg = Self::default();
        while !r.is_eof() {
            match r.next_tag(bytes) {
                Ok(80) => msg.product = r.read_enum(bytes)?,
                Ok(160) => msg.product_flags.push(r.read_enum(bytes)?),
                Ok(240) => msg.platform = r.read_enum(bytes)?,
                Ok(320) => msg.version = r.read_uint64(bytes)?,
                Ok(t) => { r.read_unknown(bytes, t)?; }
                Err(e) => return Err(e),
            }
        }
        Ok(msg)
    }
}

impl MessageWrite for BuildInfo {
    fn get_size(&self) -> usize {
        0
        + 1 + sizeof_varint(*(&self.product) as u64)
        + self.product_flags.iter().map(|s| 2 + sizeof_varint(*(s) as u64)).sum::<usize>()
        + 2 + sizeof_varint(*(&self.platform) as u64)
        + 2 + sizeof_varint(*(&self.version) as u64)
    }

    fn write_message<W: WriterBackend>(&self, w: &mut Writer<W>) -> Result<()> {
        w.write_with_tag(80, |w| w.write_enum(*&self.product as i32))?;
        for s in &self.product_flags { w.write_with_tag(160, |w| w.write_enum(*s as i32))?; }
        w.write_with_tag(240, |w| w.write_enum(*&self.platform as i32))?;
        w.write_with_tag(320, |w| w.write_uint64(*&self.version))?;
        Ok(())
    }
}

#[derive(Debug, Default, PartialEq, Clone)]
pub struct LoginCryptoDiffieHellmanHello {
    pub gc: Vec<u8>,
    pub server_keys_known: u32,
}

impl<'a> MessageRead<'a> for LoginCryptoDiffieHellmanHello {
    fn from_reader(r: &mut BytesReader, bytes: &'a [u8]) -> Result<Self> {
        let mut msg = Self::default();
        while !r.is_eof() {
            match r.next_tag(bytes) {
                Ok(82) => msg.gc = r.read_bytes(bytes)?.to_owned(),
                Ok(160) => msg.server_keys_known = r.read_uint32(bytes)?,
                Ok(t) => { r.read_unknown(bytes, t)?; }
                Err(e) => return Err(e),
            }
        }
        Ok(msg)
    }
}

impl MessageWrite for LoginCryptoDiffieHellmanHello {
    fn get_size(&self) -> usize {
        0
        + 1 + sizeof_len((&self.gc).len())
        + 2 + sizeof_varint(*(&self.server_keys_known) as u64)
    }

    fn write_message<W: WriterBackend>(&self, w: &mut Writer<W>) -> Result<()> {
        w.write_with_tag(82, |w| w.write_bytes(&**&self.gc))?;
        w.write_with_tag(160, |w| w.write_uint32(*&self.server_keys_known))?;
        Ok(())
    }
}

#[derive(Debug, Default, PartialEq, Clone)]
pub struct LoginCryptoHelloUnion {
    pub diffie_hellman: Option<keyexchange::LoginCryptoDiffieHellmanHello>,
}

impl<'a> MessageRead<'a> for LoginCryptoHelloUnion {
    fn from_reader(r: &mut BytesReader, bytes: &'a [u8]) -> Result<Self> {
        let mut msg = Self::default();
        while !r.is_eof() {
            match r.next_tag(bytes) {
                Ok(82) => msg.diffie_hellman = Some(r.read_message::<keyexchange::LoginCryptoDiffieHellmanHello>(bytes)?),
                Ok(t) => { r.read_unknown(bytes, t)?; }
                Err(e) => return Err(e),
            }
        }
        Ok(msg)
    }
}

impl MessageWrite for LoginCryptoHelloUnion {
    fn get_size(&self) -> usize {
        0
        + self.diffie_hellman.as_ref().map_or(0, |m| 1 + sizeof_len((m).get_size()))
    }

    fn write_message<W: WriterBackend>(&self, w: &mut Writer<W>) -> Result<()> {
        if let Some(ref s) = self.diffie_hellman { w.write_with_tag(82, |w| w.write_message(s))?; }
        Ok(())
    }
}

#[derive(Debug, Default, PartialEq, Clone)]
pub struct FeatureSet {
    pub autoupdate2: Option<bool>,
}

impl<'a> MessageRead<'a> for FeatureSet {
    fn from_reader(r: &mut BytesReader, bytes: &'a [u8]) -> Result<Self> {
        let mut msg = Self::default();
        while !r.is_eof() {
            match r.next_tag(bytes) {
                Ok(8) => msg.autoupdate2 = Some(r.read_bool(bytes)?),
                Ok(t) => { r.read_unknown(bytes, t)?; }
                Err(e) => return Err(e),
            }
        }
        Ok(msg)
    }
}

impl MessageWrite for FeatureSet {
    fn get_size(&self) -> usize {
        0
        + self.autoupdate2.as_ref().map_or(0, |m| 1 + sizeof_varint(*(m) as u64))
    }

    fn write_message<W: WriterBackend>(&self, w: &mut Writer<W>) -> Result<()> {
        if let Some(ref s) = self.autoupdate2 { w.write_with_tag(8, |w| w.write_bool(*s))?; }
        Ok(())
    }
}

#[derive(Debug, Default, PartialEq, Clone)]
pub struct ClientHello {
    pub build_info: keyexchange::BuildInfo,
    pub cryptosuites_supported: Vec<keyexchange::Cryptosuite>,
    pub login_crypto_hello: keyexchange::LoginCryptoHelloUnion,
    pub client_nonce: Vec<u8>,
    pub padding: Option<Vec<u8>>,
    pub feature_set: Option<keyexchange::FeatureSet>,
}

impl<'a> MessageRead<'a> for ClientHello {
    fn from_reader(r: &mut BytesReader, bytes: &'a [u8]) -> Result<Self> {
        let mut msg = Self::default();
        while !r.is_eof() {
            match r.next_tag(bytes) {
                Ok(82) => msg.build_info = r.read_message::<keyexchange::BuildInfo>(bytes)?,
                Ok(240) => msg.cryptosuites_supported.push(r.read_enum(bytes)?),
                Ok(402) => msg.login_crypto_hello = r.read_message::<keyexchange::LoginCryptoHelloUnion>(bytes)?,
                Ok(482) => msg.client_nonce = r.read_bytes(bytes)?.to_owned(),
                Ok(562) => msg.padding = Some(r.read_bytes(bytes)?.to_owned()),
                Ok(642) => msg.feature_set = Some(r.read_message::<keyexchange::FeatureSet>(bytes)?),
                Ok(t) => { r.read_unknown(bytes, t)?; }
                Err(e) => return Err(e),
            }
        }
        Ok(msg)
    }
}

impl MessageWrite for ClientHello {
    fn get_size(&self) -> usize {
        0
        + 1 + sizeof_len((&self.build_info).get_size())
        + self.cryptosuites_supported.iter().map(|s| 2 + sizeof_varint(*(s) as u64)).sum::<usize>()
        + 2 + sizeof_len((&self.login_crypto_hello).get_size())
        + 2 + sizeof_len((&self.client_nonce).len())
        + self.padding.as_ref().map_or(0, |m| 2 + sizeof_len((m).len()))
        + self.feature_set.as_ref().map_or(0, |m| 2 + sizeof_len((m).get_size()))
    }

    fn write_message<W: WriterBackend>(&self, w: &mut Writer<W>) -> Result<()> {
        w.write_with_tag(82, |w| w.write_message(&self.build_info))?;
        for s in &self.cryptosuites_supported { w.write_with_tag(240, |w| w.write_enum(*s as i32))?; }
        w.write_with_tag(402, |w| w.write_message(&self.login_crypto_hello))?;
        w.write_with_tag(482, |w| w.write_bytes(&**&self.client_nonce))?;
        if let Some(ref s) = self.padding { w.write_with_tag(562, |w| w.write_bytes(&**s))?; }
        if let Some(ref s) = self.feature_set { w.write_with_tag(642, |w| w.write_message(s))?; }
        Ok(())
    }
}

#[derive(Debug, Default, PartialEq, Clone)]
pub struct LoginCryptoDiffieHellmanChallenge {
    pub gs: Vec<u8>,
}

impl<'a> MessageRead<'a> for LoginCryptoDiffieHellmanChallenge {
    fn from_reader(r: &mut BytesReader, bytes: &'a [u8]) -> Result<Self> {
        let mut msg = Self::default();
        while !r.is_eof() {
            match r.next_tag(bytes) {
                Ok(82) => msg.gs = r.read_bytes(bytes)?.to_owned(),
                Ok(t) => { r.read_unknown(bytes, t)?; }
                Err(e) => return Err(e),
            }
        }
        Ok(msg)
    }
}

impl MessageWrite for LoginCryptoDiffieHellmanChallenge {
    fn get_size(&self) -> usize {
        0
        + 1 + sizeof_len((&self.gs).len())
    }

    fn write_message<W: WriterBackend>(&self, w: &mut Writer<W>) -> Result<()> {
        w.write_with_tag(82, |w| w.write_bytes(&**&self.gs))?;
        Ok(())
    }
}

#[derive(Debug, Default, PartialEq, Clone)]
pub struct LoginCryptoChallengeUnion {
    pub diffie_hellman: Option<keyexchange::LoginCryptoDiffieHellmanChallenge>,
}

impl<'a> MessageRead<'a> for LoginCryptoChallengeUnion {
    fn from_reader(r: &mut BytesReader, bytes: &'a [u8]) -> Result<Self> {
        let mut msg = Self::default();
        while !r.is_eof() {
            match r.next_tag(bytes) {
                Ok(82) => msg.diffie_hellman = Some(r.read_message::<keyexchange::LoginCryptoDiffieHellmanChallenge>(bytes)?),
                Ok(t) => { r.read_unknown(bytes, t)?; }
                Err(e) => return Err(e),
            }
        }
        Ok(msg)
    }
}

impl MessageWrite for LoginCryptoChallengeUnion {
    fn get_size(&self) -> usize {
        0
        + self.diffie_hellman.as_ref().map_or(0, |m| 1 + sizeof_len((m).get_size()))
    }

    fn write_message<W: WriterBackend>(&self, w: &mut Writer<W>) -> Result<()> {
        if let Some(ref s) = self.diffie_hellman { w.write_with_tag(82, |w| w.write_message(s))?; }
        Ok(())
    }
}

#[derive(Debug, Default, PartialEq, Clone)]
pub struct APChallenge {
    pub login_crypto_challenge: keyexchange::LoginCryptoChallengeUnion,
    pub server_nonce: Vec<u8>,
    pub padding: Option<Vec<u8>>,
}

impl<'a> MessageRead<'a> for APChallenge {
    fn from_reader(r: &mut BytesReader, bytes: &'a [u8]) -> Result<Self> {
        let mut msg = Self::default();
        while !r.is_eof() {
            match r.next_tag(bytes) {
                Ok(82) => msg.login_crypto_challenge = r.read_message::<keyexchange::LoginCryptoChallengeUnion>(bytes)?,
                Ok(402) => msg.server_nonce = r.read_bytes(bytes)?.to_owned(),
                Ok(482) => msg.padding = Some(r.read_bytes(bytes)?.to_owned()),
                Ok(t) => { r.read_unknown(bytes, t)?; }
                Err(e) => return Err(e),
            }
        }
        Ok(msg)
    }
}

impl MessageWrite for APChallenge {
    fn get_size(&self) -> usize {
        0
        + 1 + sizeof_len((&self.login_crypto_challenge).get_size())
        + 2 + sizeof_len((&self.server_nonce).len())
        + self.padding.as_ref().map_or(0, |m| 2 + sizeof_len((m).len()))
    }

    fn write_message<W: WriterBackend>(&self, w: &mut Writer<W>) -> Result<()> {
        w.write_with_tag(82, |w| w.write_message(&self.login_crypto_challenge))?;
        w.write_with_tag(402, |w| w.write_bytes(&**&self.server_nonce))?;
        if let Some(ref s) = self.padding { w.write_with_tag(482, |w| w.write_bytes(&**s))?; }
        Ok(())
    }
}

#[derive(Debug, Default, PartialEq, Clone)]
pub struct APLoginFailed {
    pub error_code: keyexchange::ErrorCode,
    pub retry_delay: Option<i32>,
}

impl<'a> MessageRead<'a> for APLoginFailed {
    fn from_reader(r: &mut BytesReader, bytes: &'a [u8]) -> Result<Self> {
        let mut msg = Self::default();
        while !r.is_eof() {
            match r.next_tag(bytes) {
                Ok(80) => msg.error_code = r.read_enum(bytes)?,
                Ok(160) => msg.retry_delay = Some(r.read_int32(bytes)?),
                Ok(t) => { r.read_unknown(bytes, t)?; }
                Err(e) => return Err(e),
            }
        }
        Ok(msg)
    }
}

impl MessageWrite for APLoginFailed {
    fn get_size(&self) -> usize {
        0
        + 1 + sizeof_varint(*(&self.error_code) as u64)
        + self.retry_delay.as_ref().map_or(0, |m| 2 + sizeof_varint(*(m) as u64))
    }

    fn write_message<W: WriterBackend>(&self, w: &mut Writer<W>) -> Result<()> {
        w.write_with_tag(80, |w| w.write_enum(*&self.error_code as i32))?;
        if let Some(ref s) = self.retry_delay { w.write_with_tag(160, |w| w.write_int32(*s))?; }
        Ok(())
    }
}

#[derive(Debug, Default, PartialEq, Clone)]
pub struct APResponseMessage {
    pub challenge: Option<keyexchange::APChallenge>,
    pub login_failed: Option<keyexchange::APLoginFailed>,
}

impl<'a> MessageRead<'a> for APResponseMessage {
    fn from_reader(r: &mut BytesReader, bytes: &'a [u8]) -> Result<Self> {
        let mut msg = Self::default();
        while !r.is_eof() {
            match r.next_tag(bytes) {
                Ok(82) => msg.challenge = Some(r.read_message::<keyexchange::APChallenge>(bytes)?),
                Ok(242) => msg.login_failed = Some(r.read_message::<keyexchange::APLoginFailed>(bytes)?),
                Ok(t) => { r.read_unknown(bytes, t)?; }
                Err(e) => return Err(e),
            }
        }
        Ok(msg)
    }
}

impl MessageWrite for APResponseMessage {
    fn get_size(&self) -> usize {
        0
        + self.challenge.as_ref().map_or(0, |m| 1 + sizeof_len((m).get_size()))
        + self.login_failed.as_ref().map_or(0, |m| 2 + sizeof_len((m).get_size()))
    }

    fn write_message<W: WriterBackend>(&self, w: &mut Writer<W>) -> Result<()> {
        if let Some(ref s) = self.challenge { w.write_with_tag(82, |w| w.write_message(s))?; }
        if let Some(ref s) = self.login_failed { w.write_with_tag(242, |w| w.write_message(s))?; }
        Ok(())
    }
}

#[derive(Debug, Default, PartialEq, Clone)]
pub struct LoginCryptoDiffieHellmanResponse {
    pub hmac: Vec<u8>,
}

impl<'a> MessageRead<'a> for LoginCryptoDiffieHellmanResponse {
    fn from_reader(r: &mut BytesReader, bytes: &'a [u8]) -> Result<Self> {
        let mut msg = Self::default();
        while !r.is_eof() {
            match r.next_tag(bytes) {
                Ok(82) => msg.hmac = r.read_bytes(bytes)?.to_owned(),
                Ok(t) => { r.read_unknown(bytes, t)?; }
                Err(e) => return Err(e),
            }
        }
        Ok(msg)
    }
}

impl MessageWrite for LoginCryptoDiffieHellmanResponse {
    fn get_size(&self) -> usize {
        0
        + 1 + sizeof_len((&self.hmac).len())
    }

    fn write_message<W: WriterBackend>(&self, w: &mut Writer<W>) -> Result<()> {
        w.write_with_tag(82, |w| w.write_bytes(&**&self.hmac))?;
        Ok(())
    }
}

#[derive(Debug, Default, PartialEq, Clone)]
pub struct LoginCryptoResponseUnion {
    pub diffie_hellman: Option<keyexchange::LoginCryptoDiffieHellmanResponse>,
}

impl<'a> MessageRead<'a> for LoginCryptoResponseUnion {
    fn from_reader(r: &mut BytesReader, bytes: &'a [u8]) -> Result<Self> {
        let mut msg = Self::default();
        while !r.is_eof() {
            match r.next_tag(bytes) {
                Ok(82) => msg.diffie_hellman = Some(r.read_message::<keyexchange::LoginCryptoDiffieHellmanResponse>(bytes)?),
                Ok(t) => { r.read_unknown(bytes, t)?; }
                Err(e) => return Err(e),
            }
        }
        Ok(msg)
    }
}

impl MessageWrite for LoginCryptoResponseUnion {
    fn get_size(&self) -> usize {
        0
        + self.diffie_hellman.as_ref().map_or(0, |m| 1 + sizeof_len((m).get_size()))
    }

    fn write_message<W: WriterBackend>(&self, w: &mut Writer<W>) -> Result<()> {
        if let Some(ref s) = self.diffie_hellman { w.write_with_tag(82, |w| w.write_message(s))?; }
        Ok(())
    }
}

#[derive(Debug, Default, PartialEq, Clone)]
pub struct ClientResponsePlaintext {
    pub login_crypto_response: keyexchange::LoginCryptoResponseUnion,
}

impl<'a> MessageRead<'a> for ClientResponsePlaintext {
    fn from_reader(r: &mut BytesReader, bytes: &'a [u8]) -> Result<Self> {
        let mut msg = Self::default();
        while !r.is_eof() {
            match r.next_tag(bytes) {
                Ok(82) => msg.login_crypto_response = r.read_message::<keyexchange::LoginCryptoResponseUnion>(bytes)?,
                Ok(t) => { r.read_unknown(bytes, t)?; }
                Err(e) => return Err(e),
            }
        }
        Ok(msg)
    }
}

impl MessageWrite for ClientResponsePlaintext {
    fn get_size(&self) -> usize {
        0
        + 1 + sizeof_len((&self.login_crypto_response).get_size())
    }

    fn write_message<W: WriterBackend>(&self, w: &mut Writer<W>) -> Result<()> {
        w.write_with_tag(82, |w| w.write_message(&self.login_crypto_response))?;
        Ok(())
    }
}
