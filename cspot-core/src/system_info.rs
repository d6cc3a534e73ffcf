/// Device ID advertised in the `ClientResponseEncrypted.system_info` field
/// sent during authentication.
pub const DEVICE_ID: &str = "cspot";

/// Version string reported alongside the login request.
pub const SW_VERSION: &str = "cspot-1.1";
