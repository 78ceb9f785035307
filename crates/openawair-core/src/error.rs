//! Error types for device configuration

use thiserror_no_std::Error;

/// Capacity of the truncated copy kept for unrecognised model names
pub const MODEL_NAME_ECHO_LEN: usize = 32;

/// Why a device identity was refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityFault {
    #[error("device identity is empty")]
    Empty,
    #[error("device identity is {len} bytes, longer than the provisioning slot")]
    TooLong { len: usize },
    #[error("device identity has a control character at byte {index}")]
    ControlCharacter { index: usize },
}

/// Errors raised while building a [`DeviceConfig`](crate::DeviceConfig)
///
/// All of these are fatal for bring-up. Firmware should halt or refuse to start
/// model-specific subsystems rather than continue with a half-valid config.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("model code {0} is not a known hardware variant")]
    InvalidModel(u32),
    #[error("model name \"{0}\" is not a known hardware variant")]
    UnknownModelName(heapless::String<MODEL_NAME_ECHO_LEN>),
    #[error("invalid device identity: {0}")]
    InvalidIdentity(IdentityFault),
    #[error("required setting {0} is not set")]
    MissingSetting(&'static str),
    #[error("provisioning record version {0} is not supported")]
    UnsupportedRecordVersion(u8),
    #[error("provisioning record is corrupt")]
    CorruptRecord,
    #[error("provisioning record does not fit its buffer")]
    RecordTooLarge,
}

impl ConfigError {
    /// Build an [`ConfigError::UnknownModelName`], keeping as much of `name` as fits.
    pub fn unknown_model_name(name: &str) -> Self {
        let mut echo = heapless::String::new();
        for c in name.chars() {
            if echo.push(c).is_err() {
                break;
            }
        }
        Self::UnknownModelName(echo)
    }
}

impl From<IdentityFault> for ConfigError {
    fn from(fault: IdentityFault) -> Self {
        Self::InvalidIdentity(fault)
    }
}
