//! The device configuration record read by every subsystem at start-up.
//!
//! A [`DeviceConfig`] is built once during single-threaded bring-up and is
//! read-only afterwards. Subsystems receive it by reference; there is no
//! global instance.

use alloc::string::String;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, IdentityFault};
use crate::model::ModelKind;

/// Longest device identity accepted, in bytes (size of the provisioning slot)
pub const MAX_DEVICE_ID_LEN: usize = 64;

/// Hardware variant plus the identity of the physical unit
///
/// The identity is copied at construction, so the record never depends on the
/// lifetime of whatever buffer provisioning handed over.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "UncheckedDeviceConfig")]
pub struct DeviceConfig {
    model: ModelKind,
    device_id: String,
}

impl DeviceConfig {
    /// Build a config for `model`, checking that `device_id` is a usable identity.
    pub fn new(model: ModelKind, device_id: &str) -> Result<Self, ConfigError> {
        check_device_id(device_id)?;
        debug!("Device config: {} ({})", device_id, model);
        Ok(Self {
            model,
            device_id: String::from(device_id),
        })
    }

    /// Build a config from untrusted metadata, where the model is still a raw code.
    ///
    /// The model is checked before the identity.
    pub fn from_raw(raw_model: u32, device_id: &str) -> Result<Self, ConfigError> {
        let model = ModelKind::try_from(raw_model)?;
        Self::new(model, device_id)
    }

    /// Hardware variant this firmware build targets
    pub fn model(&self) -> ModelKind {
        self.model
    }

    /// Identity of this unit, exactly as provisioned
    pub fn device_id(&self) -> &str {
        &self.device_id
    }
}

/// Reject identities that cannot name a unit. The identity is never rewritten.
pub(crate) fn check_device_id(device_id: &str) -> Result<(), IdentityFault> {
    if device_id.is_empty() {
        return Err(IdentityFault::Empty);
    }
    if device_id.len() > MAX_DEVICE_ID_LEN {
        return Err(IdentityFault::TooLong {
            len: device_id.len(),
        });
    }
    if let Some((index, _)) = device_id.char_indices().find(|(_, c)| c.is_control()) {
        return Err(IdentityFault::ControlCharacter { index });
    }
    Ok(())
}

/// Wire shape of [`DeviceConfig`] before validation
#[derive(Deserialize)]
struct UncheckedDeviceConfig {
    model: ModelKind,
    device_id: String,
}

impl TryFrom<UncheckedDeviceConfig> for DeviceConfig {
    type Error = ConfigError;

    fn try_from(raw: UncheckedDeviceConfig) -> Result<Self, Self::Error> {
        check_device_id(&raw.device_id)?;
        Ok(Self {
            model: raw.model,
            device_id: raw.device_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_glow_c_round_trip() {
        let config = DeviceConfig::new(ModelKind::GlowC, "AWR-0001").unwrap();
        assert_eq!(config.model(), ModelKind::GlowC);
        assert_eq!(config.device_id(), "AWR-0001");
    }

    #[test]
    fn test_element_round_trip() {
        let config = DeviceConfig::new(ModelKind::Element, "AWR-0002").unwrap();
        assert_eq!(config.model(), ModelKind::Element);
        assert_eq!(config.device_id(), "AWR-0002");
    }

    #[test]
    fn test_from_raw_codes() {
        assert_eq!(
            DeviceConfig::from_raw(1, "AWR-0001").unwrap().model(),
            ModelKind::GlowC
        );
        assert_eq!(
            DeviceConfig::from_raw(2, "AWR-0001").unwrap().model(),
            ModelKind::Element
        );
        assert_eq!(
            DeviceConfig::from_raw(3, "AWR-0001"),
            Err(ConfigError::InvalidModel(3))
        );
    }

    #[test]
    fn test_from_raw_checks_model_first() {
        assert_eq!(DeviceConfig::from_raw(0, ""), Err(ConfigError::InvalidModel(0)));
    }

    #[test]
    fn test_empty_identity_rejected() {
        assert_eq!(
            DeviceConfig::new(ModelKind::GlowC, ""),
            Err(ConfigError::InvalidIdentity(IdentityFault::Empty))
        );
    }

    #[test]
    fn test_long_identity_rejected() {
        let id = "A".repeat(MAX_DEVICE_ID_LEN + 1);
        assert_eq!(
            DeviceConfig::new(ModelKind::Element, &id),
            Err(ConfigError::InvalidIdentity(IdentityFault::TooLong {
                len: MAX_DEVICE_ID_LEN + 1
            }))
        );

        let id = "A".repeat(MAX_DEVICE_ID_LEN);
        assert!(DeviceConfig::new(ModelKind::Element, &id).is_ok());
    }

    #[test]
    fn test_control_character_rejected() {
        assert_eq!(
            DeviceConfig::new(ModelKind::GlowC, "AWR\n0001"),
            Err(ConfigError::InvalidIdentity(IdentityFault::ControlCharacter {
                index: 3
            }))
        );
    }

    #[test]
    fn test_identity_not_normalized() {
        let config = DeviceConfig::new(ModelKind::GlowC, " awr-0001 ").unwrap();
        assert_eq!(config.device_id(), " awr-0001 ");
    }

    #[test]
    fn test_identity_owned_copy() {
        let mut buffer = "AWR-0003".to_string();
        let config = DeviceConfig::new(ModelKind::Element, &buffer).unwrap();
        buffer.clear();
        assert_eq!(config.device_id(), "AWR-0003");
    }

    #[test]
    fn test_accessors_stable() {
        let config = DeviceConfig::new(ModelKind::Element, "AWR-0004").unwrap();
        let first = config.device_id().as_ptr();
        for _ in 0..3 {
            assert_eq!(config.device_id(), "AWR-0004");
            assert_eq!(config.model(), ModelKind::Element);
        }
        assert_eq!(config.device_id().as_ptr(), first);
    }

    #[test]
    fn test_shareable_between_threads() {
        assert_send_sync::<DeviceConfig>();
    }

    #[test]
    fn test_serde_shape() {
        let config = DeviceConfig::new(ModelKind::GlowC, "AWR-0001").unwrap();
        assert_eq!(
            serde_json::to_string(&config).unwrap(),
            r#"{"model":1,"device_id":"AWR-0001"}"#
        );
        let back: DeviceConfig =
            serde_json::from_str(r#"{"model":2,"device_id":"AWR-0002"}"#).unwrap();
        assert_eq!(back, DeviceConfig::new(ModelKind::Element, "AWR-0002").unwrap());
    }

    #[test]
    fn test_serde_validates() {
        assert!(serde_json::from_str::<DeviceConfig>(r#"{"model":7,"device_id":"AWR-1"}"#).is_err());
        assert!(serde_json::from_str::<DeviceConfig>(r#"{"model":1,"device_id":""}"#).is_err());
    }
}
