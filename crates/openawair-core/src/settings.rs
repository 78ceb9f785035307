//! Provisioning settings as text, before they become a [`DeviceConfig`].
//!
//! The provisioning tool fills these from the environment or from values baked
//! in at build time.

use serde::{Deserialize, Serialize};

use crate::device_config::DeviceConfig;
use crate::error::ConfigError;
use crate::model::ModelKind;

/// Environment variable holding the model (code or name)
pub const MODEL_VAR: &str = "OPENAWAIR_MODEL";

/// Environment variable holding the device identity
pub const DEVICE_ID_VAR: &str = "OPENAWAIR_DEVICE_ID";

/// Provisioning settings as handed over by the build or the provisioning host,
/// before they are checked.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(bound(deserialize = "'de: 'a"))]
pub struct DeviceSettings<'a> {
    pub model: &'a str,
    pub device_id: &'a str,
}

impl<'a> DeviceSettings<'a> {
    /// Assemble settings from values that may be absent.
    pub fn from_optional(
        model: Option<&'a str>,
        device_id: Option<&'a str>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            model: model.ok_or(ConfigError::MissingSetting(MODEL_VAR))?,
            device_id: device_id.ok_or(ConfigError::MissingSetting(DEVICE_ID_VAR))?,
        })
    }
}

impl TryFrom<DeviceSettings<'_>> for DeviceConfig {
    type Error = ConfigError;

    fn try_from(settings: DeviceSettings<'_>) -> Result<Self, Self::Error> {
        let model: ModelKind = settings.model.parse()?;
        DeviceConfig::new(model, settings.device_id)
    }
}
