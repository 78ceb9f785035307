//! Identity tag carried by every telemetry payload

use serde::Serialize;

use crate::device_config::DeviceConfig;

/// Borrowed view of the fields a telemetry payload uses to name its source
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryIdentity<'a> {
    pub device_id: &'a str,
    pub model: &'static str,
}

impl DeviceConfig {
    /// Identity tag for outgoing telemetry
    pub fn telemetry_identity(&self) -> TelemetryIdentity<'_> {
        TelemetryIdentity {
            device_id: self.device_id(),
            model: self.model().telemetry_name(),
        }
    }
}
