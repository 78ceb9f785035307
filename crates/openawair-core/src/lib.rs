//! Hardware-independent device configuration for openawair firmware
//!
//! Every firmware image carries one [`DeviceConfig`]: the hardware variant it
//! targets ([`ModelKind`]) and the identity of the unit it runs on. Bring-up
//! builds it once, from provisioning [`settings`] or a provisioning
//! [`record`], then passes it by reference to the subsystems that branch on
//! the model or tag their output with the identity.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets and desktop hosts (for the provisioning tool and tests).

#![no_std]

extern crate alloc;

pub mod device_config;
pub mod error;
pub mod model;
pub mod record;
pub mod settings;
pub mod telemetry;

pub use device_config::{DeviceConfig, MAX_DEVICE_ID_LEN};
pub use error::{ConfigError, IdentityFault};
pub use model::ModelKind;
pub use settings::DeviceSettings;
pub use telemetry::TelemetryIdentity;
