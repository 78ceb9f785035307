//! Provisioning record: the metadata blob provisioning writes and firmware
//! reads back at start-up.
//!
//! Binary format:
//! - version: 1 byte (u8)
//! - model: postcard varint (u32 wire code)
//! - device_id: postcard string (varint length + UTF-8 bytes)
//! - crc: CRC-32/ISO-HDLC over everything before it, 4 bytes little-endian
//!
//! Worst case: 1 (version) + 5 (u32 varint) + 1 (length varint, identity is at
//! most 64 bytes) + 64 (identity) + 4 (crc) = 75 bytes.

use crc::{CRC_32_ISO_HDLC, Crc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::device_config::{DeviceConfig, MAX_DEVICE_ID_LEN};
use crate::error::ConfigError;

/// Current record layout
pub const RECORD_VERSION: u8 = 1;

/// Upper bound on an encoded record, in bytes
pub const RECORD_MAX_LEN: usize = 1 + 5 + 1 + MAX_DEVICE_ID_LEN + 4;

/// Checksum shared with the openawair host tooling (zlib crc32)
pub static RECORD_CRC: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// Encoded provisioning record
pub type RecordBytes = heapless::Vec<u8, RECORD_MAX_LEN>;

#[derive(Serialize, Deserialize, Debug)]
struct RawRecord<'a> {
    version: u8,
    model: u32,
    device_id: &'a str,
}

fn encode_raw(raw: &RawRecord<'_>) -> Result<RecordBytes, ConfigError> {
    let mut buf = [0u8; RECORD_MAX_LEN];
    let used = postcard::ser_flavors::crc::to_slice_u32(raw, &mut buf, RECORD_CRC.digest())
        .map_err(|_| ConfigError::RecordTooLarge)?;

    let mut bytes = RecordBytes::new();
    bytes
        .extend_from_slice(used)
        .map_err(|_| ConfigError::RecordTooLarge)?;
    Ok(bytes)
}

/// Encode `config` as a provisioning record.
pub fn encode(config: &DeviceConfig) -> Result<RecordBytes, ConfigError> {
    encode_raw(&RawRecord {
        version: RECORD_VERSION,
        model: config.model().code(),
        device_id: config.device_id(),
    })
}

/// Decode and validate a provisioning record.
pub fn decode(bytes: &[u8]) -> Result<DeviceConfig, ConfigError> {
    let raw: RawRecord = postcard::de_flavors::crc::from_bytes_u32(bytes, RECORD_CRC.digest())
        .map_err(|e| {
            warn!("Provisioning record rejected: {:?}", e);
            ConfigError::CorruptRecord
        })?;

    if raw.version != RECORD_VERSION {
        warn!("Provisioning record has version {}", raw.version);
        return Err(ConfigError::UnsupportedRecordVersion(raw.version));
    }

    let config = DeviceConfig::from_raw(raw.model, raw.device_id).inspect_err(|e| {
        warn!("Provisioning record holds an invalid config: {}", e);
    })?;
    debug!("Provisioning record decoded ({} bytes)", bytes.len());
    Ok(config)
}
