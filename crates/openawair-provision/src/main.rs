//! Host-side provisioning tool for openawair devices.
//!
//! Resolves the device configuration once, then hands it to whichever command
//! was asked for. Settings come from `OPENAWAIR_MODEL` / `OPENAWAIR_DEVICE_ID`
//! in the environment, falling back to the values baked in from `.env` at
//! build time.
//!
//! # Commands
//!
//! | Command         | Action                                              |
//! |-----------------|-----------------------------------------------------|
//! | `show`          | Log the resolved config and its telemetry identity  |
//! | `write [PATH]`  | Write the provisioning record (default `device_config.bin`) |
//! | `inspect PATH`  | Decode a provisioning record and log its contents   |
//!
//! Any configuration error is fatal: the tool exits non-zero and never falls
//! back to a default model.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use log::{error, info};
use thiserror_no_std::Error;

use openawair_core::settings::{DEVICE_ID_VAR, MODEL_VAR};
use openawair_core::{ConfigError, DeviceConfig, DeviceSettings, record};

#[cfg(test)]
mod env_file;

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Model baked in at build time
const BUILD_MODEL: Option<&str> = option_env!("OPENAWAIR_MODEL");

/// Device identity baked in at build time
const BUILD_DEVICE_ID: Option<&str> = option_env!("OPENAWAIR_DEVICE_ID");

/// Record path used by `write` when none is given
const DEFAULT_RECORD_PATH: &str = "device_config.bin";

#[derive(Error, Debug)]
enum ProvisionError {
    #[error("configuration rejected: {0}")]
    Config(ConfigError),
    #[error("{path}: {reason}")]
    Io { path: String, reason: std::io::Error },
    #[error("{0}")]
    Usage(String),
}

impl From<ConfigError> for ProvisionError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

/// Runtime value if present, else the build-time one.
fn pick<'a>(runtime: Option<&'a str>, baked: Option<&'a str>) -> Option<&'a str> {
    runtime.or(baked)
}

/// Build the one [`DeviceConfig`] this run works with.
///
/// `runtime` and `baked` are `(model, device_id)` pairs; runtime values win.
fn resolve_config(
    runtime: (Option<&str>, Option<&str>),
    baked: (Option<&str>, Option<&str>),
) -> Result<DeviceConfig, ConfigError> {
    let settings = DeviceSettings::from_optional(
        pick(runtime.0, baked.0),
        pick(runtime.1, baked.1),
    )?;
    DeviceConfig::try_from(settings)
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Show,
    Write(PathBuf),
    Inspect(PathBuf),
}

fn parse_command<I>(mut args: I) -> Result<Command, ProvisionError>
where
    I: Iterator<Item = String>,
{
    let command = match args.next().as_deref() {
        None | Some("show") => Command::Show,
        Some("write") => Command::Write(
            args.next()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RECORD_PATH)),
        ),
        Some("inspect") => match args.next() {
            Some(path) => Command::Inspect(PathBuf::from(path)),
            None => return Err(ProvisionError::Usage("inspect needs a record path".into())),
        },
        Some(other) => {
            return Err(ProvisionError::Usage(format!(
                "unknown command {other:?} (expected show, write or inspect)"
            )));
        }
    };

    if let Some(extra) = args.next() {
        return Err(ProvisionError::Usage(format!("unexpected argument {extra:?}")));
    }
    Ok(command)
}

/// Log what the rest of the firmware would see.
fn announce(config: &DeviceConfig) {
    info!(
        "Model: {} (code {})",
        config.model(),
        config.model().code()
    );
    info!("Device ID: {}", config.device_id());
    info!("Telemetry identity: {:?}", config.telemetry_identity());
}

fn write_record(config: &DeviceConfig, path: &Path) -> Result<(), ProvisionError> {
    let bytes = record::encode(config)?;
    fs::write(path, &bytes[..]).map_err(|reason| ProvisionError::Io {
        path: path.display().to_string(),
        reason,
    })?;
    info!("Wrote {} byte record to {}", bytes.len(), path.display());
    Ok(())
}

fn inspect_record(path: &Path) -> Result<(), ProvisionError> {
    let bytes = fs::read(path).map_err(|reason| ProvisionError::Io {
        path: path.display().to_string(),
        reason,
    })?;
    let config = record::decode(&bytes)?;
    info!("Record {} is valid", path.display());
    announce(&config);
    Ok(())
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn run() -> Result<(), ProvisionError> {
    let command = parse_command(env::args().skip(1))?;

    if let Command::Inspect(path) = &command {
        return inspect_record(path);
    }

    let model = env::var(MODEL_VAR).ok();
    let device_id = env::var(DEVICE_ID_VAR).ok();
    let config = resolve_config(
        (model.as_deref(), device_id.as_deref()),
        (BUILD_MODEL, BUILD_DEVICE_ID),
    )?;
    announce(&config);

    if let Command::Write(path) = &command {
        write_record(&config, path)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Starting openawair provisioning");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
