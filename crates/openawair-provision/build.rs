//! Bakes provisioning defaults from the workspace `.env` file into the binary.
//!
//! `OPENAWAIR_MODEL` and `OPENAWAIR_DEVICE_ID` set in the build environment, or
//! else found in `.env`, become compile-time values read with `option_env!`.

#[path = "src/env_file.rs"]
mod env_file;

use std::env;
use std::path::Path;

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("cargo sets CARGO_MANIFEST_DIR");
    let env_path = env_file::workspace_env_path(Path::new(&manifest_dir));
    println!("cargo:rerun-if-changed={}", env_path.display());

    let from_file = env_file::read_forwarded(&env_path)
        .unwrap_or_else(|e| panic!("cannot load {}: {e}", env_path.display()));

    for var in env_file::FORWARDED_VARS {
        println!("cargo:rerun-if-env-changed={var}");
        let value = env::var(var).ok().or_else(|| {
            from_file
                .iter()
                .find(|(key, _)| key == var)
                .map(|(_, value)| value.clone())
        });
        if let Some(value) = value {
            println!("cargo:rustc-env={var}={value}");
        }
    }
}
