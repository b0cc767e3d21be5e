//! Build metadata for a service: version, source revision, build time,
//! toolchain and platform.
//!
//! Values are baked in at compile time. Release pipelines set
//! `ADVERTISE_VERSION`, `ADVERTISE_COMMIT` and `ADVERTISE_BUILD_TIME`;
//! otherwise the build script falls back to the crate version, the local git
//! revision and the current UTC time.

#[cfg(test)]
mod git;
pub mod platform;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use platform::detect_platform;

/// Version string baked in at compile time.
pub const VERSION: &str = match option_env!("ADVERTISE_VERSION") {
    Some(v) => v,
    None => env!("CARGO_PKG_VERSION"),
};

/// Source revision, `"dev"` when unknown.
pub const GIT_COMMIT: &str = match option_env!("ADVERTISE_COMMIT") {
    Some(c) => c,
    None => "dev",
};

/// RFC 3339 build timestamp, empty when unknown.
pub const BUILD_TIME: &str = match option_env!("ADVERTISE_BUILD_TIME") {
    Some(t) => t,
    None => "",
};

/// `rustc --version` of the compiling toolchain.
pub const RUST_VERSION: &str = match option_env!("ADVERTISE_RUSTC_VERSION") {
    Some(v) => v,
    None => "unknown",
};

/// Build metadata for one service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfo {
    pub version: String,
    pub git_commit: String,
    pub build_time: String,
    pub rust_version: String,
    pub platform: String,
    pub service_name: String,
}

impl BuildInfo {
    /// Assembles the metadata of the current binary for `service_name`.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            version: VERSION.into(),
            git_commit: GIT_COMMIT.into(),
            build_time: BUILD_TIME.into(),
            rust_version: RUST_VERSION.into(),
            platform: detect_platform(),
            service_name: service_name.into(),
        }
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json(&self) -> String {
        // Plain string fields; serialization cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Service: {}", self.service_name)?;
        writeln!(f, "Version: {}", self.version)?;
        writeln!(f, "Git Commit: {}", self.git_commit)?;
        writeln!(f, "Build Time: {}", self.build_time)?;
        writeln!(f, "Rust Version: {}", self.rust_version)?;
        write!(f, "Platform: {}", self.platform)
    }
}

/// Prints the text rendering for `service_name` to stdout.
pub fn print(service_name: &str) {
    println!("{}", BuildInfo::new(service_name));
}

/// Prints the JSON rendering for `service_name` to stdout.
pub fn print_json(service_name: &str) {
    println!("{}", BuildInfo::new(service_name).to_json());
}
