//! Version and build metadata
//!
//! The revision and build time are captured by `build.rs` at compile time;
//! outside a git checkout both fall back to `"unknown"`.

/// The package version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The git revision the binary was built from.
pub const REVISION: &str = env!("GOCOLONIZE_REVISION");

/// The UTC build timestamp.
pub const BUILD_TIME: &str = env!("GOCOLONIZE_BUILD_TIME");

/// Full version line for `--version` output.
pub fn long_version() -> String {
    format!("{VERSION} (revision {REVISION}, built {BUILD_TIME})")
}
