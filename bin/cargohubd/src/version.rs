/// ## Architecture of the processor
/// * x86_64
/// * aarch64
pub const ARCH: &str = env!("TARGET_ARCH");
/// Version of the binary, taken from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Commit the binary was built from
pub const COMMIT_ID: &str = env!("GIT_HASH");
/// ## Release channel of the binary
/// * stable
/// * nightly
pub const CHANNEL: &str = env!("CHANNEL");
