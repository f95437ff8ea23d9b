#[cfg(feature = "logger")]
pub mod logger;

#[cfg(any(feature = "ntex", feature = "ntex_test_client"))]
pub mod ntex;

#[cfg(feature = "build_tools")]
pub mod build_tools;
