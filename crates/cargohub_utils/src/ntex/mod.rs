#[cfg(feature = "ntex")]
pub mod middlewares;

#[cfg(feature = "ntex_test_client")]
pub mod test_client;
