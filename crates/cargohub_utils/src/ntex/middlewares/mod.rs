/// Middlewares shared by the cargohub http services.

mod serialize_error;
pub use serialize_error::SerializeError;

mod session_guard;
pub use session_guard::SessionGuard;
