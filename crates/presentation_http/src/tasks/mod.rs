//! Background tasks for the HTTP presentation layer

mod session_expiry;

pub use session_expiry::spawn_session_expiry_task;
