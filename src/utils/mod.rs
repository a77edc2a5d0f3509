pub mod constants;
pub mod permissions;
pub mod session;
pub mod tracing;
