mod new_session;

pub use new_session::*;
