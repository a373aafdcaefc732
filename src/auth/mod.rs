pub mod session;

pub use session::{SessionState, SessionStatus, SessionUser};
