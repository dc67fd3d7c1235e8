#![forbid(unsafe_code)]

pub mod error;
pub mod profile;
pub mod sessions;

pub use quiz_core::Clock;

pub use error::{Action, FoldError, SessionError};
pub use profile::ProfileAggregator;
pub use sessions::{SessionController, SessionSnapshot, SessionState};
