//! Generation orchestration for the SignalForge studio.
//!
//! [`Studio`] coordinates one generation attempt from submitted
//! parameters to an archived, displayable result, and owns all session
//! state (archive, active view, active design, generating flag).

mod error;
mod session;
mod studio;

pub use error::StudioError;
pub use session::SessionSnapshot;
pub use studio::Studio;
