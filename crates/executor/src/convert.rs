//! Error conversion from backend error types.
//!
//! Every [`EngineError`] is a backend failure from the router's point of
//! view; the backend's message is preserved verbatim.

use crate::Error;
use tablegate_core::EngineError;

impl From<EngineError> for Error {
    fn from(err: EngineError) -> Self {
        Error::Backend {
            reason: err.to_string(),
        }
    }
}
