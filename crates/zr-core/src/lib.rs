//! zr-core: shared foundation for zonereg.
//!
//! Contains:
//! - ids (compact IDs for buildings and zones)
//! - verbosity (diagnostic levels requested by zone declarations)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod verbosity;

pub use error::{ZrError, ZrResult};
pub use ids::*;
pub use verbosity::Verbosity;
