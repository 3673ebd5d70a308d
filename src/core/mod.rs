//! Document identifiers, rejection reasons, messages, and shared helpers.
//!
//! Everything here is independent of any single document scheme. The
//! scheme-specific validators live in `identity`, `banking` and `formats`.

pub mod checksum;
mod document;
mod error;
mod messages;
pub mod normalize;

pub use document::*;
pub use error::*;
pub use messages::*;
