//! CS43L22 audio codec driver module.
//!
//! The register map lives in [`registers`]; the driver itself, with its
//! power/playback state machine, is in [`cs43l22`].

mod cs43l22;
pub(crate) mod registers;

pub use cs43l22::{Cs43l22, Error, OutputDevice};
