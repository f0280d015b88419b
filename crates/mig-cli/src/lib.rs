//! Library components of the `draft-overlay` binary.

pub mod logging;
pub mod pipeline;
