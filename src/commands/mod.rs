//! Command implementations for seobrief CLI

mod analyze;
mod misc;
mod serve;

pub use analyze::*;
pub use misc::*;
pub use serve::*;
