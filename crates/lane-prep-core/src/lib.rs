//! Frame and mask primitives for lane-detection preprocessing.
//!
//! This crate is intentionally small. It holds the pixel buffer types shared
//! across the workspace and the keep/discard mask they are combined with; it
//! does *not* know about capture sources, calibration, or any detection
//! logic.

mod frame;
mod logger;
mod mask;

pub use frame::{Frame, FrameError, FrameView};
pub use mask::{Mask, MaskError, DISCARD, KEEP};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
