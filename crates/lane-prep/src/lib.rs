//! Image preprocessing for a lane-detection pipeline.
//!
//! Current scope:
//! - corner masking: black out the top-left/top-right wedges of a captured
//!   frame before the lane search runs,
//! - the typed pipeline configuration (capture flags, image size, lane
//!   thresholds, camera calibration, robot geometry) with JSON load/save.
//!
//! Frame and mask primitives live in `lane-prep-core`.

mod config;
mod io;
mod masker;

pub use config::{
    CameraCalibration, CaptureConfig, CaptureSource, ImageSize, LaneConfig, PipelineConfig,
    RobotConfig,
};
pub use io::ConfigIoError;
pub use masker::{CornerMaskParams, CornerMasker, CropError};

pub use lane_prep_core::{Frame, FrameError, FrameView, Mask, MaskError};
