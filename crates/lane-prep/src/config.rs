//! Typed pipeline configuration.
//!
//! Capture flags, image size, lane-geometry thresholds, camera calibration
//! and robot geometry as one explicit schema. A [`PipelineConfig`] is built
//! once at startup and passed by reference to whoever needs it; there is no
//! ambient global state.

use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::masker::CornerMaskParams;

/// Where captured frames come from. Data only; source selection logic lives
/// in the capture layer, not here.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureSource {
    Camera,
    #[default]
    Video,
    Simulink,
}

/// Capture and output flags.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CaptureConfig {
    #[serde(default)]
    pub source: CaptureSource,
    /// Video file read when the source is [`CaptureSource::Video`], and
    /// written when `write_video` is set.
    pub video_file: PathBuf,
    /// Draw the detected lane onto the output frames.
    pub visualize: bool,
    /// Write the processed stream back to `video_file` siblings.
    pub write_video: bool,
    /// Log the per-frame processing time.
    pub log_frame_time: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            source: CaptureSource::Video,
            video_file: PathBuf::from("output.avi"),
            visualize: true,
            write_video: true,
            log_frame_time: false,
        }
    }
}

/// Capture frame size in pixels.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ImageSize {
    fn default() -> Self {
        Self {
            width: 224,
            height: 224,
        }
    }
}

/// Lane-geometry thresholds consumed by the downstream lane search.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct LaneConfig {
    /// Lane width in the image-plane units of the lane model.
    pub lane_width: f64,
    /// Smaller values widen the search band for boundary points.
    pub boundary_thresh: f64,
    /// Horizon row in image pixels; negative values sit above the frame.
    pub horizon: f64,
    /// Number of frames over which the lane is smoothed with a moving
    /// average.
    pub filter_strength: u32,
}

impl Default for LaneConfig {
    fn default() -> Self {
        Self {
            lane_width: 0.212,
            boundary_thresh: 1.8,
            horizon: -130.1,
            filter_strength: 1,
        }
    }
}

/// Camera intrinsics and distortion from the bench calibration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CameraCalibration {
    /// Calibrated pinhole intrinsics.
    pub matrix: Matrix3<f64>,
    /// Rectified intrinsics used after undistortion.
    pub optimal_matrix: Matrix3<f64>,
    /// Radial/tangential distortion coefficients (k1, k2, p1, p2, k3).
    pub distortion: [f64; 5],
    /// AprilTag edge length in meters, when tags are in use.
    pub tag_size: Option<f64>,
}

impl Default for CameraCalibration {
    fn default() -> Self {
        Self {
            matrix: Matrix3::new(
                108.8354211,
                0.0,
                115.22432999,
                0.0,
                140.25241086,
                78.99617583,
                0.0,
                0.0,
                1.0,
            ),
            optimal_matrix: Matrix3::new(
                45.32413483,
                0.0,
                138.37312359,
                0.0,
                77.69929504,
                95.08531778,
                0.0,
                0.0,
                1.0,
            ),
            distortion: [-0.28889063, 0.07566187, 0.01182208, 0.00057297, -0.00827746],
            tag_size: None,
        }
    }
}

/// Physical robot geometry. All fields are optional: values not yet
/// measured stay `None` instead of holding placeholder zeros.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RobotConfig {
    pub diameter_m: Option<f64>,
    pub length_m: Option<f64>,
    pub max_speed_mps: Option<f64>,
}

/// Complete pipeline configuration.
///
/// Two capture profiles exist historically and disagree on scale (image
/// size, lane width, boundary threshold, horizon). Neither is canonical;
/// [`PipelineConfig::default`] is the full-resolution profile and
/// [`PipelineConfig::low_res`] the cropped one. Pick per deployment.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub capture: CaptureConfig,
    #[serde(default)]
    pub image: ImageSize,
    #[serde(default)]
    pub lane: LaneConfig,
    #[serde(default)]
    pub camera: CameraCalibration,
    #[serde(default)]
    pub robot: RobotConfig,
    #[serde(default)]
    pub mask: CornerMaskParams,
}

impl PipelineConfig {
    /// The cropped low-resolution capture profile (67x58 frames, lane
    /// thresholds scaled to match).
    pub fn low_res() -> Self {
        Self {
            image: ImageSize {
                width: 67,
                height: 58,
            },
            lane: LaneConfig {
                lane_width: 2.12,
                boundary_thresh: 0.5,
                horizon: 40.5,
                filter_strength: 1,
            },
            ..Self::default()
        }
    }
}
