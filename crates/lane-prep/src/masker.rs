//! Corner masking of captured frames.
//!
//! The top corners of a forward-facing frame hold sky, structures and
//! off-road clutter rather than lane markings. Blacking out two triangular
//! wedges there keeps the downstream lane search inside the road area while
//! leaving the central and lower image bit-exact.

use lane_prep_core::{Frame, FrameError, FrameView, Mask, MaskError};
use log::debug;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors returned by [`CornerMasker::crop`].
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum CropError {
    #[error(transparent)]
    InvalidFrame(#[from] FrameError),
    #[error(transparent)]
    Mask(#[from] MaskError),
}

fn default_fraction_num() -> u32 {
    1
}

fn default_fraction_den() -> u32 {
    3
}

/// Configuration for the corner masker.
///
/// The wedge depth is the fraction of frame height reached by each
/// triangle's apex, stored as `fraction_num / fraction_den` so that the row
/// count is computed in exact integer arithmetic: `height * num / den`,
/// truncated toward zero.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CornerMaskParams {
    /// Numerator of the wedge depth fraction.
    #[serde(default = "default_fraction_num")]
    pub fraction_num: u32,
    /// Denominator of the wedge depth fraction. Must be non-zero; the
    /// masker does not validate it, and a zero value panics on division.
    #[serde(default = "default_fraction_den")]
    pub fraction_den: u32,
}

impl Default for CornerMaskParams {
    fn default() -> Self {
        Self {
            fraction_num: 1,
            fraction_den: 3,
        }
    }
}

impl CornerMaskParams {
    /// Wedge depth in rows for a frame of the given height.
    #[inline]
    pub fn wedge_rows(&self, height: usize) -> usize {
        height * self.fraction_num as usize / self.fraction_den as usize
    }
}

/// Masks out the top-left and top-right corner wedges of a frame.
///
/// Stateless apart from its parameters; a single instance may be shared
/// across threads, and every call allocates its own mask and output buffer.
#[derive(Clone, Copy, Debug, Default)]
pub struct CornerMasker {
    params: CornerMaskParams,
}

impl CornerMasker {
    /// Create a masker with the given parameters.
    pub fn new(params: CornerMaskParams) -> Self {
        Self { params }
    }

    /// Masker parameters.
    #[inline]
    pub fn params(&self) -> &CornerMaskParams {
        &self.params
    }

    /// Return a copy of `frame` with both top corner wedges zeroed.
    ///
    /// The output has the same width, height and channel count as the
    /// input, which is never mutated. Pixels outside the wedges are copied
    /// bit-exact. Invalid frames (zero dimension, zero channels, wrong
    /// buffer length) are rejected up front rather than partially masked.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "debug", skip(self, frame), fields(width = frame.width, height = frame.height))
    )]
    pub fn crop(&self, frame: &FrameView<'_>) -> Result<Frame, CropError> {
        frame.validate()?;

        let (w, h) = (frame.width, frame.height);
        let wedge_rows = self.params.wedge_rows(h);

        let mut mask = Mask::opaque(w, h);
        if wedge_rows == 0 {
            // Frame shorter than the fraction's reciprocal: both wedges
            // collapse onto the top edge, which is still discarded.
            mask.discard_row(0);
        } else {
            let (wf, rows) = (w as f64, wedge_rows as f64);
            mask.fill_triangle(
                Point2::new(0.0, 0.0),
                Point2::new(0.0, rows),
                Point2::new(wf, 0.0),
            );
            mask.fill_triangle(
                Point2::new(wf, 0.0),
                Point2::new(0.0, 0.0),
                Point2::new(wf, rows),
            );
        }

        debug!(
            "corner mask: frame {}x{}x{}, wedge rows {}, {} pixels discarded",
            w,
            h,
            frame.channels,
            wedge_rows,
            mask.discarded()
        );

        Ok(mask.apply(frame)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lane_prep_core::Frame;

    #[test]
    fn wedge_rows_truncate_toward_zero() {
        let p = CornerMaskParams::default();
        assert_eq!(p.wedge_rows(9), 3);
        assert_eq!(p.wedge_rows(10), 3);
        assert_eq!(p.wedge_rows(11), 3);
        assert_eq!(p.wedge_rows(8), 2);
        assert_eq!(p.wedge_rows(2), 0);
        assert_eq!(p.wedge_rows(0), 0);
    }

    #[test]
    fn wedge_rows_honor_custom_fractions() {
        let p = CornerMaskParams {
            fraction_num: 1,
            fraction_den: 2,
        };
        assert_eq!(p.wedge_rows(8), 4);
        assert_eq!(p.wedge_rows(9), 4);
        let full = CornerMaskParams {
            fraction_num: 1,
            fraction_den: 1,
        };
        assert_eq!(full.wedge_rows(7), 7);
    }

    #[test]
    fn short_frames_lose_only_the_top_row() {
        let frame = Frame::filled(3, 2, 1, 9);
        let out = CornerMasker::default().crop(&frame.as_view()).unwrap();
        assert_eq!(out.data, vec![0, 0, 0, 9, 9, 9]);
    }

    #[test]
    fn rejects_zero_width() {
        let view = FrameView {
            width: 0,
            height: 4,
            channels: 1,
            data: &[],
        };
        assert!(matches!(
            CornerMasker::default().crop(&view),
            Err(CropError::InvalidFrame(_))
        ));
    }

    #[test]
    fn rejects_mismatched_buffer() {
        let data = vec![0u8; 10];
        let view = FrameView {
            width: 4,
            height: 4,
            channels: 1,
            data: &data,
        };
        assert!(matches!(
            CornerMasker::default().crop(&view),
            Err(CropError::InvalidFrame(FrameError::BufferSizeMismatch { .. }))
        ));
    }
}
