use std::f64::consts::TAU;

use crate::foundation::core::{FrameIndex, Rgb8};
use crate::foundation::error::{TumbleError, TumbleResult};
use crate::render::frame::FrameRgb;
use crate::render::raster::{RasterSettings, Rasterizer};

/// Rotation angle of frame `index` in a run of `frame_count` frames.
///
/// Angles cover `[0, 2π)` in equal steps, so the last frame stops one step short of a full turn.
pub fn frame_angle(index: FrameIndex, frame_count: u64) -> f64 {
    if frame_count == 0 {
        return 0.0;
    }
    (index.0 as f64) * TAU / (frame_count as f64)
}

/// Lazy, finite sequence of exactly `frame_count` frames in increasing index order.
///
/// Frame `i` is drawn at [`frame_angle`]`(i)`. Each call to [`FrameSequence::new`] starts over
/// at frame 0 and, for the same colors and settings, reproduces the same bytes. After the first
/// error the sequence is exhausted.
#[derive(Debug)]
pub struct FrameSequence<'a> {
    rasterizer: Rasterizer,
    colors: &'a [Rgb8],
    frame_count: u64,
    next: u64,
}

impl<'a> FrameSequence<'a> {
    /// Validate inputs and prepare a sequence starting at frame 0.
    pub fn new(
        settings: RasterSettings,
        frame_count: u64,
        colors: &'a [Rgb8],
    ) -> TumbleResult<Self> {
        if frame_count == 0 {
            return Err(TumbleError::validation("frame count must be non-zero"));
        }
        Ok(Self {
            rasterizer: Rasterizer::new(settings)?,
            colors,
            frame_count,
            next: 0,
        })
    }

    /// Total number of frames in the run.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Render a single frame out of order, without advancing the sequence.
    pub fn render_at(&mut self, index: FrameIndex) -> TumbleResult<FrameRgb> {
        if index.0 >= self.frame_count {
            return Err(TumbleError::validation(format!(
                "frame {} is outside a {}-frame sequence",
                index.0, self.frame_count
            )));
        }
        self.rasterizer
            .draw_frame(frame_angle(index, self.frame_count), self.colors)
    }
}

impl Iterator for FrameSequence<'_> {
    type Item = TumbleResult<(FrameIndex, FrameRgb)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.frame_count {
            return None;
        }
        let idx = FrameIndex(self.next);
        let angle = frame_angle(idx, self.frame_count);
        match self.rasterizer.draw_frame(angle, self.colors) {
            Ok(frame) => {
                self.next += 1;
                Some(Ok((idx, frame)))
            }
            Err(e) => {
                self.next = self.frame_count;
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = usize::try_from(self.frame_count - self.next).unwrap_or(usize::MAX);
        (left, Some(left))
    }
}

impl ExactSizeIterator for FrameSequence<'_> {}

impl std::iter::FusedIterator for FrameSequence<'_> {}

#[cfg(test)]
#[path = "../../tests/unit/sequence/frames.rs"]
mod tests;
