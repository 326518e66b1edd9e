use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{TumbleError, TumbleResult};
use crate::render::frame::FrameRgb;

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Playback rate.
    pub fps: Fps,
    /// Frames that will be pushed.
    pub frame_count: u64,
}

/// Sink contract for consuming rendered frames.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order, once per
/// frame, between one `begin` and one `end`.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> TumbleResult<()>;
    /// Push one frame.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRgb) -> TumbleResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> TumbleResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRgb)>,
    finished: bool,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Captured frames in push order.
    pub fn frames(&self) -> &[(FrameIndex, FrameRgb)] {
        &self.frames
    }

    /// `true` once `end` has been called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The concatenated byte stream an encoder would have received.
    pub fn concat_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.frames.iter().map(|(_, f)| f.data.len()).sum());
        for (_, f) in &self.frames {
            out.extend_from_slice(&f.data);
        }
        out
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> TumbleResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRgb) -> TumbleResult<()> {
        if self.cfg.is_none() {
            return Err(TumbleError::encode("in-memory sink not started"));
        }
        if let Some((last, _)) = self.frames.last()
            && idx <= *last
        {
            return Err(TumbleError::encode(
                "in-memory sink received out-of-order frame index",
            ));
        }
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> TumbleResult<()> {
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
