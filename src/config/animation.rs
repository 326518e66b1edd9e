use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::config::palette::PaletteSpec;
use crate::foundation::core::{Fps, Rgb8};
use crate::foundation::error::{TumbleError, TumbleResult};
use crate::model::pyramid::Model;
use crate::projection::perspective::{DEFAULT_CAMERA_OFFSET, DEFAULT_FOCAL_SCALE, Perspective};
use crate::render::raster::RasterSettings;
use crate::sequence::frames::FrameSequence;

/// User-facing run configuration.
///
/// Every field has a default matching the reference animation: a 500×500 buffer, 250 frames at
/// 25 fps (ten seconds for one full turn), four random face colors.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    /// Square frame side length in pixels.
    pub size: u32,
    /// Frames in one full rotation.
    pub frame_count: u64,
    /// Playback rate handed to the encoder.
    pub fps: Fps,
    /// Projection scale in pixels per model unit at unit depth.
    pub focal_scale: f64,
    /// Camera distance along Z.
    pub camera_offset: f64,
    /// Clear color.
    pub background: Rgb8,
    /// Polygon outline color.
    pub outline: Rgb8,
    /// Outline width in pixels; `0` disables outlines.
    pub outline_width: f64,
    /// Face colors.
    pub palette: PaletteSpec,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            size: 500,
            frame_count: 250,
            fps: Fps::default(),
            focal_scale: DEFAULT_FOCAL_SCALE,
            camera_offset: DEFAULT_CAMERA_OFFSET,
            background: Rgb8::BLACK,
            outline: Rgb8::WHITE,
            outline_width: 1.0,
            palette: PaletteSpec::default(),
        }
    }
}

impl AnimationConfig {
    /// Parse a configuration from a JSON reader. Missing fields take their defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> TumbleResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| TumbleError::validation(format!("parse animation config JSON: {e}")))
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> TumbleResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            TumbleError::validation(format!("open animation config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    fn raster_settings(&self) -> RasterSettings {
        RasterSettings {
            size: self.size,
            background: self.background,
            outline: self.outline,
            outline_width: self.outline_width,
            perspective: Perspective {
                focal_scale: self.focal_scale,
                camera_offset: self.camera_offset,
            },
        }
    }

    /// Check every field without drawing the palette.
    pub fn validate(&self) -> TumbleResult<()> {
        self.raster_settings().validate()?;
        if self.frame_count == 0 {
            return Err(TumbleError::validation("frame count must be non-zero"));
        }
        Fps::new(self.fps.num, self.fps.den)?;
        if !self.focal_scale.is_finite() || !self.camera_offset.is_finite() {
            return Err(TumbleError::validation(
                "focal scale and camera offset must be finite",
            ));
        }
        self.palette.validate()
    }

    /// Validate and draw the palette, producing the immutable state for one run.
    pub fn resolve(&self) -> TumbleResult<Animation> {
        self.validate()?;
        Animation::new(
            self.raster_settings(),
            self.frame_count,
            self.fps,
            self.palette.resolve()?,
        )
    }
}

/// Immutable, validated state for one run: geometry, camera, frame count and face colors.
///
/// Built once at startup and passed by reference to everything that renders.
#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    raster: RasterSettings,
    frame_count: u64,
    fps: Fps,
    colors: Vec<Rgb8>,
}

impl Animation {
    /// Build from already-resolved parts.
    pub fn new(
        raster: RasterSettings,
        frame_count: u64,
        fps: Fps,
        colors: Vec<Rgb8>,
    ) -> TumbleResult<Self> {
        raster.validate()?;
        if frame_count == 0 {
            return Err(TumbleError::validation("frame count must be non-zero"));
        }
        let fps = Fps::new(fps.num, fps.den)?;

        let faces = Model::pyramid().faces().len();
        if colors.len() < faces {
            tracing::warn!(
                colors = colors.len(),
                faces,
                "fewer colors than faces; trailing faces will not be drawn"
            );
        }

        Ok(Self {
            raster,
            frame_count,
            fps,
            colors,
        })
    }

    /// Rasterizer settings.
    pub fn raster(&self) -> &RasterSettings {
        &self.raster
    }

    /// Square frame side length.
    pub fn size(&self) -> u32 {
        self.raster.size
    }

    /// Frames in the run.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Playback rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Face colors, paired with faces in declaration order.
    pub fn colors(&self) -> &[Rgb8] {
        &self.colors
    }

    /// Number of faces that receive a color and are therefore drawn.
    pub fn drawn_face_count(&self) -> usize {
        Model::pyramid().faces().len().min(self.colors.len())
    }

    /// A fresh frame sequence starting at frame 0.
    pub fn frames(&self) -> TumbleResult<FrameSequence<'_>> {
        FrameSequence::new(self.raster, self.frame_count, &self.colors)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/animation.rs"]
mod tests;
