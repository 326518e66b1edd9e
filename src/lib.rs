//! Tumble renders a short rotating-pyramid animation and streams it to an encoder.
//!
//! # Pipeline overview
//!
//! 1. **Configure**: `AnimationConfig -> Animation` (validated sizes, palette drawn once)
//! 2. **Transform**: rotate the fixed pyramid about the vertical axis by the frame's angle
//! 3. **Project**: fixed-camera perspective divide into integer pixel coordinates
//! 4. **Rasterize**: fill faces in declaration order into a `FrameRgb` (CPU, `vello_cpu`)
//! 5. **Sequence**: exactly `frame_count` frames covering one full turn, in index order
//! 6. **Encode** (optional): stream `rgb24` frames to the system `ffmpeg` binary for MP4 output
//! 7. **Publish** (optional): hand the MP4 to a [`Publisher`], deleting the local file afterwards
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: for a given palette and settings, every run produces identical bytes.
//! - **No hidden globals**: geometry is constant, everything else flows from [`Animation`].
//! - **Painter's order**: faces are drawn in declaration order with no depth test, and faces
//!   past the end of the palette are not drawn.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Run configuration and palettes.
pub mod config;
/// Encoding sinks.
pub mod encode;
/// Fixed solid geometry.
pub mod model;
/// Perspective projection.
pub mod projection;
/// Publishing encoded artifacts.
pub mod publish;
/// Rasterization and range rendering.
pub mod render;
/// Frame sequencing.
pub mod sequence;
/// Vertex transforms.
pub mod transform;

pub use crate::config::animation::{Animation, AnimationConfig};
pub use crate::config::palette::{
    DEFAULT_PALETTE_LEN, MAX_PALETTE_LEN, PaletteSpec, random_palette,
};
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::foundation::core::{Fps, FrameIndex, Rgb8};
pub use crate::foundation::error::{TumbleError, TumbleResult};
pub use crate::model::pyramid::{Face, Model, PYRAMID_FACES, PYRAMID_VERTICES, Vertex};
pub use crate::projection::perspective::{Perspective, ProjectedPoint, project};
pub use crate::publish::artifact::ScopedArtifact;
pub use crate::publish::publisher::{
    DirectoryPublisher, Privacy, PublishReceipt, PublishRequest, Publisher,
};
pub use crate::render::frame::FrameRgb;
pub use crate::render::pipeline::{
    RenderStats, render_and_publish, render_to_mp4, render_to_sink, sink_config,
};
pub use crate::render::raster::{RasterSettings, Rasterizer, draw_frame, paired_faces};
pub use crate::sequence::frames::{FrameSequence, frame_angle};
pub use crate::transform::rotate::rotate_about_vertical_axis;
