use std::path::Path;

use crate::config::animation::Animation;
use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::error::TumbleResult;
use crate::publish::artifact::ScopedArtifact;
use crate::publish::publisher::{PublishReceipt, PublishRequest, Publisher};

/// Range render statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames pushed into the sink.
    pub frames_total: u64,
    /// Raw RGB bytes pushed into the sink.
    pub bytes_written: u64,
}

/// The [`SinkConfig`] matching an animation.
pub fn sink_config(anim: &Animation) -> SinkConfig {
    SinkConfig {
        width: anim.size(),
        height: anim.size(),
        fps: anim.fps(),
        frame_count: anim.frame_count(),
    }
}

/// Render every frame of `anim` into `sink`, in order, on the calling thread.
///
/// The sink is only ended after the last frame; a failed frame or push returns the error without
/// calling `end`, leaving cleanup to the sink and the caller.
#[tracing::instrument(
    skip_all,
    fields(size = anim.size(), frames = anim.frame_count(), fps = anim.fps().as_f64())
)]
pub fn render_to_sink(anim: &Animation, sink: &mut dyn FrameSink) -> TumbleResult<RenderStats> {
    let frames = anim.frames()?;
    sink.begin(sink_config(anim))?;

    let mut stats = RenderStats::default();
    for item in frames {
        let (idx, frame) = item?;
        sink.push_frame(idx, &frame)?;
        stats.frames_total += 1;
        stats.bytes_written += frame.data.len() as u64;
        if stats.frames_total.is_multiple_of(50) {
            tracing::debug!(frame = idx.0, "frames pushed");
        }
    }

    sink.end()?;
    tracing::info!(
        frames = stats.frames_total,
        bytes = stats.bytes_written,
        secs = anim.fps().frames_to_secs(stats.frames_total),
        "render complete"
    );
    Ok(stats)
}

/// Render `anim` into an MP4 at `out_path` using the system `ffmpeg`.
pub fn render_to_mp4(
    anim: &Animation,
    out_path: impl AsRef<Path>,
    overwrite: bool,
) -> TumbleResult<RenderStats> {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts {
        out_path: out_path.as_ref().to_path_buf(),
        overwrite,
    });
    let stats = render_to_sink(anim, &mut sink)?;
    tracing::info!(out = %out_path.as_ref().display(), "video written");
    Ok(stats)
}

/// Encode `anim` into a scoped MP4 under `workdir`, hand it to `publisher`, and delete the local
/// file on every exit path.
#[tracing::instrument(skip_all, fields(workdir = %workdir.display()))]
pub fn render_and_publish(
    anim: &Animation,
    workdir: &Path,
    publisher: &mut dyn Publisher,
) -> TumbleResult<PublishReceipt> {
    let artifact = ScopedArtifact::unique_in(workdir, "tumble");
    render_to_mp4(anim, artifact.path(), true)?;
    let request = PublishRequest::for_artifact(artifact.path());
    publisher.publish(artifact.path(), &request)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
