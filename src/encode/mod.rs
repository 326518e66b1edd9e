//! Encoding sinks.
//!
//! Sinks consume rendered frames in frame index order.

/// `ffmpeg`-based MP4 output via the system binary.
pub mod ffmpeg;
/// Generic frame sink trait and the in-memory sink.
pub mod sink;
