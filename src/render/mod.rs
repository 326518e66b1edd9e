//! Rasterization into RGB frame buffers and the range render pipeline.

/// The RGB pixel buffer handed to encoders.
pub mod frame;
/// Render whole runs into sinks, MP4 files and publishers.
pub mod pipeline;
/// Face filling on top of `vello_cpu`.
pub mod raster;
