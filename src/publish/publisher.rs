use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{TumbleError, TumbleResult};

/// Visibility requested for a published video.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Privacy {
    /// Listed and visible to everyone.
    #[default]
    Public,
    /// Reachable by link only.
    Unlisted,
    /// Visible to the owner only.
    Private,
}

/// Metadata sent along with an encoded video.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PublishRequest {
    /// Video title.
    pub title: String,
    /// Free-form description; empty by default.
    pub description: String,
    /// Search tags; empty by default.
    pub tags: Vec<String>,
    /// Requested visibility.
    pub privacy: Privacy,
}

impl PublishRequest {
    /// Public video with an empty description and no tags.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            tags: Vec::new(),
            privacy: Privacy::Public,
        }
    }

    /// Title derived from an artifact's file name.
    pub fn for_artifact(path: &Path) -> Self {
        let title = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "tumble.mp4".to_owned());
        Self::titled(title)
    }
}

/// Result of a successful publish.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublishReceipt {
    /// Identifier assigned by the destination.
    pub id: String,
    /// Bytes transferred.
    pub bytes: u64,
}

/// Destination for encoded videos.
///
/// Implementations own authentication and transfer; callers only see the receipt or an error.
pub trait Publisher {
    /// Upload or store the file at `path`.
    fn publish(&mut self, path: &Path, request: &PublishRequest) -> TumbleResult<PublishReceipt>;
}

/// Publisher that stores videos in a local directory, written alongside a JSON metadata file.
///
/// The copy runs in fixed-size chunks and reports progress through `tracing`.
#[derive(Clone, Debug)]
pub struct DirectoryPublisher {
    dest: PathBuf,
    chunk_size: usize,
}

impl DirectoryPublisher {
    /// Default transfer chunk size.
    pub const DEFAULT_CHUNK_SIZE: usize = 256 * 1024;

    /// Store videos under `dest`, creating it on first publish.
    pub fn new(dest: impl Into<PathBuf>) -> Self {
        Self {
            dest: dest.into(),
            chunk_size: Self::DEFAULT_CHUNK_SIZE,
        }
    }

    /// Override the transfer chunk size (clamped to at least one byte).
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Destination directory.
    pub fn dest(&self) -> &Path {
        &self.dest
    }

    fn copy_chunked(&self, src_path: &Path, dst_path: &Path) -> TumbleResult<u64> {
        let mut src = File::open(src_path)
            .map_err(|e| TumbleError::publish(format!("open '{}': {e}", src_path.display())))?;
        let total = src
            .metadata()
            .map_err(|e| TumbleError::publish(format!("stat '{}': {e}", src_path.display())))?
            .len();
        let mut dst = File::create(dst_path)
            .with_context(|| format!("create '{}'", dst_path.display()))?;

        let mut buf = vec![0u8; self.chunk_size];
        let mut sent = 0u64;
        let mut last_pct = None;
        loop {
            let n = src
                .read(&mut buf)
                .map_err(|e| TumbleError::publish(format!("read '{}': {e}", src_path.display())))?;
            if n == 0 {
                break;
            }
            dst.write_all(&buf[..n])
                .map_err(|e| TumbleError::publish(format!("write '{}': {e}", dst_path.display())))?;
            sent += n as u64;

            let pct = if total == 0 { 100 } else { sent * 100 / total };
            if last_pct != Some(pct) {
                tracing::info!("Uploading... {pct}%");
                last_pct = Some(pct);
            }
        }
        dst.flush()
            .map_err(|e| TumbleError::publish(format!("flush '{}': {e}", dst_path.display())))?;
        Ok(sent)
    }
}

/// `true` when both paths resolve to the same existing file.
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

impl Publisher for DirectoryPublisher {
    #[tracing::instrument(skip(self, request), fields(dest = %self.dest.display()))]
    fn publish(&mut self, path: &Path, request: &PublishRequest) -> TumbleResult<PublishReceipt> {
        if request.title.trim().is_empty() {
            return Err(TumbleError::validation("publish title must not be empty"));
        }
        let name = path
            .file_name()
            .ok_or_else(|| TumbleError::publish(format!("'{}' has no file name", path.display())))?;

        std::fs::create_dir_all(&self.dest)
            .with_context(|| format!("create publish directory '{}'", self.dest.display()))?;

        let dst_path = self.dest.join(name);
        if is_same_file(path, &dst_path) {
            return Err(TumbleError::publish(format!(
                "'{}' is already inside the publish directory",
                path.display()
            )));
        }

        let mut part_name = name.to_os_string();
        part_name.push(".part");
        let part_path = self.dest.join(part_name);
        let sent = match self.copy_chunked(path, &part_path) {
            Ok(sent) => sent,
            Err(e) => {
                let _ = std::fs::remove_file(&part_path);
                return Err(e);
            }
        };
        std::fs::rename(&part_path, &dst_path).map_err(|e| {
            let _ = std::fs::remove_file(&part_path);
            TumbleError::publish(format!("finalize '{}': {e}", dst_path.display()))
        })?;

        let meta_path = dst_path.with_extension("json");
        let meta = File::create(&meta_path)
            .with_context(|| format!("create '{}'", meta_path.display()))?;
        serde_json::to_writer_pretty(meta, request)
            .map_err(|e| TumbleError::publish(format!("write publish metadata: {e}")))?;

        let id = dst_path.to_string_lossy().into_owned();
        tracing::info!(id = %id, bytes = sent, "upload complete");
        Ok(PublishReceipt { id, bytes: sent })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/publish/publisher.rs"]
mod tests;
