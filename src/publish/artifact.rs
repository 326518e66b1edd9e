use std::path::{Path, PathBuf};

/// An on-disk output file that is deleted when the guard goes out of scope.
///
/// Covers every exit path, including early `?` returns and unwinding. Call
/// [`ScopedArtifact::keep`] to hand the file over instead.
#[derive(Debug)]
pub struct ScopedArtifact {
    path: Option<PathBuf>,
}

impl ScopedArtifact {
    /// Take ownership of `path`. The file does not need to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// A fresh, process-unique `.mp4` path inside `dir`.
    pub fn unique_in(dir: impl AsRef<Path>, prefix: &str) -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        Self::new(dir.as_ref().join(format!(
            "{prefix}_{}_{nanos}.mp4",
            std::process::id()
        )))
    }

    /// Path of the guarded file.
    pub fn path(&self) -> &Path {
        self.path.as_deref().unwrap_or_else(|| Path::new(""))
    }

    /// Disarm the guard and return the path; the file is left in place.
    pub fn keep(mut self) -> PathBuf {
        self.path.take().unwrap_or_default()
    }
}

impl Drop for ScopedArtifact {
    fn drop(&mut self) {
        let Some(path) = self.path.take() else {
            return;
        };
        match std::fs::remove_file(&path) {
            Ok(()) => tracing::debug!(path = %path.display(), "removed artifact"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to remove artifact");
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/publish/artifact.rs"]
mod tests;
