use std::path::{Path, PathBuf};

/// Handle to the temporary audio file produced for a single request.
///
/// The file is owned exclusively by the request that created it. `remove`
/// consumes the handle, so deletion cannot run twice.
#[derive(Debug)]
pub struct TempAudio {
    path: PathBuf,
}

impl TempAudio {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Best-effort deletion. A file that is already gone is not an error;
    /// anything else is logged and swallowed so cleanup never masks the
    /// pipeline outcome.
    pub async fn remove(self) {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "Temporary audio file removed");
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to remove temporary audio file"
                );
            }
        }
    }
}
