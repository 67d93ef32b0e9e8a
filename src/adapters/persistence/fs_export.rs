//! Implements CodeExportPort by writing files into a directory.

use crate::domain::DomainError;
use crate::ports::CodeExportPort;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Writes exported code under `dir`, creating it on first use.
pub struct FsCodeExporter {
    dir: PathBuf,
}

impl FsCodeExporter {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl CodeExportPort for FsCodeExporter {
    /// Atomic save: write a temp file, sync it, then rename over the target.
    async fn export(&self, file_name: &str, code: &str) -> Result<PathBuf, DomainError> {
        if file_name.is_empty() || file_name.contains(['/', '\\']) {
            return Err(DomainError::Export(format!("invalid file name: {:?}", file_name)));
        }

        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| DomainError::Export(format!("create dir: {}", e)))?;

        let target = self.dir.join(file_name);
        let temp_path = self.dir.join(format!(".{}.tmp", file_name));

        if let Err(e) = write_and_swap(&temp_path, &target, code).await {
            // leave no half-written temp file behind
            let _ = fs::remove_file(&temp_path).await;
            return Err(e);
        }

        Ok(target)
    }
}

async fn write_and_swap(temp_path: &Path, target: &Path, code: &str) -> Result<(), DomainError> {
    let mut f = fs::File::create(temp_path)
        .await
        .map_err(|e| DomainError::Export(format!("create temp file: {}", e)))?;
    f.write_all(code.as_bytes())
        .await
        .map_err(|e| DomainError::Export(format!("write temp file: {}", e)))?;
    f.sync_all()
        .await
        .map_err(|e| DomainError::Export(format!("sync temp file: {}", e)))?;
    drop(f);

    fs::rename(temp_path, target)
        .await
        .map_err(|e| DomainError::Export(format!("atomic rename failed: {}", e)))
}
