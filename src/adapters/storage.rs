use crate::domain::ports::Storage;
use crate::utils::error::{EtlError, IoStage, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Filesystem storage rooted at `base_path`. Absolute paths bypass the base.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        tracing::debug!("Reading {}", full_path.display());
        fs::read(&full_path).map_err(|e| EtlError::io(IoStage::Reading, &full_path, e))
    }

    /// Writes go to a sibling `.tmp` file which is renamed over the target
    /// once fully flushed. The target is never left half-written.
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);
        let tmp_path = temp_path_for(&full_path);
        tracing::debug!(
            "Writing {} bytes to {} via {}",
            data.len(),
            full_path.display(),
            tmp_path.display()
        );

        let written = write_synced(&tmp_path, data).and_then(|_| fs::rename(&tmp_path, &full_path));
        if let Err(e) = written {
            // 失敗時清掉暫存檔
            if let Err(cleanup) = fs::remove_file(&tmp_path) {
                tracing::debug!("No temp file to clean up at {}: {}", tmp_path.display(), cleanup);
            }
            return Err(EtlError::io(IoStage::Writing, &full_path, e));
        }

        Ok(())
    }
}

fn write_synced(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data)?;
    file.sync_all()
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
