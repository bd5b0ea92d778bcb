use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tempfile::NamedTempFile;

/// Create the directory if it doesn't exist; error if a non-directory exists there.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if path.exists() {
        if !path.is_dir() {
            bail!("[io::fs] Path exists but is not a directory: {}", path.display());
        }
    } else {
        fs::create_dir_all(path)
            .with_context(|| format!("[io::fs] Failed to create directory {}", path.display()))?;
    }
    Ok(())
}

/// Write-then-rename wrapper so readers never see a half-written file.
pub struct PendingWrite {
    target: PathBuf,
    tmp: NamedTempFile,
}

/// Open a temporary file next to `target`. Refuses to replace an existing file unless `force`.
pub fn open_for_write(target: &Path, force: bool) -> Result<PendingWrite> {
    let dir = target.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    ensure_dir_exists(dir)?;
    if !force && target.exists() {
        bail!("[io::fs] Refusing to overwrite existing file: {} (use --force)", target.display());
    }
    let tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("[io::fs] Failed to create temp file in {}", dir.display()))?;

    Ok(PendingWrite { target: target.to_path_buf(), tmp })
}

impl Write for PendingWrite {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> { self.tmp.write(buf) }
    fn flush(&mut self) -> std::io::Result<()> { self.tmp.flush() }
}

/// Flush and move the temporary file into place.
pub fn finalize_write(mut pending: PendingWrite) -> Result<()> {
    pending.flush().context("[io::fs] Failed to flush output")?;
    pending.tmp.as_file().sync_all().ok(); // best-effort fsync
    pending.tmp.persist(&pending.target)
        .with_context(|| format!("[io::fs] Failed to rename into {}", pending.target.display()))?;
    if let Some(dir) = pending.target.parent() {
        let _ = File::open(dir).and_then(|f| f.sync_all());
    }
    Ok(())
}
