use std::{fs::File, io::Write, path::{Path, PathBuf}};

use anyhow::{bail, Context, Result};
use tempfile::NamedTempFile;

use crate::common::ensure_dir_exists;

pub(crate) fn assert_not_stdout(path: &Path) -> Result<()> {
    if path == Path::new("-") {
        bail!("stdout is not supported; provide a real file path.");
    }
    Ok(())
}

/// Write-then-rename wrapper so a failed export never leaves a truncated file behind.
pub(crate) struct PendingWrite {
    target: PathBuf,
    tmp: NamedTempFile,
}

pub(crate) fn open_for_write(target: &Path, force: bool) -> Result<PendingWrite> {
    assert_not_stdout(target)?;
    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    ensure_dir_exists(parent)?;
    if !force && target.exists() {
        bail!("Refusing to overwrite existing file: {} (use --force)", target.display());
    }
    let tmp = NamedTempFile::new_in(parent)
        .with_context(|| format!("[io::output] Failed to create temp file in {}", parent.display()))?;
    Ok(PendingWrite { target: target.to_path_buf(), tmp })
}

impl Write for PendingWrite {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.tmp.write(buf)
    }
    fn flush(&mut self) -> std::io::Result<()> {
        self.tmp.flush()
    }
}

impl PendingWrite {
    /// Flush and atomically move the temp file into place.
    pub(crate) fn finalize(mut self) -> Result<()> {
        self.tmp.flush()?;
        self.tmp.as_file().sync_all().ok(); // best-effort fsync file
        let target = self.target;
        self.tmp.persist(&target)
            .with_context(|| format!("[io::output] Failed to rename to {}", target.display()))?;
        if let Some(dir) = target.parent() {
            let _ = File::open(dir).and_then(|f| f.sync_all());
        }
        Ok(())
    }
}

/// Write `bytes` to `target` via a temporary file renamed into place. Refuses to
/// replace an existing file unless `force` is set.
pub fn write_file(target: &Path, bytes: &[u8], force: bool) -> Result<()> {
    let mut pending = open_for_write(target, force)?;
    pending.write_all(bytes)
        .with_context(|| format!("[io::output] Failed to write {}", target.display()))?;
    pending.finalize()
}
