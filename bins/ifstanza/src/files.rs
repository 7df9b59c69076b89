//! Reading and writing the files the codec works on.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Default location of the interfaces file.
pub const DEFAULT_PATH: &str = "/etc/network/interfaces";

/// Read a whole file, or stdin when the path is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        return io::read_to_string(io::stdin()).context("failed to read stdin");
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Replace a file in one step: write a sibling temp file, then rename it over
/// the destination.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .with_context(|| format!("{} is not a file path", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let mut tmp_name = OsString::from(".");
    tmp_name.push(file_name);
    tmp_name.push(".ifstanza-tmp");
    let tmp = dir.join(tmp_name);

    fs::write(&tmp, contents).with_context(|| format!("failed to write {}", tmp.display()))?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e).with_context(|| format!("failed to replace {}", path.display()));
    }

    debug!(path = %path.display(), bytes = contents.len(), "wrote interfaces file");
    Ok(())
}
