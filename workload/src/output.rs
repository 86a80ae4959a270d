//! Filesystem side of generation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::command::Command;
use crate::error::{WorkloadError, WorkloadResult};
use crate::generate::render_contents;

/// Creates `path` and any missing parents. Succeeds if it already exists.
pub fn ensure_output_directory(path: &Path) -> WorkloadResult<()> {
    fs::create_dir_all(path).map_err(|err| WorkloadError::io(path, err))
}

/// Writes `contents` to `<directory>/<profile_name>.txt`, replacing any
/// existing file.
pub fn write_profile_file(
    directory: &Path,
    profile_name: &str,
    contents: &[Command],
) -> WorkloadResult<PathBuf> {
    let path = directory.join(format!("{profile_name}.txt"));
    fs::write(&path, render_contents(contents)).map_err(|err| WorkloadError::io(&path, err))?;
    Ok(path)
}
