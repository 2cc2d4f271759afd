// src/file.rs

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::config::ExportOptions;
use crate::error::{Error, Result};

/// Read the HTML input. `None` or `-` reads stdin.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            let bytes = fs::read(p)?;
            debug!(path = %p.display(), bytes = bytes.len(), "read input");
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        _ => {
            let mut bytes = Vec::new();
            io::stdin().lock().read_to_end(&mut bytes)?;
            debug!(bytes = bytes.len(), "read stdin");
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}

/// Write `contents` to the path configured in `export`.
/// `default_stem` names the file when only a directory was given.
/// Returns the final path written to, or `None` when `export` targets stdout.
pub fn write_export(
    export: &ExportOptions,
    default_stem: &str,
    contents: &str,
) -> Result<Option<PathBuf>> {
    let Some(path) = export.out_path(default_stem) else {
        return Ok(None);
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    fs::write(&path, contents)?;
    info!(path = %path.display(), bytes = contents.len(), "wrote export");
    Ok(Some(path))
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
