//! File naming and directory helpers shared by the exporters.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{OutputError, Result};

/// Makes a heading safe for use in a file name.
///
/// Keeps word characters, whitespace and `-`, then turns spaces into `_`.
pub fn safe_heading(heading: &str) -> String {
    heading
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .map(|c| if c == ' ' { '_' } else { c })
        .collect()
}

/// Hands out file names, suffixing repeats with `_2`, `_3`, ...
#[derive(Debug, Default)]
pub(crate) struct FileNamer {
    used: BTreeSet<String>,
}

impl FileNamer {
    pub fn name(&mut self, base: &str, heading: &str, extension: &str) -> String {
        let stem = format!("{base}_{}", safe_heading(heading));
        let mut candidate = format!("{stem}.{extension}");
        let mut n = 1;
        while !self.used.insert(candidate.clone()) {
            n += 1;
            candidate = format!("{stem}_{n}.{extension}");
        }
        candidate
    }
}

pub(crate) fn ensure_output_dir(dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|e| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source: e,
    })?;
    Ok(dir.to_path_buf())
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_output_dir(parent).map(|_| ()),
        _ => Ok(()),
    }
}

pub(crate) fn create_file(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|e| OutputError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(BufWriter::new(file))
}

pub(crate) fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut writer = create_file(path)?;
    serde_json::to_writer_pretty(&mut writer, value).map_err(|e| OutputError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    writer.flush().map_err(|e| OutputError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}
