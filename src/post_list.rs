use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const MARKDOWN_EXTENSION: &str = "md";

/// Expands post arguments into the files to build. Files are taken as given;
/// a directory contributes the markdown files directly inside it, sorted by
/// file name. Argument order is kept.
pub fn retrieve_files(args: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut posts = vec![];
    for arg in args {
        if arg.is_dir() {
            posts.extend(list_markdown(arg)?);
        } else {
            posts.push(arg.clone());
        }
    }
    Ok(posts)
}

fn list_markdown(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = vec![];
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let file_type = entry.file_type().map_err(|e| Error::io(entry.path(), e))?;
        if !file_type.is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == MARKDOWN_EXTENSION) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
