use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// A source document held in memory. The handle is released as soon as
/// `from_file` returns.
pub struct ContentFile {
    pub file_path: PathBuf,
    pub raw_content: Vec<u8>,
}

impl ContentFile {
    pub fn from_file(file_path: PathBuf) -> Result<ContentFile> {
        let raw_content = fs::read(&file_path).map_err(|e| Error::io(&file_path, e))?;

        Ok(ContentFile {
            file_path,
            raw_content,
        })
    }
}
