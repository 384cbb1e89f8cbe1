use std::env;
use std::path::PathBuf;

use slogen::config::{read_config, Config};

use crate::CFG_FILE_NAME;

fn get_config_path() -> Option<PathBuf> {
    let mut candidates = vec![];
    if let Some(exe_dir) = env::current_exe().ok().and_then(|p| p.parent().map(|d| d.to_path_buf())) {
        candidates.push(exe_dir);
    }
    if let Ok(cur_dir) = env::current_dir() {
        candidates.push(cur_dir);
    }
    if let Some(cfg_dir) = dirs::config_dir() {
        candidates.push(cfg_dir);
    }

    candidates
        .into_iter()
        .map(|dir| dir.join(CFG_FILE_NAME))
        .find(|path| path.exists())
}

/// An explicit path must exist. Without one the usual places are searched and
/// the defaults are used when nothing is found.
pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> slogen::error::Result<Config> {
    match cfg_path.or_else(get_config_path) {
        Some(path) => read_config(&path),
        None => Ok(Config::default()),
    }
}
