//! High-score persistence: a plain-text file holding a single non-negative
//! decimal integer, overwritten in place whenever the score is beaten.
use crate::config::Config;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Return the default high-score file path
pub(crate) fn default_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join("mousesnake").join("highscore.txt"))
}

/// Read the stored high score.  A missing file is a high score of 0, as is
/// disabled persistence.
pub(crate) fn load(config: &Config) -> Result<u32, LoadError> {
    if !config.files.save_high_score {
        return Ok(0);
    }
    let Some(path) = config.high_score_path() else {
        return Err(LoadError::NoPath);
    };
    read_score(&path)
}

/// Overwrite the stored high score with `score`, creating parent
/// directories as needed.  Does nothing if persistence is disabled.
pub(crate) fn save(config: &Config, score: u32) -> Result<(), SaveError> {
    if !config.files.save_high_score {
        return Ok(());
    }
    let Some(path) = config.high_score_path() else {
        return Err(SaveError::NoPath);
    };
    write_score(&path, score)
}

fn read_score(path: &Path) -> Result<u32, LoadError> {
    let content = match fs_err::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(LoadError::Read(e)),
    };
    content.trim().parse().map_err(LoadError::Parse)
}

fn write_score(path: &Path, score: u32) -> Result<(), SaveError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent).map_err(SaveError::Mkdir)?;
    }
    fs_err::write(path, score.to_string()).map_err(SaveError::Write)
}

#[derive(Debug, Error)]
pub(crate) enum LoadError {
    #[error("failed to determine path to local data directory")]
    NoPath,
    #[error("failed to read high-score file")]
    Read(#[source] std::io::Error),
    #[error("high-score file does not contain a non-negative integer")]
    Parse(#[source] std::num::ParseIntError),
}

#[derive(Debug, Error)]
pub(crate) enum SaveError {
    #[error("failed to determine path to local data directory")]
    NoPath,
    #[error("failed to create parent directories for high-score file")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to write high-score file")]
    Write(#[source] std::io::Error),
}
