use crate::consts;
use crate::highscores;
use ratatui::style::Style;
use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Config {
    /// Settings about data files
    pub(crate) files: FileConfig,

    /// User overrides for the built-in styles
    pub(crate) styles: Styles,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("mousesnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist
    /// and `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Return the filepath at which the high score should be stored: the
    /// file given in the configuration or, if that is not set, the default
    /// high-score file path.  Return `None` if no path is present in the
    /// configuration and the default path could not be computed.
    pub(crate) fn high_score_path(&self) -> Option<Cow<'_, Path>> {
        self.files
            .high_score_file
            .as_deref()
            .map(Cow::from)
            .or_else(|| highscores::default_path().map(Cow::from))
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct FileConfig {
    /// Path at which the high score should be stored
    pub(crate) high_score_file: Option<PathBuf>,

    /// Whether to load & save the high score in a file
    pub(crate) save_high_score: bool,
}

impl Default for FileConfig {
    fn default() -> FileConfig {
        FileConfig {
            high_score_file: None,
            save_high_score: true,
        }
    }
}

/// Style overrides, given as strings in the usual Git/tmux style syntax and
/// falling back to the hard-coded styles in [`consts`]
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Styles {
    snake: Option<parse_style::Style>,
    apple: Option<parse_style::Style>,
    score_bar: Option<parse_style::Style>,
    collision: Option<parse_style::Style>,
}

impl Styles {
    pub(crate) fn snake(&self) -> Style {
        self.snake
            .clone()
            .map(Style::from)
            .unwrap_or(consts::SNAKE_STYLE)
    }

    pub(crate) fn apple(&self) -> Style {
        self.apple
            .clone()
            .map(Style::from)
            .unwrap_or(consts::APPLE_STYLE)
    }

    pub(crate) fn score_bar(&self) -> Style {
        self.score_bar
            .clone()
            .map(Style::from)
            .unwrap_or(consts::SCORE_BAR_STYLE)
    }

    pub(crate) fn collision(&self) -> Style {
        self.collision
            .clone()
            .map(Style::from)
            .unwrap_or(consts::COLLISION_STYLE)
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
