//! TOML configuration for callers that wire the engine from a file.
//!
//! ```toml
//! [ranking]
//! default_size      = 10
//! default_algorithm = "quicksort"
//! default_direction = "descending"
//! sizes             = [10, 50, 100, 500, 1000]
//!
//! [source]
//! path = "sales.json"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::{Algorithm, Direction, STANDARD_SIZES};
use crate::error::{Error, Result};
use crate::source::JsonFileSource;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ranking: Ranking,
    pub source: Option<Source>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Ranking {
    pub default_size: usize,
    pub default_algorithm: Algorithm,
    pub default_direction: Direction,
    /// Batch sizes offered for selection.
    pub sizes: Vec<usize>,
}

impl Default for Ranking {
    fn default() -> Self {
        Self {
            default_size: STANDARD_SIZES[0],
            default_algorithm: Algorithm::default(),
            default_direction: Direction::default(),
            sizes: STANDARD_SIZES.to_vec(),
        }
    }
}

impl Ranking {
    pub fn selection(&self) -> Selection {
        Selection {
            size: self.default_size,
            algorithm: self.default_algorithm,
            direction: self.default_direction,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Source {
    pub path: PathBuf,
}

impl Source {
    pub fn open(&self) -> JsonFileSource {
        JsonFileSource::new(&self.path)
    }
}

/// One caller choice of size, algorithm, and direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub size: usize,
    pub algorithm: Algorithm,
    pub direction: Direction,
}

impl Default for Selection {
    fn default() -> Self {
        Ranking::default().selection()
    }
}

pub fn load(path: &Path) -> Result<Config> {
    let raw = fs::read_to_string(path).map_err(|err| Error::ReadConfig {
        path: path.to_path_buf(),
        source: err,
    })?;

    parse(&raw).map_err(|err| match err {
        Error::ParseConfig { source, .. } => Error::ParseConfig {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

/// Parses, normalizes, and validates a configuration held in memory.
pub fn parse(raw: &str) -> Result<Config> {
    let mut cfg: Config = toml::from_str(raw).map_err(|err| Error::ParseConfig {
        path: PathBuf::new(),
        source: err,
    })?;

    normalize(&mut cfg);

    validate(&cfg)?;

    Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
    if cfg.ranking.sizes.is_empty() {
        return Err(Error::Validation {
            message: "ranking.sizes must be non-empty.".to_string(),
        });
    }
    if cfg.ranking.sizes.contains(&0) {
        return Err(Error::Validation {
            message: "ranking.sizes must all be greater than zero.".to_string(),
        });
    }
    if cfg.ranking.default_size == 0 {
        return Err(Error::Validation {
            message: "ranking.default_size must be greater than zero.".to_string(),
        });
    }
    if !cfg.ranking.sizes.contains(&cfg.ranking.default_size) {
        return Err(Error::Validation {
            message: "ranking.default_size must be one of ranking.sizes.".to_string(),
        });
    }
    if cfg
        .source
        .as_ref()
        .is_some_and(|source| source.path.as_os_str().is_empty())
    {
        return Err(Error::Validation {
            message: "source.path must be non-empty.".to_string(),
        });
    }

    Ok(())
}

fn normalize(cfg: &mut Config) {
    cfg.ranking.sizes.sort_unstable();
    cfg.ranking.sizes.dedup();
}
