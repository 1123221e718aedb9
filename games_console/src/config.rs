use anyhow::{Context, Result};
use games::moves::FullLines;
use std::path::Path;

/// How full rows and columns are moved in 2048.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FullLinesSetting {
    /// Full lines never move.
    Skip,
    /// Full lines merge their equal neighbours.
    #[default]
    Merge,
}

impl From<FullLinesSetting> for FullLines {
    fn from(setting: FullLinesSetting) -> Self {
        match setting {
            FullLinesSetting::Skip => FullLines::Skip,
            FullLinesSetting::Merge => FullLines::Merge,
        }
    }
}

/// Settings of the games, read from a TOML file. Every field is optional.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "defaults::width")]
    pub width: usize,
    /// The 2048 tile value that wins the game.
    #[serde(default = "defaults::target")]
    pub target: u32,
    /// Probability that a new 2048 tile is 4.
    #[serde(default = "defaults::four_probability")]
    pub four_probability: f64,
    #[serde(default)]
    pub full_lines: FullLinesSetting,
    /// Seed of the random number generator, random if not given.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: defaults::width(),
            target: defaults::target(),
            four_probability: defaults::four_probability(),
            full_lines: FullLinesSetting::default(),
            seed: None,
        }
    }
}

impl Config {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("invalid config file {}", path.display()))
    }
}

mod defaults {
    pub fn width() -> usize { 4 }
    pub fn target() -> u32 { games::game2048::DEFAULT_TARGET }
    pub fn four_probability() -> f64 { games::game2048::DEFAULT_FOUR_PROBABILITY }
}
