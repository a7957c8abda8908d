use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use litgrid_core::{BoardConfig, Coord, Strategy};
use serde::{Deserialize, Serialize};

/// Board settings as read from a TOML file; every field is optional so flags can fill gaps.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub rows: Option<Coord>,
    pub cols: Option<Coord>,
    pub strategy: Option<Strategy>,
    pub seed: Option<u64>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Values set in `overrides` win over values in `self`.
    pub fn merge(self, overrides: Settings) -> Self {
        Self {
            rows: overrides.rows.or(self.rows),
            cols: overrides.cols.or(self.cols),
            strategy: overrides.strategy.or(self.strategy),
            seed: overrides.seed.or(self.seed),
        }
    }

    pub fn board_config(&self) -> BoardConfig {
        let defaults = BoardConfig::default();
        BoardConfig::new(
            (
                self.rows.unwrap_or(defaults.size.0),
                self.cols.unwrap_or(defaults.size.1),
            ),
            self.strategy.unwrap_or(defaults.strategy),
            self.seed,
        )
    }
}
