use anyhow::ensure;
use serde::{Deserialize, Serialize};

use crate::showcase::{HeroGradient, ScrollEffect};

/// Paramètres de l'écran vitrine (`assets/config/showcase.toml`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub scroll: ScrollEffect,
    pub gradient: HeroGradient,
}

impl ShowcaseConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &str) -> anyhow::Result<()> {
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            !self.gradient.frames.is_empty(),
            "gradient needs at least one frame"
        );
        ensure!(
            !self.gradient.cycle_duration().is_zero(),
            "gradient frames must have a non-zero total duration"
        );
        ensure!(
            self.scroll.parallax_factor.is_finite() && self.scroll.toolbar_elevation >= 0.0,
            "invalid scroll effect: {:?}",
            self.scroll
        );
        Ok(())
    }
}
