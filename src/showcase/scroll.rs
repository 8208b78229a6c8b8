use serde::{Deserialize, Serialize};

/// État visuel de l'en-tête pour une position de défilement donnée.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderState {
    /// Élévation de la barre d'outils
    pub elevation: f32,
    /// Translation verticale de la section "hero" (parallaxe)
    pub hero_translation_y: f32,
}

/// Chargé depuis la table `[scroll]` de `assets/config/showcase.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScrollEffect {
    pub toolbar_elevation: f32,
    /// La section "hero" défile à cette fraction de la vitesse du contenu
    pub parallax_factor: f32,
}

impl Default for ScrollEffect {
    fn default() -> Self {
        Self {
            toolbar_elevation: 4.0,
            parallax_factor: 0.5,
        }
    }
}

impl ScrollEffect {
    pub fn on_scroll(&self, scroll_y: f32) -> HeaderState {
        HeaderState {
            elevation: if scroll_y > 0.0 {
                self.toolbar_elevation
            } else {
                0.0
            },
            hero_translation_y: scroll_y * self.parallax_factor,
        }
    }
}
