use anyhow::ensure;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::physic_engine::types::Span;

/// Teintes quasi-blanches (ARGB) des particules.
pub const DEFAULT_PALETTE: [u32; 4] = [0xFFFFFFFF, 0xFFE3F2FD, 0xFFC5CAE9, 0xFFD1C4E9];

/// Paramètres du champ de particules.
///
/// Chargé depuis un fichier TOML (`from_file`), ou construit via `FieldConfigBuilder` :
/// les champs non renseignés prennent les valeurs de `FieldConfig::default()`.
/// Les deux chemins refusent une configuration qui ferait croître l'opacité
/// ou la sortirait de `[0, 1]` (voir `FieldConfig::validate`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Builder)]
#[builder(
    default,
    pattern = "owned",
    build_fn(validate = "Self::validate", error = "anyhow::Error")
)]
#[serde(default)]
pub struct FieldConfig {
    /// Nombre (fixe) de particules vivantes
    pub particle_count: usize,

    /// Marge autour de la fenêtre au-delà de laquelle une particule est recyclée
    pub out_of_bounds_margin: f32,

    /// Perte d'opacité par tick
    pub alpha_decay: f32,

    pub palette: Vec<u32>,

    /// Graine du générateur aléatoire (aléa système si absente)
    #[builder(setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Dérive horizontale (vx)
    pub drift: Span,
    /// Vitesse de montée, vy = -rise_speed
    pub rise_speed: Span,

    pub size: Span,
    pub alpha: Span,

    /// Décalage sous le bord bas lors d'un recyclage
    pub respawn_offset: Span,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: 50,
            out_of_bounds_margin: 50.0,
            alpha_decay: 0.002,
            drift: Span::new(-1.0, 1.0),
            rise_speed: Span::new(0.5, 2.5),
            size: Span::new(2.0, 6.0),
            alpha: Span::new(0.3, 0.8),
            respawn_offset: Span::new(0.0, 100.0),
            palette: DEFAULT_PALETTE.to_vec(),
            seed: None,
        }
    }
}

impl FieldConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Décroissance ≥ 0, opacité tirée dans `[0, 1]`, taille et marge ≥ 0.
    pub fn validate(&self) -> anyhow::Result<()> {
        check_parameters(
            self.alpha_decay,
            self.alpha,
            self.size,
            self.out_of_bounds_margin,
        )
    }

    pub fn save_to_file(&self, path: &str) -> anyhow::Result<()> {
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}

impl FieldConfigBuilder {
    fn validate(&self) -> anyhow::Result<()> {
        let defaults = FieldConfig::default();
        check_parameters(
            self.alpha_decay.unwrap_or(defaults.alpha_decay),
            self.alpha.unwrap_or(defaults.alpha),
            self.size.unwrap_or(defaults.size),
            self.out_of_bounds_margin
                .unwrap_or(defaults.out_of_bounds_margin),
        )
    }
}

fn check_parameters(alpha_decay: f32, alpha: Span, size: Span, margin: f32) -> anyhow::Result<()> {
    ensure!(
        alpha_decay.is_finite() && alpha_decay >= 0.0,
        "alpha_decay must be >= 0 (got {})",
        alpha_decay
    );
    ensure!(
        is_within(alpha, 0.0, 1.0),
        "alpha span must lie in [0, 1] (got {:?})",
        alpha
    );
    ensure!(
        is_within(size, 0.0, f32::MAX),
        "size span must be >= 0 (got {:?})",
        size
    );
    ensure!(
        margin.is_finite() && margin >= 0.0,
        "out_of_bounds_margin must be >= 0 (got {})",
        margin
    );
    Ok(())
}

fn is_within(span: Span, lo: f32, hi: f32) -> bool {
    [span.min, span.max]
        .iter()
        .all(|v| v.is_finite() && (lo..=hi).contains(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_match_default() -> anyhow::Result<()> {
        let built = FieldConfigBuilder::default().build()?;
        assert_eq!(built, FieldConfig::default());
        Ok(())
    }

    #[test]
    fn test_partial_toml_keeps_defaults() -> anyhow::Result<()> {
        let config: FieldConfig = toml::from_str("particle_count = 12\n")?;
        assert_eq!(config.particle_count, 12);
        assert_eq!(config.alpha_decay, 0.002);
        assert_eq!(config.palette, DEFAULT_PALETTE.to_vec());
        Ok(())
    }

    #[test]
    fn test_builder_rejects_negative_decay() {
        let result = FieldConfigBuilder::default().alpha_decay(-0.05).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_rejects_alpha_above_one() {
        let result = FieldConfigBuilder::default()
            .alpha(Span::new(0.9, 1.5))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_default_is_valid() {
        assert!(FieldConfig::default().validate().is_ok());
    }
}
