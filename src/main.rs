// Ici on importe depuis la crate lib complète
use anyhow::Result;
use log::{info, warn};
use std::{env, time::Duration};

use particle_field::physic_engine::{FieldConfig, ParticleField};
use particle_field::renderer_engine::ImageSurface;
use particle_field::showcase::ShowcaseConfig;
use particle_field::utils::show_rust_core_dependencies;
use particle_field::Simulator;

const DEFAULT_FRAMES: u64 = 600;
// Fond de repli avant la première frame du dégradé (bleu nuit)
const BACKGROUND: [u8; 4] = [0x1A, 0x23, 0x7E, 0xFF];
// 60 fps
const FRAME_PERIOD: Duration = Duration::from_micros(16_667);

/// Rendu hors-ligne du champ de particules : `particle_field [OUTPUT_PNG] [FRAMES]`.
fn main() -> Result<()> {
    env_logger::init();

    info!("✨ Starting Particle Field...");

    show_rust_core_dependencies();

    let config = FieldConfig::from_file("assets/config/particles.toml").unwrap_or_else(|e| {
        warn!("⚠️ Particle config unusable ({:#}), using defaults", e);
        FieldConfig::default()
    });
    info!("Particle config loaded:\n{:#?}", config);

    let showcase = ShowcaseConfig::from_file("assets/config/showcase.toml").unwrap_or_else(|e| {
        warn!("⚠️ Showcase config unusable ({:#}), using defaults", e);
        ShowcaseConfig::default()
    });
    info!("Showcase config loaded:\n{:#?}", showcase);

    // --------------------------
    // Arguments : chemin d'export et nombre de frames
    // --------------------------
    let mut args = env::args().skip(1);
    let export_path = args
        .next() // priorité à l'argument CLI
        .or_else(|| env::var("PARTICLE_FIELD_EXPORT").ok());
    let frames = match args.next() {
        Some(raw) => raw.parse::<u64>()?,
        None => DEFAULT_FRAMES,
    };

    if let Some(path) = &export_path {
        info!("Frame export path set to: {}", path);
    }

    // Écran de téléphone, portrait
    let window_width = 1080;
    let window_height = 1920;

    let physic_engine =
        ParticleField::from_config(&config, window_width as f32, window_height as f32);
    let surface = ImageSurface::new(window_width, window_height, BACKGROUND)
        .with_gradient(showcase.gradient, FRAME_PERIOD);

    let mut simulator = Simulator::new(physic_engine, surface);
    simulator.run(Duration::ZERO, Some(frames))?;

    if let Some(path) = &export_path {
        simulator.surface().save_png(path)?;
    }
    simulator.close();

    Ok(())
}
