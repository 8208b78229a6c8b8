use crate::physic_engine::{config::FieldConfig, PhysicEngineFull, UpdateResult};
use crate::renderer_engine::{render_particles, Surface};
use log::{debug, info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Pilote de l'animation : un `update` puis un rendu par frame, jusqu'à l'arrêt.
///
/// Le seul état partagé est le drapeau d'exécution (`stop_handle`), qui permet
/// à l'hôte de demander l'arrêt depuis un autre contexte (fermeture de la vue).
pub struct Simulator<P, S>
where
    P: PhysicEngineFull,
    S: Surface,
{
    physic_engine: P,
    surface: S,
    running: Arc<AtomicBool>,

    frames: u64,
    last_time: Instant,

    // Loop state
    fps_avg: f32,
    recycled_since_log: usize,
    last_log: Instant,
    first_frame: bool,
}

impl<P, S> Simulator<P, S>
where
    P: PhysicEngineFull,
    S: Surface,
{
    pub fn new(physic_engine: P, surface: S) -> Self {
        Self {
            physic_engine,
            surface,
            running: Arc::new(AtomicBool::new(true)),
            frames: 0,
            last_time: Instant::now(),
            fps_avg: 0.0,
            recycled_since_log: 0,
            last_log: Instant::now(),
            first_frame: true,
        }
    }

    /// Boucle à la cadence `frame_interval` jusqu'à l'arrêt, ou jusqu'à `max_frames` frames.
    ///
    /// Un intervalle nul enchaîne les frames sans attente (rendu hors-ligne).
    pub fn run(&mut self, frame_interval: Duration, max_frames: Option<u64>) -> anyhow::Result<()> {
        info!(
            "🚀 Animation loop started ({:?} per frame, max frames: {:?})",
            frame_interval, max_frames
        );

        loop {
            if max_frames.is_some_and(|max| self.frames >= max) {
                break;
            }
            let frame_start = Instant::now();
            if !self.step() {
                break;
            }
            if let Some(remaining) = frame_interval.checked_sub(frame_start.elapsed()) {
                if !remaining.is_zero() {
                    std::thread::sleep(remaining);
                }
            }
        }

        info!("🏁 Animation loop ended after {} frames", self.frames);
        Ok(())
    }

    /// Exécute une frame. Retourne `false` si l'animation a été arrêtée.
    pub fn step(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }

        let now = Instant::now();
        let delta = now.duration_since(self.last_time).as_secs_f32();
        self.last_time = now;
        self.frames += 1;

        let update_result = self.physic_engine.update();
        Self::track_update(&mut self.recycled_since_log, &update_result);

        self.surface.begin_frame();
        let drawn = render_particles(self.physic_engine.iter_particles(), &mut self.surface);
        self.surface.end_frame();

        // moyenne pondérée EMA
        let fps = if delta > 0.0 { 1.0 / delta } else { 0.0 };
        let alpha = 0.15;
        self.fps_avg = alpha * fps + (1.0 - alpha) * self.fps_avg;

        let log_interval = Duration::from_secs(5);
        if self.last_log.elapsed() >= log_interval {
            info!(
                "Frames: {} | FPS moyen (EMA): {:.2} | cercles: {} | particules recyclées: {}",
                self.frames, self.fps_avg, drawn, self.recycled_since_log
            );
            self.recycled_since_log = 0;
            self.last_log = Instant::now();
        }

        if self.first_frame {
            info!("🚀 First frame rendered");
            self.first_frame = false;
        }

        true
    }

    fn track_update(recycled_since_log: &mut usize, update_result: &UpdateResult) {
        if update_result.recycled > 0 {
            debug!("♻️ {} particles recycled", update_result.recycled);
        }
        *recycled_since_log += update_result.recycled;
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Arrête l'animation : plus aucun tick après cet appel.
    pub fn stop(&self) {
        if self.running.swap(false, Ordering::Relaxed) {
            info!("⏹️ Animation stopped after {} frames", self.frames);
        }
    }

    /// Drapeau partagé : le passer à `false` arrête la boucle au prochain `step`.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        self.running.clone()
    }

    /// La fenêtre hôte change de taille.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.physic_engine.set_viewport(width, height);
    }

    /// Recharge la configuration depuis `path`. Un fichier illisible ou invalide
    /// est rejeté : le moteur garde sa configuration courante.
    pub fn reload_config(&mut self, path: &str) -> anyhow::Result<bool> {
        let config = FieldConfig::from_file(path).inspect_err(|e| {
            warn!(
                "⚠️ Particle config {} rejected, keeping current one: {:#}",
                path, e
            )
        })?;
        info!("Particle config loaded:\n{:#?}", config);
        Ok(self.physic_engine.reload_config(&config))
    }

    /// Fin de vie de la vue hôte : arrêt puis libération des particules.
    pub fn close(&mut self) {
        self.stop();
        self.physic_engine.close();
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn physic_engine(&self) -> &P {
        &self.physic_engine
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
