use particle_field::physic_engine::{
    FieldConfig, Particle, PhysicEngine, PhysicEngineFull, PhysicEngineIterator, UpdateResult,
};
use particle_field::renderer_engine::{CircleInstance, Surface};
use std::cell::RefCell;
use std::rc::Rc;

/// Moteur factice qui journalise les appels reçus du `Simulator`.
#[allow(dead_code)]
pub struct LoggingPhysic {
    pub log: Rc<RefCell<Vec<String>>>,
    pub particles: Vec<Particle>,
    pub config: FieldConfig,
}

#[allow(dead_code)]
impl LoggingPhysic {
    pub fn new(log: Rc<RefCell<Vec<String>>>, n_particles: usize) -> Self {
        Self {
            log,
            particles: vec![Particle::default(); n_particles],
            config: FieldConfig::default(),
        }
    }
}

impl PhysicEngineIterator for LoggingPhysic {
    fn iter_particles<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Particle> + 'a> {
        Box::new(self.particles.iter())
    }
}

impl PhysicEngine for LoggingPhysic {
    fn set_viewport(&mut self, width: f32, height: f32) {
        self.log
            .borrow_mut()
            .push(format!("physic.set_viewport {}x{}", width, height));
    }

    fn update(&mut self) -> UpdateResult {
        self.log.borrow_mut().push("physic.update".into());
        UpdateResult { recycled: 0 }
    }

    fn close(&mut self) {
        self.log.borrow_mut().push("physic.close".into());
        self.particles.clear();
    }

    fn reload_config(&mut self, config: &FieldConfig) -> bool {
        self.log.borrow_mut().push("physic.reload_config".into());
        self.config = config.clone();
        false
    }

    fn get_config(&self) -> &FieldConfig {
        &self.config
    }
}

impl PhysicEngineFull for LoggingPhysic {}

/// Surface factice qui journalise le cycle d'une frame.
#[allow(dead_code)]
pub struct LoggingSurface {
    pub log: Rc<RefCell<Vec<String>>>,
    pub circles: usize,
}

#[allow(dead_code)]
impl LoggingSurface {
    pub fn new(log: Rc<RefCell<Vec<String>>>) -> Self {
        Self { log, circles: 0 }
    }
}

impl Surface for LoggingSurface {
    fn begin_frame(&mut self) {
        self.log.borrow_mut().push("surface.begin_frame".into());
    }

    fn draw_circle(&mut self, _circle: &CircleInstance) {
        self.circles += 1;
    }

    fn end_frame(&mut self) {
        self.log.borrow_mut().push("surface.end_frame".into());
    }
}
