//! Mass-Spring Cloth Simulation
//!
//! A square grid of point masses joined by structural, shear and flexion
//! springs, advanced with semi-implicit Euler integration under gravity,
//! damping and viscous wind drag. The two top-row corners are pinned.
//!
//! The simulation owns all particle state. A renderer reads positions and
//! normals every frame and the triangle/wireframe index lists once.
//!
//! # Example
//!
//! ```
//! use cloth::{ClothConfig, ClothSimulation};
//!
//! let mut sim = ClothSimulation::new(16, ClothConfig::default()).unwrap();
//!
//! for _ in 0..10 {
//!     sim.advance(0.001).unwrap();
//! }
//!
//! assert_eq!(sim.triangle_indices().len(), 6 * 15 * 15);
//! assert!(sim.is_finite());
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod force;
pub mod grid;
pub mod integrator;
pub mod normals;
pub mod particle;
pub mod serde_utils;
pub mod topology;

pub use config::ClothConfig;
pub use error::ClothError;
pub use force::ForceModel;
pub use glam::DVec3;
pub use grid::GridIndexer;
pub use particle::ParticleState;
pub use topology::{SpringClass, Topology};

/// Mass-spring cloth simulation.
#[derive(Clone, Debug)]
pub struct ClothSimulation {
    /// Material and environment constants
    config: ClothConfig,
    /// Rest lengths and render index lists
    topology: Topology,
    /// Positions, velocities, normals and step scratch buffers
    state: ParticleState,
    /// Resolved force constants
    force_model: ForceModel,

    /// Number of committed steps
    pub frame: u64,
}

impl ClothSimulation {
    /// Build a flat `resolution x resolution` cloth at rest.
    pub fn new(resolution: usize, config: ClothConfig) -> Result<Self, ClothError> {
        config.validate()?;

        let grid = GridIndexer::new(resolution);
        let topology = Topology::build(&grid)?;
        let mut state = ParticleState::new(grid);
        topology.lay_flat(&mut state);
        normals::compute_normals(&mut state);
        let force_model = ForceModel::new(&config, &topology);

        log::debug!(
            "cloth initialized: {}x{} particles, {} triangle indices, {} wireframe indices",
            resolution,
            resolution,
            topology.triangle_indices().len(),
            topology.wireframe_indices().len()
        );

        Ok(Self {
            config,
            topology,
            state,
            force_model,
            frame: 0,
        })
    }

    /// Run one integration step. Normals are left untouched; see `advance`.
    pub fn step(&mut self, dt: f64) -> Result<(), ClothError> {
        if let Err(err) = integrator::step(&mut self.state, &self.force_model, dt) {
            log::warn!("cloth step {} aborted: {}", self.frame, err);
            return Err(err);
        }
        self.frame += 1;
        log::trace!("cloth step {} committed (dt = {})", self.frame, dt);
        Ok(())
    }

    /// Run one integration step, then refresh normals for shading.
    pub fn advance(&mut self, dt: f64) -> Result<(), ClothError> {
        self.step(dt)?;
        self.compute_normals();
        Ok(())
    }

    /// Recompute every normal from current positions.
    pub fn compute_normals(&mut self) {
        normals::compute_normals(&mut self.state);
    }

    /// Put every particle back at its rest position with zero velocity.
    pub fn reset(&mut self) {
        self.topology.lay_flat(&mut self.state);
        self.compute_normals();
        self.frame = 0;
    }

    // ========== Particle access ==========

    pub fn resolution(&self) -> usize {
        self.state.grid().resolution()
    }

    pub fn particle_count(&self) -> usize {
        self.state.len()
    }

    pub fn position(&self, i: usize, j: usize) -> DVec3 {
        self.state.position(i, j)
    }

    pub fn set_position(&mut self, i: usize, j: usize, position: DVec3) {
        self.state.set_position(i, j, position);
    }

    pub fn velocity(&self, i: usize, j: usize) -> DVec3 {
        self.state.velocity(i, j)
    }

    pub fn set_velocity(&mut self, i: usize, j: usize, velocity: DVec3) {
        self.state.set_velocity(i, j, velocity);
    }

    pub fn normal(&self, i: usize, j: usize) -> DVec3 {
        self.state.normal(i, j)
    }

    /// Net force currently acting on `(i, j)`.
    pub fn force(&self, i: usize, j: usize) -> Result<DVec3, ClothError> {
        self.force_model.force(&self.state, i, j)
    }

    pub fn is_pinned(&self, i: usize, j: usize) -> bool {
        self.state.grid().is_pinned(i, j)
    }

    // ========== Render buffers ==========

    pub fn positions(&self) -> &[DVec3] {
        self.state.positions()
    }

    pub fn normals(&self) -> &[DVec3] {
        self.state.normals()
    }

    /// Interleaved xyz positions for vertex upload.
    pub fn position_buffer(&self) -> Vec<f32> {
        flatten(self.state.positions())
    }

    /// Interleaved xyz normals for vertex upload.
    pub fn normal_buffer(&self) -> Vec<f32> {
        flatten(self.state.normals())
    }

    pub fn triangle_indices(&self) -> &[u32] {
        self.topology.triangle_indices()
    }

    pub fn wireframe_indices(&self) -> &[u32] {
        self.topology.wireframe_indices()
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn config(&self) -> &ClothConfig {
        &self.config
    }

    // ========== Diagnostics ==========

    /// Total kinetic energy of all particles.
    pub fn kinetic_energy(&self) -> f64 {
        let speed_sq: f64 = self.state.velocities().iter().map(|v| v.length_squared()).sum();
        0.5 * self.config.mass * speed_sq
    }

    /// Total linear momentum of all particles.
    pub fn total_momentum(&self) -> DVec3 {
        self.state
            .velocities()
            .iter()
            .fold(DVec3::ZERO, |acc, v| acc + *v)
            * self.config.mass
    }

    /// Check that no position, velocity or normal has gone NaN/Inf.
    pub fn is_finite(&self) -> bool {
        self.state.positions().iter().all(|p| p.is_finite())
            && self.state.velocities().iter().all(|v| v.is_finite())
            && self.state.normals().iter().all(|n| n.is_finite())
    }
}

fn flatten(vectors: &[DVec3]) -> Vec<f32> {
    vectors
        .iter()
        .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
        .collect()
}
