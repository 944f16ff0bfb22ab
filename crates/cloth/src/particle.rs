//! Per-particle state storage for the cloth grid.

use crate::grid::GridIndexer;
use glam::DVec3;

/// Position, velocity and normal arrays for every particle, plus the
/// scratch arrays the integrator writes the next step into.
///
/// All arrays are indexed through the same `GridIndexer` and always have
/// `resolution * resolution` entries.
#[derive(Clone, Debug)]
pub struct ParticleState {
    grid: GridIndexer,

    /// Authoritative positions
    position: Vec<DVec3>,
    /// Authoritative velocities
    velocity: Vec<DVec3>,
    /// Unit normals (zero where undefined)
    normal: Vec<DVec3>,

    /// Positions being built for the next step
    next_position: Vec<DVec3>,
    /// Velocities being built for the next step
    next_velocity: Vec<DVec3>,
}

impl ParticleState {
    /// Allocate zeroed state for every particle of `grid`.
    pub fn new(grid: GridIndexer) -> Self {
        let count = grid.particle_count();
        Self {
            grid,
            position: vec![DVec3::ZERO; count],
            velocity: vec![DVec3::ZERO; count],
            normal: vec![DVec3::ZERO; count],
            next_position: vec![DVec3::ZERO; count],
            next_velocity: vec![DVec3::ZERO; count],
        }
    }

    /// Grid addressing shared by every array.
    pub fn grid(&self) -> &GridIndexer {
        &self.grid
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.position.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
    }

    // ========== Per-particle accessors ==========

    pub fn position(&self, i: usize, j: usize) -> DVec3 {
        self.position[self.grid.index(i, j)]
    }

    pub fn set_position(&mut self, i: usize, j: usize, position: DVec3) {
        let idx = self.grid.index(i, j);
        self.position[idx] = position;
    }

    pub fn velocity(&self, i: usize, j: usize) -> DVec3 {
        self.velocity[self.grid.index(i, j)]
    }

    pub fn set_velocity(&mut self, i: usize, j: usize, velocity: DVec3) {
        let idx = self.grid.index(i, j);
        self.velocity[idx] = velocity;
    }

    pub fn normal(&self, i: usize, j: usize) -> DVec3 {
        self.normal[self.grid.index(i, j)]
    }

    // ========== Field accessors ==========

    /// Get immutable reference to the position field.
    pub fn positions(&self) -> &[DVec3] {
        &self.position
    }

    /// Get immutable reference to the velocity field.
    pub fn velocities(&self) -> &[DVec3] {
        &self.velocity
    }

    /// Get immutable reference to the normal field.
    pub fn normals(&self) -> &[DVec3] {
        &self.normal
    }

    /// Get mutable reference to the normal field.
    pub(crate) fn normals_mut(&mut self) -> &mut [DVec3] {
        &mut self.normal
    }

    // ========== Double buffer ==========

    /// Zero both scratch arrays before a step writes into them.
    pub(crate) fn clear_next(&mut self) {
        self.next_position.fill(DVec3::ZERO);
        self.next_velocity.fill(DVec3::ZERO);
    }

    /// Record the next-step state for the particle at flat offset `idx`.
    pub(crate) fn write_next(&mut self, idx: usize, position: DVec3, velocity: Option<DVec3>) {
        self.next_position[idx] = position;
        if let Some(velocity) = velocity {
            self.next_velocity[idx] = velocity;
        }
    }

    /// Make the scratch arrays authoritative.
    ///
    /// Must only be called once every particle of the step has been written.
    pub(crate) fn commit_next(&mut self) {
        std::mem::swap(&mut self.position, &mut self.next_position);
        std::mem::swap(&mut self.velocity, &mut self.next_velocity);
    }
}
