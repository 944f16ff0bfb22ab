//! One-time mesh construction: spring rest lengths, render index lists and the
//! initial flat layout.

use crate::constants::{CLOTH_EXTENT, CLOTH_HALF_EXTENT, MIN_RESOLUTION};
use crate::error::ClothError;
use crate::grid::GridIndexer;
use crate::particle::ParticleState;
use glam::DVec3;

/// The three kinds of spring connecting cloth particles.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum SpringClass {
    /// Immediate neighbor along a grid axis
    Structural,
    /// Diagonal neighbor
    Shear,
    /// Neighbor two cells away along a grid axis
    Flexion,
}

impl SpringClass {
    pub const ALL: [SpringClass; 3] = [Self::Structural, Self::Shear, Self::Flexion];

    /// Position of this class in per-class tables (`stiffness`, rest lengths).
    #[inline]
    pub fn slot(self) -> usize {
        match self {
            Self::Structural => 0,
            Self::Shear => 1,
            Self::Flexion => 2,
        }
    }
}

/// Immutable mesh data shared between the simulation and the renderer.
#[derive(Clone, Debug)]
pub struct Topology {
    /// Particles per side
    resolution: usize,
    /// Distance between adjacent particles in the rest layout
    spacing: f64,
    /// Rest length per `SpringClass::slot`
    rest_lengths: [f64; 3],
    /// Two triangles per grid cell, 6 indices per cell
    triangle_indices: Vec<u32>,
    /// Structural and shear edges as index pairs
    wireframe_indices: Vec<u32>,
}

impl Topology {
    /// Build the topology for `grid`, which needs at least 2 particles per side.
    pub fn build(grid: &GridIndexer) -> Result<Self, ClothError> {
        let n = grid.resolution();
        if n < MIN_RESOLUTION {
            return Err(ClothError::InvalidResolution { resolution: n });
        }

        let spacing = CLOTH_EXTENT / (n - 1) as f64;
        let rest_lengths = [
            spacing,
            std::f64::consts::SQRT_2 * CLOTH_EXTENT / (n - 1) as f64,
            2.0 * spacing,
        ];

        Ok(Self {
            resolution: n,
            spacing,
            rest_lengths,
            triangle_indices: build_triangles(grid),
            wireframe_indices: build_wireframe(grid),
        })
    }

    /// Distance between adjacent particles in the rest layout.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Rest lengths indexed by `SpringClass::slot`.
    pub fn rest_lengths(&self) -> [f64; 3] {
        self.rest_lengths
    }

    pub fn rest_length(&self, class: SpringClass) -> f64 {
        self.rest_lengths[class.slot()]
    }

    pub fn triangle_indices(&self) -> &[u32] {
        &self.triangle_indices
    }

    pub fn wireframe_indices(&self) -> &[u32] {
        &self.wireframe_indices
    }

    /// Rest-layout position of particle `(i, j)`.
    pub fn rest_position(&self, i: usize, j: usize) -> DVec3 {
        let span = (self.resolution - 1) as f64;
        DVec3::new(
            -CLOTH_HALF_EXTENT + CLOTH_EXTENT * j as f64 / span,
            -CLOTH_HALF_EXTENT + CLOTH_EXTENT * i as f64 / span,
            0.0,
        )
    }

    /// Write the flat rest layout with zero velocity into `state`.
    pub fn lay_flat(&self, state: &mut ParticleState) {
        let n = state.grid().resolution();
        for i in 0..n {
            for j in 0..n {
                let position = self.rest_position(i, j);
                state.set_position(i, j, position);
                state.set_velocity(i, j, DVec3::ZERO);
            }
        }
    }
}

fn build_triangles(grid: &GridIndexer) -> Vec<u32> {
    let n = grid.resolution();
    let mut indices = Vec::with_capacity(6 * (n - 1) * (n - 1));

    for i in 0..n - 1 {
        for j in 0..n - 1 {
            let a = grid.index(i, j) as u32;
            let b = grid.index(i, j + 1) as u32;
            let c = grid.index(i + 1, j + 1) as u32;
            let d = grid.index(i + 1, j) as u32;
            indices.extend_from_slice(&[a, b, c, a, c, d]);
        }
    }

    indices
}

fn build_wireframe(grid: &GridIndexer) -> Vec<u32> {
    let n = grid.resolution();
    let mut indices = Vec::with_capacity(2 * (2 * n * (n - 1) + (n - 1) * (n - 1)));

    for i in 0..n {
        for j in 0..n {
            let here = grid.index(i, j) as u32;
            if j < n - 1 {
                indices.push(here);
                indices.push(grid.index(i, j + 1) as u32);
            }
            if i < n - 1 {
                indices.push(here);
                indices.push(grid.index(i + 1, j) as u32);
            }
            if i < n - 1 && j < n - 1 {
                indices.push(here);
                indices.push(grid.index(i + 1, j + 1) as u32);
            }
        }
    }

    indices
}
