//! Net force on a single cloth particle.
//!
//! Contributions are summed in a fixed order: springs (structural, shear,
//! flexion), gravity, damping, then viscous drag along the surface normal.

use crate::config::ClothConfig;
use crate::error::ClothError;
use crate::grid::GridOffset;
use crate::particle::ParticleState;
use crate::topology::{SpringClass, Topology};
use glam::DVec3;

/// Immediate neighbors: left, right, down, up.
pub const STRUCTURAL_OFFSETS: [GridOffset; 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Diagonal neighbors: down-left, down-right, up-left, up-right.
pub const SHEAR_OFFSETS: [GridOffset; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Neighbors two cells away: left, right, down, up.
pub const FLEXION_OFFSETS: [GridOffset; 4] = [(0, -2), (0, 2), (-2, 0), (2, 0)];

/// Offset table for one spring class.
pub fn spring_offsets(class: SpringClass) -> &'static [GridOffset; 4] {
    match class {
        SpringClass::Structural => &STRUCTURAL_OFFSETS,
        SpringClass::Shear => &SHEAR_OFFSETS,
        SpringClass::Flexion => &FLEXION_OFFSETS,
    }
}

/// Hooke spring force on `p` from the spring joining it to `q`.
///
/// Returns `None` when the endpoints coincide and the direction is undefined.
#[inline]
pub fn spring_force(p: DVec3, q: DVec3, stiffness: f64, rest_length: f64) -> Option<DVec3> {
    let diff = p - q;
    let len = diff.length();
    if len == 0.0 || !len.is_finite() {
        return None;
    }
    Some(diff * (stiffness * (rest_length - len) / len))
}

/// Force evaluation constants, resolved once at initialization from the
/// config and topology.
#[derive(Clone, Copy, Debug)]
pub struct ForceModel {
    stiffness: [f64; 3],
    rest_lengths: [f64; 3],
    mass: f64,
    gravity: f64,
    damping: f64,
    viscous: f64,
    wind_velocity: DVec3,
}

impl ForceModel {
    pub fn new(config: &ClothConfig, topology: &Topology) -> Self {
        Self {
            stiffness: config.stiffness,
            rest_lengths: topology.rest_lengths(),
            mass: config.mass,
            gravity: config.gravity,
            damping: config.damping,
            viscous: config.viscous,
            wind_velocity: config.wind_velocity,
        }
    }

    /// Net force on particle `(i, j)` from the current state.
    pub fn force(&self, state: &ParticleState, i: usize, j: usize) -> Result<DVec3, ClothError> {
        let mut force = self.spring_total(state, i, j)?;

        // Gravity
        force.y -= self.mass * self.gravity;

        // Damping
        let velocity = state.velocity(i, j);
        force += velocity * -self.damping;

        // Viscous drag against the wind, along the normal
        let normal = state.normal(i, j);
        let normal_speed = normal.dot(self.wind_velocity - velocity);
        force += normal * (self.viscous * normal_speed);

        Ok(force)
    }

    /// Sum of all spring forces acting on `(i, j)`.
    pub fn spring_total(
        &self,
        state: &ParticleState,
        i: usize,
        j: usize,
    ) -> Result<DVec3, ClothError> {
        let grid = state.grid();
        let p = state.position(i, j);
        let mut total = DVec3::ZERO;

        for class in SpringClass::ALL {
            let stiffness = self.stiffness[class.slot()];
            let rest_length = self.rest_lengths[class.slot()];

            for &offset in spring_offsets(class) {
                let Some((ni, nj)) = grid.offset(i, j, offset) else {
                    continue;
                };
                let q = state.position(ni, nj);
                total += spring_force(p, q, stiffness, rest_length).ok_or(
                    ClothError::DegenerateSpring {
                        row: i,
                        col: j,
                        neighbor_row: ni,
                        neighbor_col: nj,
                    },
                )?;
            }
        }

        Ok(total)
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridIndexer;
    use crate::normals::compute_normals;

    fn flat(n: usize, config: &ClothConfig) -> (ParticleState, ForceModel) {
        let grid = GridIndexer::new(n);
        let topology = Topology::build(&grid).unwrap();
        let mut state = ParticleState::new(grid);
        topology.lay_flat(&mut state);
        compute_normals(&mut state);
        (state, ForceModel::new(config, &topology))
    }

    fn quiet_config() -> ClothConfig {
        ClothConfig {
            mass: 1.0,
            stiffness: [1000.0, 1000.0, 500.0],
            damping: 0.0,
            wind_velocity: DVec3::ZERO,
            viscous: 0.0,
            gravity: 9.8,
        }
    }

    #[test]
    fn test_spring_force_at_rest_is_zero() {
        let f = spring_force(DVec3::ZERO, DVec3::new(2.0, 0.0, 0.0), 100.0, 2.0).unwrap();
        assert_eq!(f, DVec3::ZERO);
    }

    #[test]
    fn test_spring_force_stretched_pulls_together() {
        // Stretched to 3 with rest 2: force on p points toward q
        let f = spring_force(DVec3::ZERO, DVec3::new(3.0, 0.0, 0.0), 10.0, 2.0).unwrap();
        assert!((f - DVec3::new(10.0, 0.0, 0.0)).length() < 1e-12, "f = {:?}", f);
    }

    #[test]
    fn test_spring_force_compressed_pushes_apart() {
        let f = spring_force(DVec3::ZERO, DVec3::new(1.0, 0.0, 0.0), 10.0, 2.0).unwrap();
        assert!((f - DVec3::new(-10.0, 0.0, 0.0)).length() < 1e-12, "f = {:?}", f);
    }

    #[test]
    fn test_spring_force_coincident_is_none() {
        assert!(spring_force(DVec3::ONE, DVec3::ONE, 10.0, 1.0).is_none());
    }

    #[test]
    fn test_flat_cloth_feels_only_gravity() {
        let config = quiet_config();
        let (state, model) = flat(4, &config);

        for i in 0..4 {
            for j in 0..4 {
                let f = model.force(&state, i, j).unwrap();
                assert!(
                    (f - DVec3::new(0.0, -9.8, 0.0)).length() < 1e-9,
                    "force at ({}, {}) = {:?}",
                    i,
                    j,
                    f
                );
            }
        }
    }

    #[test]
    fn test_damping_opposes_velocity() {
        let config = ClothConfig {
            damping: 2.0,
            gravity: 0.0,
            ..quiet_config()
        };
        let (mut state, model) = flat(3, &config);
        state.set_velocity(1, 1, DVec3::new(1.0, 0.0, 0.0));

        let f = model.force(&state, 1, 1).unwrap();
        assert!((f - DVec3::new(-2.0, 0.0, 0.0)).length() < 1e-9, "f = {:?}", f);
    }

    #[test]
    fn test_viscous_drag_follows_normal() {
        let config = ClothConfig {
            viscous: 0.5,
            wind_velocity: DVec3::new(3.0, 0.0, 2.0),
            gravity: 0.0,
            ..quiet_config()
        };
        let (state, model) = flat(3, &config);

        // Normal is +Z; only the Z part of the wind contributes
        let f = model.force(&state, 1, 1).unwrap();
        assert!((f - DVec3::new(0.0, 0.0, 1.0)).length() < 1e-9, "f = {:?}", f);
    }

    #[test]
    fn test_coincident_neighbor_is_reported() {
        let config = quiet_config();
        let (mut state, model) = flat(3, &config);
        let p = state.position(1, 1);
        state.set_position(1, 2, p);

        let err = model.force(&state, 1, 1).unwrap_err();
        assert_eq!(
            err,
            ClothError::DegenerateSpring {
                row: 1,
                col: 1,
                neighbor_row: 1,
                neighbor_col: 2,
            }
        );
    }

    #[test]
    fn test_lifted_center_is_pulled_back() {
        let config = ClothConfig {
            gravity: 0.0,
            ..quiet_config()
        };
        let (mut state, model) = flat(3, &config);
        state.set_position(1, 1, DVec3::new(0.0, 0.0, 0.5));

        let f = model.force(&state, 1, 1).unwrap();
        // Symmetric neighbors: in-plane parts cancel, net force points down Z
        assert!(f.x.abs() < 1e-9 && f.y.abs() < 1e-9, "f = {:?}", f);
        assert!(f.z < 0.0, "f = {:?}", f);
    }
}
