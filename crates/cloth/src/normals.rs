//! Smoothed per-vertex normals.
//!
//! Each particle looks at its six hexagonal neighbors in a fixed angular
//! order. Every consecutive pair of in-bounds neighbors forms a triangle with
//! the center; the unit normals of those triangles are summed and the sum is
//! normalized. Boundary particles see fewer triangles. The walk order is fixed
//! so results are bit-reproducible.

use crate::grid::GridOffset;
use crate::particle::ParticleState;
use glam::DVec3;

/// Hexagonal neighbor directions as `(di, dj)`, counter-clockwise in the
/// XY plane of the rest layout.
pub const HEX_OFFSETS: [GridOffset; 6] = [(0, 1), (1, 1), (1, 0), (0, -1), (-1, -1), (-1, 0)];

/// Recompute every particle's normal from current positions.
pub fn compute_normals(state: &mut ParticleState) {
    let grid = *state.grid();
    let n = grid.resolution();

    for i in 0..n {
        for j in 0..n {
            let normal = vertex_normal(state, i, j);
            let idx = grid.index(i, j);
            state.normals_mut()[idx] = normal;
        }
    }
}

/// Averaged normal at `(i, j)`, or zero when no neighbor triangle exists or
/// the triangles cancel out.
pub fn vertex_normal(state: &ParticleState, i: usize, j: usize) -> DVec3 {
    let grid = state.grid();
    let p0 = state.position(i, j);
    let mut sum = DVec3::ZERO;

    for t in 0..HEX_OFFSETS.len() {
        let first = grid.offset(i, j, HEX_OFFSETS[t]);
        let second = grid.offset(i, j, HEX_OFFSETS[(t + 1) % HEX_OFFSETS.len()]);

        if let (Some((i1, j1)), Some((i2, j2))) = (first, second) {
            let e1 = state.position(i1, j1) - p0;
            let e2 = state.position(i2, j2) - p0;
            sum += e1.cross(e2).normalize_or_zero();
        }
    }

    sum.normalize_or_zero()
}
