//! Semi-implicit Euler time stepping over the whole grid.
//!
//! Every particle reads only the state committed by the previous step. Results
//! go into the scratch buffers of `ParticleState` and are swapped in once the
//! whole grid has been processed, so no particle observes another particle's
//! update from the same step.

use crate::error::ClothError;
use crate::force::ForceModel;
use crate::particle::ParticleState;
use glam::DVec3;

/// Semi-implicit Euler update for one particle: the new velocity advances the
/// position.
#[inline]
pub fn euler_update(
    position: DVec3,
    velocity: DVec3,
    force: DVec3,
    mass: f64,
    dt: f64,
) -> (DVec3, DVec3) {
    let next_velocity = velocity + force * (dt / mass);
    let next_position = position + next_velocity * dt;
    (next_position, next_velocity)
}

/// Advance every particle by `dt` and commit the results.
///
/// Pinned corners keep their position; their velocity is not written and so
/// comes out of the step as zero. On error nothing is committed.
pub fn step(state: &mut ParticleState, model: &ForceModel, dt: f64) -> Result<(), ClothError> {
    if !(dt.is_finite() && dt > 0.0) {
        return Err(ClothError::InvalidTimeStep { dt });
    }

    let grid = *state.grid();
    let n = grid.resolution();
    state.clear_next();

    for i in 0..n {
        for j in 0..n {
            let idx = grid.index(i, j);
            let position = state.position(i, j);

            if grid.is_pinned(i, j) {
                state.write_next(idx, position, None);
                continue;
            }

            let force = model.force(state, i, j)?;
            let (next_position, next_velocity) =
                euler_update(position, state.velocity(i, j), force, model.mass(), dt);

            if !(next_position.is_finite() && next_velocity.is_finite()) {
                return Err(ClothError::NumericalInstability { row: i, col: j });
            }
            state.write_next(idx, next_position, Some(next_velocity));
        }
    }

    state.commit_next();
    Ok(())
}
