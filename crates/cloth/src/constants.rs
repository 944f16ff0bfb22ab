//! Physical and geometric constants for the cloth simulation.
//!
//! ## Layout Conventions
//!
//! The cloth starts as a flat square in the XY plane at z = 0, spanning
//! `[-CLOTH_HALF_EXTENT, CLOTH_HALF_EXTENT]` on both axes. Row index `i` runs
//! along +Y, column index `j` along +X.

/// Gravity acceleration magnitude (m/s^2), applied along -Y
pub const GRAVITY: f64 = 9.8;

/// Side length of the square cloth in world units
pub const CLOTH_EXTENT: f64 = 4.0;

/// Half of `CLOTH_EXTENT`; the cloth is centered on the origin
pub const CLOTH_HALF_EXTENT: f64 = CLOTH_EXTENT * 0.5;

/// Smallest grid resolution that still forms a single quad
pub const MIN_RESOLUTION: usize = 2;

// =============================================================================
// DEFAULT MATERIAL - used by `ClothConfig::default()`
// =============================================================================

/// Mass of each particle
pub const DEFAULT_MASS: f64 = 0.3;

/// Spring stiffness per class [structural, shear, flexion]
pub const DEFAULT_STIFFNESS: [f64; 3] = [1000.0, 1000.0, 1000.0];

/// Velocity damping coefficient (Cd)
pub const DEFAULT_DAMPING: f64 = 0.5;

/// Viscous drag coefficient (Cv)
pub const DEFAULT_VISCOUS: f64 = 0.5;

/// Ambient wind velocity [x, y, z]
pub const DEFAULT_WIND: [f64; 3] = [0.0, 0.0, 1.0];
