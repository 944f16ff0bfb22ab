//! Physical constants for a cloth, supplied once at initialization.

use crate::constants::{
    DEFAULT_DAMPING, DEFAULT_MASS, DEFAULT_STIFFNESS, DEFAULT_VISCOUS, DEFAULT_WIND, GRAVITY,
};
use crate::error::ClothError;
use crate::serde_utils::{deserialize_dvec3, serialize_dvec3};
use crate::topology::SpringClass;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Cloth material and environment parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClothConfig {
    /// Mass of every particle
    pub mass: f64,
    /// Spring stiffness [structural, shear, flexion]
    pub stiffness: [f64; 3],
    /// Velocity damping coefficient (Cd)
    pub damping: f64,
    /// Ambient wind velocity for viscous drag
    #[serde(serialize_with = "serialize_dvec3", deserialize_with = "deserialize_dvec3")]
    pub wind_velocity: DVec3,
    /// Viscous drag coefficient (Cv)
    pub viscous: f64,
    /// Gravity acceleration magnitude, applied along -Y
    #[serde(default = "default_gravity")]
    pub gravity: f64,
}

fn default_gravity() -> f64 {
    GRAVITY
}

impl Default for ClothConfig {
    fn default() -> Self {
        Self {
            mass: DEFAULT_MASS,
            stiffness: DEFAULT_STIFFNESS,
            damping: DEFAULT_DAMPING,
            wind_velocity: DVec3::from_array(DEFAULT_WIND),
            viscous: DEFAULT_VISCOUS,
            gravity: GRAVITY,
        }
    }
}

impl ClothConfig {
    /// Stiffness of one spring class.
    #[inline]
    pub fn stiffness_of(&self, class: SpringClass) -> f64 {
        self.stiffness[class.slot()]
    }

    /// Reject out-of-range constants instead of clamping them.
    pub fn validate(&self) -> Result<(), ClothError> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(ClothError::InvalidConfiguration {
                reason: "mass must be positive and finite",
            });
        }
        if self.stiffness.iter().any(|k| !(k.is_finite() && *k >= 0.0)) {
            return Err(ClothError::InvalidConfiguration {
                reason: "spring stiffness must be non-negative and finite",
            });
        }
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(ClothError::InvalidConfiguration {
                reason: "damping coefficient must be non-negative and finite",
            });
        }
        if !(self.viscous.is_finite() && self.viscous >= 0.0) {
            return Err(ClothError::InvalidConfiguration {
                reason: "viscous coefficient must be non-negative and finite",
            });
        }
        if !self.wind_velocity.is_finite() {
            return Err(ClothError::InvalidConfiguration {
                reason: "wind velocity must be finite",
            });
        }
        if !(self.gravity.is_finite() && self.gravity >= 0.0) {
            return Err(ClothError::InvalidConfiguration {
                reason: "gravity must be non-negative and finite",
            });
        }
        Ok(())
    }

    /// Save configuration to JSON file
    pub fn save_json(&self, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load configuration from JSON file
    pub fn load_json(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }
}
