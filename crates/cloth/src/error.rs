//! Cloth simulation error types.
//!
//! Configuration problems are rejected up front by `ClothSimulation::new` and
//! `ClothSimulation::step`. Numerical faults abort the step in which they occur
//! before anything is committed, so the simulation state is never left holding
//! NaN.

use std::fmt;

/// Errors produced while building or stepping a cloth.
#[derive(Clone, Debug, PartialEq)]
pub enum ClothError {
    /// Grid resolution below the two particles per side needed for a quad.
    InvalidResolution {
        /// The resolution that was requested
        resolution: usize,
    },
    /// A physical constant in `ClothConfig` is out of range.
    InvalidConfiguration {
        /// Which constraint was violated
        reason: &'static str,
    },
    /// Time step is zero, negative, or not finite.
    InvalidTimeStep {
        /// The rejected step size
        dt: f64,
    },
    /// Two spring endpoints coincide, so the spring direction is undefined.
    DegenerateSpring {
        /// Row of the particle whose force was being evaluated
        row: usize,
        /// Column of the particle whose force was being evaluated
        col: usize,
        /// Row of the coincident neighbor
        neighbor_row: usize,
        /// Column of the coincident neighbor
        neighbor_col: usize,
    },
    /// Integration produced a non-finite velocity or position.
    NumericalInstability {
        /// Row of the offending particle
        row: usize,
        /// Column of the offending particle
        col: usize,
    },
}

impl fmt::Display for ClothError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidResolution { resolution } => {
                write!(f, "mesh resolution must be at least 2, got {resolution}")
            }
            Self::InvalidConfiguration { reason } => {
                write!(f, "invalid cloth configuration: {reason}")
            }
            Self::InvalidTimeStep { dt } => {
                write!(f, "time step must be positive and finite, got {dt}")
            }
            Self::DegenerateSpring {
                row,
                col,
                neighbor_row,
                neighbor_col,
            } => write!(
                f,
                "zero-length spring between ({row}, {col}) and ({neighbor_row}, {neighbor_col})"
            ),
            Self::NumericalInstability { row, col } => {
                write!(f, "non-finite state produced at particle ({row}, {col})")
            }
        }
    }
}

impl std::error::Error for ClothError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ClothError::InvalidResolution { resolution: 1 };
        assert_eq!(err.to_string(), "mesh resolution must be at least 2, got 1");

        let err = ClothError::DegenerateSpring {
            row: 1,
            col: 2,
            neighbor_row: 1,
            neighbor_col: 3,
        };
        assert_eq!(err.to_string(), "zero-length spring between (1, 2) and (1, 3)");
    }
}
