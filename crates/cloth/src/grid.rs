//! Square particle grid addressing.
//!
//! Particles are stored row-major: particle `(i, j)` lives at `i * N + j`.

/// A signed `(di, dj)` step between two grid particles.
pub type GridOffset = (isize, isize);

/// Maps `(row, col)` grid coordinates to flat buffer offsets and back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridIndexer {
    resolution: usize,
}

impl GridIndexer {
    /// Create an indexer for an `resolution x resolution` grid.
    pub fn new(resolution: usize) -> Self {
        Self { resolution }
    }

    /// Particles per side.
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Total number of particles.
    pub fn particle_count(&self) -> usize {
        self.resolution * self.resolution
    }

    /// Flat offset of particle `(i, j)`.
    #[inline]
    pub fn index(&self, i: usize, j: usize) -> usize {
        debug_assert!(
            i < self.resolution && j < self.resolution,
            "grid coordinate ({}, {}) outside {}x{} grid",
            i,
            j,
            self.resolution,
            self.resolution
        );
        i * self.resolution + j
    }

    /// Grid coordinates of a flat offset.
    #[inline]
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index / self.resolution, index % self.resolution)
    }

    /// Check whether signed coordinates fall inside the grid.
    #[inline]
    pub fn in_bounds(&self, i: isize, j: isize) -> bool {
        let n = self.resolution as isize;
        i >= 0 && i < n && j >= 0 && j < n
    }

    /// Neighbor of `(i, j)` at `offset`, or `None` if it lies off the grid.
    #[inline]
    pub fn offset(&self, i: usize, j: usize, offset: GridOffset) -> Option<(usize, usize)> {
        let ni = i as isize + offset.0;
        let nj = j as isize + offset.1;
        if self.in_bounds(ni, nj) {
            Some((ni as usize, nj as usize))
        } else {
            None
        }
    }

    /// Top-row corners are held in place by the integrator.
    #[inline]
    pub fn is_pinned(&self, i: usize, j: usize) -> bool {
        let last = self.resolution - 1;
        i == last && (j == 0 || j == last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        let grid = GridIndexer::new(5);
        assert_eq!(grid.index(0, 0), 0);
        assert_eq!(grid.index(2, 3), 13);
        assert_eq!(grid.coords(13), (2, 3));
        assert_eq!(grid.particle_count(), 25);
    }

    #[test]
    fn test_offset_bounds() {
        let grid = GridIndexer::new(3);
        assert_eq!(grid.offset(0, 0, (0, 1)), Some((0, 1)));
        assert_eq!(grid.offset(0, 0, (-1, 0)), None);
        assert_eq!(grid.offset(0, 0, (0, -1)), None);
        assert_eq!(grid.offset(2, 2, (0, 1)), None);
        assert_eq!(grid.offset(0, 0, (2, 2)), Some((2, 2)));
        assert_eq!(grid.offset(1, 1, (2, 0)), None);
    }

    #[test]
    fn test_pinned_corners() {
        let grid = GridIndexer::new(4);
        assert!(grid.is_pinned(3, 0));
        assert!(grid.is_pinned(3, 3));
        assert!(!grid.is_pinned(0, 0));
        assert!(!grid.is_pinned(0, 3));
        assert!(!grid.is_pinned(3, 1));
    }
}
