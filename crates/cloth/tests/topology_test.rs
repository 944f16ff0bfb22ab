//! Render topology tests
//!
//! Index list sizes, index ranges and edge coverage for several grid sizes.

use cloth::{ClothConfig, ClothSimulation, SpringClass};
use std::collections::HashSet;

#[test]
fn test_index_counts() {
    for n in [2usize, 3, 4, 7, 16] {
        let sim = ClothSimulation::new(n, ClothConfig::default()).unwrap();

        assert_eq!(sim.triangle_indices().len(), 6 * (n - 1) * (n - 1), "n = {}", n);

        let edges = 2 * n * (n - 1) + (n - 1) * (n - 1);
        assert_eq!(sim.wireframe_indices().len(), 2 * edges, "n = {}", n);
    }
}

#[test]
fn test_indices_in_range() {
    let sim = ClothSimulation::new(6, ClothConfig::default()).unwrap();
    let count = sim.particle_count() as u32;
    assert!(sim.triangle_indices().iter().all(|&i| i < count));
    assert!(sim.wireframe_indices().iter().all(|&i| i < count));
}

#[test]
fn test_wireframe_edges_are_unique() {
    let sim = ClothSimulation::new(5, ClothConfig::default()).unwrap();
    let edges: HashSet<(u32, u32)> = sim
        .wireframe_indices()
        .chunks(2)
        .map(|pair| (pair[0].min(pair[1]), pair[0].max(pair[1])))
        .collect();
    assert_eq!(edges.len(), sim.wireframe_indices().len() / 2);
}

#[test]
fn test_triangles_share_cell_diagonal() {
    let n = 4;
    let sim = ClothSimulation::new(n, ClothConfig::default()).unwrap();

    for cell in sim.triangle_indices().chunks(6) {
        // Both triangles start at the cell origin and share the diagonal corner
        assert_eq!(cell[0], cell[3]);
        assert_eq!(cell[2], cell[4]);
        assert_eq!(cell[2], cell[0] + n as u32 + 1);
    }
}

#[test]
fn test_rest_lengths_scale_with_resolution() {
    let sim = ClothSimulation::new(9, ClothConfig::default()).unwrap();
    let topology = sim.topology();

    assert_eq!(topology.spacing(), 0.5);
    assert_eq!(topology.rest_length(SpringClass::Structural), 0.5);
    assert!((topology.rest_length(SpringClass::Shear) - 0.5 * 2f64.sqrt()).abs() < 1e-12);
    assert_eq!(topology.rest_length(SpringClass::Flexion), 1.0);
}
