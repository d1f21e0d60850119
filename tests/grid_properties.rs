//! Property tests for the terrain grid generators.
//!
//! Each test runs over a range of tessellations via `rstest` cases.

use std::collections::HashMap;
use std::thread;

use glam::{Vec2, Vec3};
use rstest::rstest;

use heightfield::mesh::generators::grid_vertex_count;
use heightfield::{generate_grid, generate_indexed_grid, HeightFieldError, TerrainMesh};

fn point_key(p: Vec3) -> (u32, u32) {
    (p.x.to_bits(), p.z.to_bits())
}

/// Vertices of cell `(i, j)` in a non-indexed grid.
fn cell<'a, T>(items: &'a [T], n: usize, i: usize, j: usize) -> &'a [T] {
    let base = 6 * (i * n + j);
    &items[base..base + 6]
}

#[rstest]
#[case::single(1)]
#[case::two(2)]
#[case::three(3)]
#[case::seven(7)]
#[case::sixteen(16)]
#[case::hundred(100)]
fn test_vertex_count(#[case] n: i32) {
    let mesh = generate_grid(n, false).unwrap();
    let expected = 6 * (n * n) as usize;
    assert_eq!(mesh.vertex_count(), expected);
    assert_eq!(mesh.position_bytes().len(), expected * 3 * 4);
    assert_eq!(grid_vertex_count(n), Some(expected as u32));

    let draw = mesh.to_descriptor();
    assert_eq!(draw.vertex_count as usize, expected);
    assert!(!draw.is_indexed());
}

#[rstest]
#[case::single(1)]
#[case::three(3)]
#[case::seven(7)]
#[case::sixty_four(64)]
fn test_positions_within_domain(#[case] n: i32) {
    let mesh = generate_grid(n, true).unwrap();
    for p in mesh.positions() {
        assert!((-1.0..=1.0).contains(&p.x), "x out of range: {}", p.x);
        assert!((-1.0..=1.0).contains(&p.z), "z out of range: {}", p.z);
        assert_eq!(p.y, 0.0);
    }
}

#[rstest]
#[case::single(1)]
#[case::three(3)]
#[case::seven(7)]
#[case::sixty_four(64)]
fn test_tex_coords_within_unit_square(#[case] n: i32) {
    let mesh = generate_grid(n, true).unwrap();
    assert_eq!(mesh.tex_coords().len(), mesh.vertex_count());
    assert_eq!(mesh.tex_coord_bytes().len(), mesh.vertex_count() * 2 * 4);

    for (p, uv) in mesh.positions().iter().zip(mesh.tex_coords()) {
        assert!((0.0..=1.0).contains(&uv.x));
        assert!((0.0..=1.0).contains(&uv.y));
        assert_eq!(*uv, Vec2::new((p.x + 1.0) / 2.0, (p.z + 1.0) / 2.0));
    }
}

#[test]
fn test_single_cell_covers_full_quad() {
    let mesh = generate_grid(1, true).unwrap();
    let triangles: Vec<[Vec3; 3]> = mesh.triangles().collect();
    assert_eq!(triangles.len(), 2);

    let uvs = mesh.tex_coords();
    assert_eq!(
        &uvs[0..3],
        &[Vec2::new(0.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(1.0, 0.0)]
    );

    let mut second: Vec<[f32; 2]> = uvs[3..6].iter().map(|uv| uv.to_array()).collect();
    second.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(second, vec![[0.0, 1.0], [1.0, 0.0], [1.0, 1.0]]);

    // Both triangles share the (1,-1)/(-1,1) diagonal
    let diagonal = [Vec3::new(1.0, 0.0, -1.0), Vec3::new(-1.0, 0.0, 1.0)];
    for triangle in &triangles {
        assert!(diagonal.iter().all(|d| triangle.contains(d)));
    }
}

#[rstest]
#[case::zero(0)]
#[case::negative(-3)]
#[case::min(i32::MIN)]
fn test_non_positive_tessellation_rejected(#[case] n: i32) {
    for with_tex_coords in [false, true] {
        let err = generate_grid(n, with_tex_coords).unwrap_err();
        assert!(matches!(err, HeightFieldError::InvalidArgument(_)));
        assert!(generate_indexed_grid(n, with_tex_coords).is_err());
    }
    assert_eq!(grid_vertex_count(n), None);
}

#[rstest]
#[case::plain(5, false)]
#[case::textured(5, true)]
#[case::dense(33, true)]
fn test_deterministic_output(#[case] n: i32, #[case] with_tex_coords: bool) {
    let first = generate_grid(n, with_tex_coords).unwrap();
    let second = generate_grid(n, with_tex_coords).unwrap();
    assert_eq!(first.position_bytes(), second.position_bytes());
    assert_eq!(first.tex_coord_bytes(), second.tex_coord_bytes());
}

#[test]
fn test_concurrent_generation() {
    let reference = generate_grid(12, true).unwrap();
    let meshes: Vec<TerrainMesh> = thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| generate_grid(12, true).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    for mesh in meshes {
        assert_eq!(mesh, reference);
    }
}

#[rstest]
#[case::two(2)]
#[case::three(3)]
#[case::ten(10)]
fn test_shared_edges_match(#[case] n: usize) {
    let mesh = generate_grid(n as i32, true).unwrap();
    let positions = mesh.positions();
    let uvs = mesh.tex_coords();

    for i in 0..n {
        for j in 0..n {
            let p = cell(positions, n, i, j);
            let t = cell(uvs, n, i, j);
            if i + 1 < n {
                // Edge at x + c shared with the next cell along X
                let q = cell(positions, n, i + 1, j);
                let s = cell(uvs, n, i + 1, j);
                assert_eq!((p[2], t[2]), (q[0], s[0]));
                assert_eq!((p[3], t[3]), (q[1], s[1]));
            }
            if j + 1 < n {
                // Edge at z + c shared with the next cell along Z
                let q = cell(positions, n, i, j + 1);
                let s = cell(uvs, n, i, j + 1);
                assert_eq!((p[1], t[1]), (q[0], s[0]));
                assert_eq!((p[3], t[3]), (q[2], s[2]));
            }
        }
    }
}

#[rstest]
#[case::two(2)]
#[case::five(5)]
#[case::seventeen(17)]
fn test_duplicated_points_consistent(#[case] n: i32) {
    let mesh = generate_grid(n, true).unwrap();
    let mut points: HashMap<(u32, u32), (usize, Vec2)> = HashMap::new();

    for (p, uv) in mesh.positions().iter().zip(mesh.tex_coords()) {
        let entry = points.entry(point_key(*p)).or_insert((0, *uv));
        entry.0 += 1;
        assert_eq!(entry.1, *uv);
    }

    // Exactly the (n+1)² grid points, interior ones used by six vertices
    assert_eq!(points.len(), ((n + 1) * (n + 1)) as usize);
    let max_use = points.values().map(|(count, _)| *count).max();
    assert_eq!(max_use, Some(6));
}

#[rstest]
#[case::one(1)]
#[case::four(4)]
#[case::nine(9)]
fn test_indexed_grid_matches_flat_grid(#[case] n: i32) {
    let flat = generate_grid(n, true).unwrap();
    let indexed = generate_indexed_grid(n, true).unwrap();

    assert_eq!(indexed.vertex_count(), ((n + 1) * (n + 1)) as usize);
    let indices = indexed.indices().unwrap();
    assert_eq!(indices.len(), flat.vertex_count());

    for (k, &index) in indices.iter().enumerate() {
        assert_eq!(indexed.positions()[index as usize], flat.positions()[k]);
        assert_eq!(indexed.tex_coords()[index as usize], flat.tex_coords()[k]);
    }
}
