//! Grid generators for the terrain mesh.
//!
//! Both generators cover `[-1, 1]` on X and Z with Y at zero and split each
//! cell along the same diagonal with the same winding:
//!
//! ```text
//!  z+c  1 ---- 3          A = 0, 1, 2
//!       | A  / |          B = 3, 2, 1
//!       |  /  B|
//!  z    0 ---- 2
//!       x      x+c
//! ```
//!
//! Grid coordinates are derived from integer cell indices so every run
//! produces exactly `tessellation²` cells.

use glam::{Vec2, Vec3};

use super::data::TerrainMesh;
use crate::error::{HeightFieldError, HeightFieldResult};

/// Corner order of the two triangles in a cell, as `(dx, dz)` offsets.
const CELL_CORNERS: [(u32, u32); 6] = [(0, 0), (0, 1), (1, 0), (1, 1), (1, 0), (0, 1)];

/// How the grid is laid out in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GridMode {
    /// Six vertices per cell, drawn without an index buffer.
    #[default]
    NonIndexed,
    /// Shared grid points plus a u32 index buffer.
    Indexed,
}

/// Generate the terrain grid in the given mode.
pub fn generate(
    tessellation: i32,
    with_tex_coords: bool,
    mode: GridMode,
) -> HeightFieldResult<TerrainMesh> {
    match mode {
        GridMode::NonIndexed => generate_grid(tessellation, with_tex_coords),
        GridMode::Indexed => generate_indexed_grid(tessellation, with_tex_coords),
    }
}

/// Generate a non-indexed triangle-list grid.
///
/// Produces `6 * tessellation²` vertices. Grid points are duplicated for
/// every cell that touches them; the renderer draws the list as is.
///
/// # Errors
///
/// Returns [`HeightFieldError::InvalidArgument`] if `tessellation` is not
/// positive or the vertex count does not fit a `u32` draw count.
pub fn generate_grid(tessellation: i32, with_tex_coords: bool) -> HeightFieldResult<TerrainMesh> {
    let n = validate_tessellation(tessellation)?;
    let coords = grid_coordinates(n);
    let vertex_count = 6 * n as usize * n as usize;

    let mut positions = Vec::with_capacity(vertex_count);
    let mut tex_coords = Vec::with_capacity(if with_tex_coords { vertex_count } else { 0 });

    for i in 0..n {
        for j in 0..n {
            for (dx, dz) in CELL_CORNERS {
                let x = coords[(i + dx) as usize];
                let z = coords[(j + dz) as usize];
                positions.push(Vec3::new(x, 0.0, z));
                if with_tex_coords {
                    tex_coords.push(tex_coord(x, z));
                }
            }
        }
    }

    log::debug!(
        "Generated non-indexed heightfield grid: tessellation {}, {} vertices",
        n,
        positions.len()
    );

    Ok(TerrainMesh::new(n, positions, tex_coords, None))
}

/// Generate an indexed grid sharing vertices between cells.
///
/// Produces `(tessellation + 1)²` vertices and `6 * tessellation²` indices
/// with the same triangle split and winding as [`generate_grid`].
///
/// # Errors
///
/// Same conditions as [`generate_grid`].
pub fn generate_indexed_grid(
    tessellation: i32,
    with_tex_coords: bool,
) -> HeightFieldResult<TerrainMesh> {
    let n = validate_tessellation(tessellation)?;
    let coords = grid_coordinates(n);
    let row = n + 1;
    let point_count = row as usize * row as usize;

    let mut positions = Vec::with_capacity(point_count);
    let mut tex_coords = Vec::with_capacity(if with_tex_coords { point_count } else { 0 });

    for &x in &coords {
        for &z in &coords {
            positions.push(Vec3::new(x, 0.0, z));
            if with_tex_coords {
                tex_coords.push(tex_coord(x, z));
            }
        }
    }

    let mut indices = Vec::with_capacity(6 * n as usize * n as usize);
    for i in 0..n {
        for j in 0..n {
            indices.extend(CELL_CORNERS.iter().map(|&(dx, dz)| (i + dx) * row + (j + dz)));
        }
    }

    log::debug!(
        "Generated indexed heightfield grid: tessellation {}, {} vertices, {} indices",
        n,
        positions.len(),
        indices.len()
    );

    Ok(TerrainMesh::new(n, positions, tex_coords, Some(indices)))
}

/// Vertex count of a non-indexed grid, if the tessellation is valid.
pub fn grid_vertex_count(tessellation: i32) -> Option<u32> {
    let n = u32::try_from(tessellation).ok().filter(|&n| n > 0)?;
    n.checked_mul(n)?.checked_mul(6)
}

fn validate_tessellation(tessellation: i32) -> HeightFieldResult<u32> {
    if tessellation <= 0 {
        return Err(HeightFieldError::InvalidArgument(format!(
            "tessellation must be positive, got {}",
            tessellation
        )));
    }
    if grid_vertex_count(tessellation).is_none() {
        return Err(HeightFieldError::InvalidArgument(format!(
            "tessellation {} exceeds the u32 vertex count limit",
            tessellation
        )));
    }
    Ok(tessellation as u32)
}

/// Coordinates of the `n + 1` grid lines on one axis.
///
/// The first and last entries are exactly -1 and 1.
fn grid_coordinates(n: u32) -> Vec<f32> {
    (0..=n).map(|k| -1.0 + 2.0 * k as f32 / n as f32).collect()
}

fn tex_coord(x: f32, z: f32) -> Vec2 {
    Vec2::new((x + 1.0) / 2.0, (z + 1.0) / 2.0)
}
