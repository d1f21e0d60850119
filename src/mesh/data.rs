//! Terrain mesh buffers and the draw descriptor handed to the renderer.
//!
//! This module provides:
//! - [`PrimitiveTopology`] - How vertices are assembled into primitives
//! - [`DrawDescriptor`] - Everything a renderer needs to issue the draw
//! - [`TerrainMesh`] - CPU-side grid holding positions, texcoords and optional indices

use glam::{Vec2, Vec3};

use super::layout::VertexLayout;

/// Primitive topology describing how vertices are assembled into primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrimitiveTopology {
    /// Every three vertices form a triangle.
    #[default]
    TriangleList,
}

impl PrimitiveTopology {
    /// Get the number of vertices per primitive.
    pub fn vertices_per_primitive(&self) -> u32 {
        match self {
            Self::TriangleList => 3,
        }
    }
}

/// Draw parameters for a generated mesh.
///
/// For a non-indexed mesh the renderer draws `vertex_count` vertices
/// directly; otherwise it draws `index_count` u32 indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawDescriptor {
    /// Vertex layout (one buffer per attribute).
    pub layout: VertexLayout,
    /// Primitive topology.
    pub topology: PrimitiveTopology,
    /// Number of vertices in each attribute buffer.
    pub vertex_count: u32,
    /// Number of u32 indices (None for non-indexed).
    pub index_count: Option<u32>,
    /// Optional label for debugging.
    pub label: Option<String>,
}

impl DrawDescriptor {
    /// Check if this draw uses an index buffer.
    pub fn is_indexed(&self) -> bool {
        self.index_count.is_some()
    }

    /// Number of elements the draw call submits.
    pub fn element_count(&self) -> u32 {
        self.index_count.unwrap_or(self.vertex_count)
    }

    /// Required size of a vertex buffer in bytes.
    pub fn vertex_buffer_size(&self, buffer_index: usize) -> u64 {
        self.vertex_count as u64 * self.layout.buffer_stride(buffer_index) as u64
    }

    /// Required index buffer size in bytes.
    pub fn index_buffer_size(&self) -> u64 {
        self.index_count
            .map(|count| count as u64 * std::mem::size_of::<u32>() as u64)
            .unwrap_or(0)
    }
}

/// A generated terrain grid.
///
/// Positions span `[-1, 1]` on X and Z with Y fixed at zero; the height is
/// applied later by the terrain shader. `tex_coords` is either empty or
/// index-aligned with `positions`. The mesh is immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainMesh {
    tessellation: u32,
    positions: Vec<Vec3>,
    tex_coords: Vec<Vec2>,
    indices: Option<Vec<u32>>,
}

impl TerrainMesh {
    pub(crate) fn new(
        tessellation: u32,
        positions: Vec<Vec3>,
        tex_coords: Vec<Vec2>,
        indices: Option<Vec<u32>>,
    ) -> Self {
        debug_assert!(tex_coords.is_empty() || tex_coords.len() == positions.len());
        Self {
            tessellation,
            positions,
            tex_coords,
            indices,
        }
    }

    /// Grid cells per axis.
    pub fn tessellation(&self) -> u32 {
        self.tessellation
    }

    /// Edge length of one grid cell in the `[-1, 1]` domain.
    pub fn cell_size(&self) -> f32 {
        2.0 / self.tessellation as f32
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Texture coordinates, empty when the mesh was generated without them.
    pub fn tex_coords(&self) -> &[Vec2] {
        &self.tex_coords
    }

    pub fn indices(&self) -> Option<&[u32]> {
        self.indices.as_deref()
    }

    pub fn has_tex_coords(&self) -> bool {
        !self.tex_coords.is_empty()
    }

    pub fn is_indexed(&self) -> bool {
        self.indices.is_some()
    }

    /// Calculate vertex count
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Calculate triangle count
    pub fn triangle_count(&self) -> usize {
        match &self.indices {
            Some(indices) => indices.len() / 3,
            None => self.positions.len() / 3,
        }
    }

    /// Get position data as bytes
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Get texture coordinate data as bytes
    pub fn tex_coord_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.tex_coords)
    }

    /// Get index data as bytes, empty for non-indexed meshes
    pub fn index_bytes(&self) -> &[u8] {
        match &self.indices {
            Some(indices) => bytemuck::cast_slice(indices),
            None => &[],
        }
    }

    /// Vertex layout matching the buffers this mesh carries.
    pub fn layout(&self) -> VertexLayout {
        if self.has_tex_coords() {
            VertexLayout::position_tex_coord()
        } else {
            VertexLayout::position_only()
        }
    }

    /// Create a [`DrawDescriptor`] for this mesh.
    pub fn to_descriptor(&self) -> DrawDescriptor {
        DrawDescriptor {
            layout: self.layout(),
            topology: PrimitiveTopology::TriangleList,
            vertex_count: self.positions.len() as u32,
            index_count: self.indices.as_ref().map(|i| i.len() as u32),
            label: Some(format!("heightfield_{}", self.tessellation)),
        }
    }

    /// Iterate over the triangles as position triples.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        let count = self.triangle_count();
        (0..count).map(move |t| {
            let corner = |k: usize| match &self.indices {
                Some(indices) => self.positions[indices[3 * t + k] as usize],
                None => self.positions[3 * t + k],
            };
            [corner(0), corner(1), corner(2)]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_triangle(with_tex_coords: bool) -> TerrainMesh {
        let positions = vec![
            Vec3::new(-1.0, 0.0, -1.0),
            Vec3::new(-1.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, -1.0),
        ];
        let tex_coords = if with_tex_coords {
            vec![Vec2::new(0.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(1.0, 0.0)]
        } else {
            Vec::new()
        };
        TerrainMesh::new(1, positions, tex_coords, None)
    }

    #[test]
    fn test_primitive_topology_vertices() {
        assert_eq!(PrimitiveTopology::TriangleList.vertices_per_primitive(), 3);
    }

    #[test]
    fn test_byte_views() {
        let mesh = single_triangle(true);
        assert_eq!(mesh.position_bytes().len(), 3 * 12);
        assert_eq!(mesh.tex_coord_bytes().len(), 3 * 8);
        assert!(mesh.index_bytes().is_empty());
    }

    #[test]
    fn test_descriptor_non_indexed() {
        let mesh = single_triangle(true);
        let desc = mesh.to_descriptor();

        assert!(!desc.is_indexed());
        assert_eq!(desc.element_count(), 3);
        assert_eq!(desc.vertex_buffer_size(0), 36);
        assert_eq!(desc.vertex_buffer_size(1), 24);
        assert_eq!(desc.index_buffer_size(), 0);
        assert_eq!(desc.label.as_deref(), Some("heightfield_1"));
    }

    #[test]
    fn test_layout_follows_tex_coords() {
        assert_eq!(single_triangle(true).layout().buffer_count(), 2);
        assert_eq!(single_triangle(false).layout().buffer_count(), 1);
    }

    #[test]
    fn test_descriptor_indexed() {
        let positions = vec![
            Vec3::new(-1.0, 0.0, -1.0),
            Vec3::new(-1.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, -1.0),
            Vec3::new(1.0, 0.0, 1.0),
        ];
        let mesh = TerrainMesh::new(1, positions, Vec::new(), Some(vec![0, 1, 2, 3, 2, 1]));
        let desc = mesh.to_descriptor();

        assert!(desc.is_indexed());
        assert_eq!(desc.element_count(), 6);
        assert_eq!(desc.index_buffer_size(), 24);
        assert_eq!(mesh.triangle_count(), 2);

        let second = mesh.triangles().nth(1).unwrap();
        assert_eq!(second[0], Vec3::new(1.0, 0.0, 1.0));
    }
}
