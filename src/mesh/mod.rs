//! CPU-side terrain mesh types and generators.
//!
//! - [`TerrainMesh`] - Generated grid (positions, texcoords, optional indices)
//! - [`DrawDescriptor`] - Draw parameters for the renderer
//! - [`VertexLayout`] - Attribute slots the terrain shader binds
//! - [`generators`] - Grid generation

mod data;
pub mod generators;
mod layout;

pub use data::{DrawDescriptor, PrimitiveTopology, TerrainMesh};
pub use generators::{generate, generate_grid, generate_indexed_grid, GridMode};
pub use layout::{
    VertexAttribute, VertexAttributeFormat, VertexAttributeSemantic, VertexLayout,
    POSITION_LOCATION, TEX_COORD_LOCATION,
};
