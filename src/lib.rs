//! Heightfield - procedural terrain grid generation for a GPU terrain renderer
//!
//! The terrain is a flat grid over `[-1, 1]` on the X and Z axes. Height is
//! applied by the renderer's vertex shader, which samples a height texture
//! with the per-vertex texture coordinates produced here; a diffuse texture
//! colors the surface.
//!
//! # Features
//! - Non-indexed triangle-list grid generation (six vertices per cell)
//! - Optional indexed grid sharing vertices between cells
//! - Vertex layout and draw descriptors for the renderer
//! - Height and diffuse texture decoding via the `image` crate
//! - Sampler settings with OpenGL filter enum round-tripping

pub mod error;
pub mod heightfield;
pub mod mesh;
pub mod sampler;
pub mod texture;

use std::path::PathBuf;

pub use error::{HeightFieldError, HeightFieldResult};
pub use heightfield::HeightField;
pub use mesh::{generate_grid, generate_indexed_grid, DrawDescriptor, GridMode, TerrainMesh};
pub use sampler::{MagFilter, MinFilter};

/// Configuration for building a [`HeightField`]
#[derive(Debug, Clone, PartialEq)]
pub struct HeightFieldConfig {
    /// Grid cells per axis
    pub tessellation: i32,
    /// Emit texture coordinates alongside positions
    pub tex_coords: bool,
    /// Memory layout of the grid
    pub mode: GridMode,
    /// Single-channel height texture
    pub height_field_path: Option<PathBuf>,
    /// Color texture
    pub diffuse_texture_path: Option<PathBuf>,
    /// Diffuse texture magnification filter
    pub mag_filter: MagFilter,
    /// Diffuse texture minification filter
    pub min_filter: MinFilter,
    /// Anisotropic filtering for the diffuse texture
    pub anisotropy: f32,
}

impl Default for HeightFieldConfig {
    fn default() -> Self {
        Self {
            tessellation: 64,
            tex_coords: true,
            mode: GridMode::NonIndexed,
            height_field_path: None,
            diffuse_texture_path: None,
            mag_filter: MagFilter::Linear,
            min_filter: MinFilter::LinearMipmapLinear,
            anisotropy: 16.0,
        }
    }
}
