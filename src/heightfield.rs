//! Terrain object tying the grid mesh to its textures

use std::path::Path;

use crate::error::HeightFieldResult;
use crate::mesh::{generate, DrawDescriptor, GridMode, TerrainMesh};
use crate::sampler::TextureSampler;
use crate::texture::{DiffuseTexture, HeightMap};
use crate::HeightFieldConfig;

/// A heightfield terrain: a flat grid displaced in the vertex shader by a
/// height texture and colored by a diffuse texture.
///
/// Holds CPU-side data only. The renderer owns the GPU buffers created from
/// it and replaces them whenever [`HeightField::generate_mesh`] runs again.
#[derive(Debug, Clone)]
pub struct HeightField {
    mesh: Option<TerrainMesh>,
    height_map: Option<HeightMap>,
    diffuse: Option<DiffuseTexture>,
    height_sampler: TextureSampler,
    diffuse_sampler: TextureSampler,
    with_tex_coords: bool,
    mode: GridMode,
}

impl HeightField {
    pub fn new() -> Self {
        Self {
            mesh: None,
            height_map: None,
            diffuse: None,
            height_sampler: TextureSampler::height_field(),
            diffuse_sampler: TextureSampler::diffuse(),
            with_tex_coords: true,
            mode: GridMode::NonIndexed,
        }
    }

    /// Build a heightfield from a config, loading textures and generating the mesh.
    pub fn from_config(config: &HeightFieldConfig) -> HeightFieldResult<Self> {
        let mut field = Self::new()
            .with_tex_coords(config.tex_coords)
            .with_mode(config.mode);
        field.diffuse_sampler = TextureSampler::diffuse()
            .with_filters(config.mag_filter, config.min_filter)
            .with_anisotropy(config.anisotropy);

        if let Some(path) = &config.height_field_path {
            field.load_height_field(path)?;
        }
        if let Some(path) = &config.diffuse_texture_path {
            field.load_diffuse_texture(path)?;
        }
        field.generate_mesh(config.tessellation)?;
        Ok(field)
    }

    pub fn with_tex_coords(mut self, with_tex_coords: bool) -> Self {
        self.with_tex_coords = with_tex_coords;
        self
    }

    pub fn with_mode(mut self, mode: GridMode) -> Self {
        self.mode = mode;
        self
    }

    /// Load the height texture. On failure the previous one is kept.
    pub fn load_height_field<P: AsRef<Path>>(&mut self, path: P) -> HeightFieldResult<()> {
        self.height_map = Some(HeightMap::from_file(path)?);
        Ok(())
    }

    /// Load the diffuse texture. On failure the previous one is kept.
    pub fn load_diffuse_texture<P: AsRef<Path>>(&mut self, path: P) -> HeightFieldResult<()> {
        self.diffuse = Some(DiffuseTexture::from_file(path)?);
        Ok(())
    }

    /// Regenerate the grid, discarding the previous mesh.
    ///
    /// On error no mesh remains, so the renderer stops drawing instead of
    /// using stale buffers.
    pub fn generate_mesh(&mut self, tessellation: i32) -> HeightFieldResult<&TerrainMesh> {
        self.mesh = None;
        let mesh = generate(tessellation, self.with_tex_coords, self.mode)?;
        log::info!(
            "Heightfield mesh generated: tessellation {}, {} vertices, {} triangles",
            mesh.tessellation(),
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        let mesh: &TerrainMesh = self.mesh.insert(mesh);
        Ok(mesh)
    }

    /// Draw parameters for the current mesh, or `None` if there is nothing to draw.
    pub fn draw_call(&self) -> Option<DrawDescriptor> {
        match &self.mesh {
            Some(mesh) => Some(mesh.to_descriptor()),
            None => {
                log::warn!("No heightfield mesh is generated, cannot draw anything");
                None
            }
        }
    }

    pub fn mesh(&self) -> Option<&TerrainMesh> {
        self.mesh.as_ref()
    }

    pub fn height_map(&self) -> Option<&HeightMap> {
        self.height_map.as_ref()
    }

    pub fn diffuse_texture(&self) -> Option<&DiffuseTexture> {
        self.diffuse.as_ref()
    }

    pub fn height_sampler(&self) -> &TextureSampler {
        &self.height_sampler
    }

    pub fn diffuse_sampler(&self) -> &TextureSampler {
        &self.diffuse_sampler
    }

    /// Diffuse sampler for changing filtering between frames.
    pub fn diffuse_sampler_mut(&mut self) -> &mut TextureSampler {
        &mut self.diffuse_sampler
    }
}

impl Default for HeightField {
    fn default() -> Self {
        Self::new()
    }
}
