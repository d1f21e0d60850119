//! Heightfield and diffuse texture loading
//!
//! Images are flipped vertically on load so row 0 is the bottom of the
//! image, matching texture coordinate `v = 0` on the grid.

use crate::error::{HeightFieldError, HeightFieldResult};
use image::{DynamicImage, GenericImageView};
use std::path::{Path, PathBuf};

/// Pixel format of decoded texture data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    /// One 32-bit float channel
    R32Float,
    /// Three 8-bit channels
    Rgb8Unorm,
}

impl TextureFormat {
    pub fn channels(&self) -> u32 {
        match self {
            TextureFormat::R32Float => 1,
            TextureFormat::Rgb8Unorm => 3,
        }
    }

    pub fn bytes_per_pixel(&self) -> u32 {
        match self {
            TextureFormat::R32Float => 4,
            TextureFormat::Rgb8Unorm => 3,
        }
    }
}

fn texture_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string()
}

fn open_image(path: &Path) -> HeightFieldResult<DynamicImage> {
    image::open(path).map_err(|source| {
        log::warn!("Failed to load image: {}: {}", path.display(), source);
        HeightFieldError::ImageLoad {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn check_not_empty(img: &DynamicImage, name: &str) -> HeightFieldResult<()> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(HeightFieldError::EmptyImage(name.to_string()));
    }
    Ok(())
}

/// Gamma applied when converting 8-bit samples to linear floats.
pub const LDR_GAMMA: f32 = 2.2;

/// Integer luminance with weights 77/150/29 out of 256.
fn luminance8(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 77 + g as u32 * 150 + b as u32 * 29) >> 8) as u8
}

fn ldr_to_linear(v: u8) -> f32 {
    (v as f32 / 255.0).powf(LDR_GAMMA)
}

fn decode_heights(img: &DynamicImage) -> Vec<f32> {
    match img {
        DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => img
            .to_rgb32f()
            .pixels()
            .map(|p| (p[0] + p[1] + p[2]) / 3.0)
            .collect(),
        DynamicImage::ImageLuma16(_) | DynamicImage::ImageLumaA16(_) => img
            .to_luma16()
            .pixels()
            .map(|p| ldr_to_linear((p[0] >> 8) as u8))
            .collect(),
        DynamicImage::ImageRgb16(_) | DynamicImage::ImageRgba16(_) => img
            .to_rgb16()
            .pixels()
            .map(|p| {
                let [r, g, b] = p.0.map(|c| (c >> 8) as u8);
                ldr_to_linear(luminance8(r, g, b))
            })
            .collect(),
        DynamicImage::ImageLuma8(_) | DynamicImage::ImageLumaA8(_) => {
            img.to_luma8().pixels().map(|p| ldr_to_linear(p[0])).collect()
        }
        _ => img
            .to_rgb8()
            .pixels()
            .map(|p| ldr_to_linear(luminance8(p[0], p[1], p[2])))
            .collect(),
    }
}

/// Single-channel height samples.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightMap {
    pub width: u32,
    pub height: u32,
    pub data: Vec<f32>,
    pub name: String,
    pub path: Option<PathBuf>,
}

impl HeightMap {
    pub const FORMAT: TextureFormat = TextureFormat::R32Float;

    /// Load a height map from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> HeightFieldResult<Self> {
        let path = path.as_ref();
        let img = open_image(path)?;
        let mut map = Self::from_image(&img, &texture_name(path))?;
        map.path = Some(path.to_path_buf());
        log::info!("Successfully loaded height field texture: {}", path.display());
        Ok(map)
    }

    /// Load a height map from encoded image bytes
    pub fn from_bytes(bytes: &[u8], name: &str) -> HeightFieldResult<Self> {
        let img = image::load_from_memory(bytes)?;
        Self::from_image(&img, name)
    }

    /// Convert a decoded image to one float channel.
    ///
    /// 8- and 16-bit images are reduced to 8-bit luminance and linearized with
    /// a 2.2 gamma, so values lie in `[0, 1]`. Float images keep the mean of
    /// their RGB channels unchanged.
    pub fn from_image(img: &DynamicImage, name: &str) -> HeightFieldResult<Self> {
        check_not_empty(img, name)?;
        let flipped = img.flipv();
        let (width, height) = flipped.dimensions();

        Ok(Self {
            width,
            height,
            data: decode_heights(&flipped),
            name: name.to_string(),
            path: None,
        })
    }

    /// Height at a texel, `(0, 0)` being the bottom-left corner
    pub fn texel(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get((y * self.width + x) as usize).copied()
    }

    pub fn channels(&self) -> u32 {
        Self::FORMAT.channels()
    }

    /// Get texel data as bytes for upload
    pub fn bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }
}

/// RGB color texture draped over the terrain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffuseTexture {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub name: String,
    pub path: Option<PathBuf>,
}

impl DiffuseTexture {
    pub const FORMAT: TextureFormat = TextureFormat::Rgb8Unorm;

    /// Load a diffuse texture from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> HeightFieldResult<Self> {
        let path = path.as_ref();
        let img = open_image(path)?;
        let mut texture = Self::from_image(&img, &texture_name(path))?;
        texture.path = Some(path.to_path_buf());
        log::info!("Successfully loaded diffuse texture: {}", path.display());
        Ok(texture)
    }

    /// Load a diffuse texture from encoded image bytes
    pub fn from_bytes(bytes: &[u8], name: &str) -> HeightFieldResult<Self> {
        let img = image::load_from_memory(bytes)?;
        Self::from_image(&img, name)
    }

    pub fn from_image(img: &DynamicImage, name: &str) -> HeightFieldResult<Self> {
        check_not_empty(img, name)?;
        let rgb = img.flipv().into_rgb8();
        let (width, height) = rgb.dimensions();

        Ok(Self {
            width,
            height,
            data: rgb.into_raw(),
            name: name.to_string(),
            path: None,
        })
    }

    pub fn channels(&self) -> u32 {
        Self::FORMAT.channels()
    }

    /// Color at a pixel, `(0, 0)` being the bottom-left corner
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = ((y * self.width + x) * 3) as usize;
        let rgb = self.data.get(start..start + 3)?;
        Some([rgb[0], rgb[1], rgb[2]])
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }
}
