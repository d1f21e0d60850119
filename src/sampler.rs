//! Texture sampling settings for the heightfield and diffuse textures.
//!
//! Filters keep their OpenGL enum values so a renderer (or a settings UI)
//! can pass them straight through.

/// Magnification filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MagFilter {
    /// Nearest neighbor filtering.
    #[default]
    Nearest,
    /// Linear filtering.
    Linear,
}

impl MagFilter {
    pub const ALL: [MagFilter; 2] = [MagFilter::Nearest, MagFilter::Linear];

    pub fn gl_enum(&self) -> u32 {
        match self {
            Self::Nearest => 0x2600,
            Self::Linear => 0x2601,
        }
    }

    pub fn from_gl_enum(value: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.gl_enum() == value)
    }
}

/// Minification filter, including the mipmap selection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MinFilter {
    #[default]
    Nearest,
    Linear,
    NearestMipmapNearest,
    LinearMipmapNearest,
    NearestMipmapLinear,
    LinearMipmapLinear,
}

impl MinFilter {
    pub const ALL: [MinFilter; 6] = [
        MinFilter::Nearest,
        MinFilter::Linear,
        MinFilter::NearestMipmapNearest,
        MinFilter::LinearMipmapNearest,
        MinFilter::NearestMipmapLinear,
        MinFilter::LinearMipmapLinear,
    ];

    pub fn gl_enum(&self) -> u32 {
        match self {
            Self::Nearest => 0x2600,
            Self::Linear => 0x2601,
            Self::NearestMipmapNearest => 0x2700,
            Self::LinearMipmapNearest => 0x2701,
            Self::NearestMipmapLinear => 0x2702,
            Self::LinearMipmapLinear => 0x2703,
        }
    }

    pub fn from_gl_enum(value: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.gl_enum() == value)
    }

    /// Whether sampling reads from a mip chain.
    pub fn uses_mipmaps(&self) -> bool {
        !matches!(self, Self::Nearest | Self::Linear)
    }
}

/// Texture address mode (wrapping behavior).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AddressMode {
    /// Clamp to edge.
    #[default]
    ClampToEdge,
    /// Repeat.
    Repeat,
}

/// Sampler configuration for one texture.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureSampler {
    /// Sampler name.
    pub name: Option<String>,
    pub address_mode_u: AddressMode,
    pub address_mode_v: AddressMode,
    pub mag_filter: MagFilter,
    pub min_filter: MinFilter,
    /// Anisotropic sample count, within `1.0..=16.0`.
    pub max_anisotropy: f32,
}

impl TextureSampler {
    pub const MIN_ANISOTROPY: f32 = 1.0;
    pub const MAX_ANISOTROPY: f32 = 16.0;

    /// Sampler for the single-channel height texture.
    pub fn height_field() -> Self {
        Self {
            mag_filter: MagFilter::Linear,
            min_filter: MinFilter::Linear,
            ..Default::default()
        }
        .with_name("height_field")
    }

    /// Sampler for the diffuse color texture.
    pub fn diffuse() -> Self {
        Self {
            mag_filter: MagFilter::Linear,
            min_filter: MinFilter::LinearMipmapLinear,
            ..Default::default()
        }
        .with_name("diffuse")
    }

    /// Set the sampler name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set address mode for both coordinates.
    pub fn with_address_mode(mut self, mode: AddressMode) -> Self {
        self.address_mode_u = mode;
        self.address_mode_v = mode;
        self
    }

    pub fn with_filters(mut self, mag: MagFilter, min: MinFilter) -> Self {
        self.set_filters(mag, min);
        self
    }

    /// Change filtering, e.g. from a settings UI while rendering.
    pub fn set_filters(&mut self, mag: MagFilter, min: MinFilter) {
        self.mag_filter = mag;
        self.min_filter = min;
    }

    /// Set anisotropic filtering level, clamped to the supported range.
    pub fn with_anisotropy(mut self, level: f32) -> Self {
        self.set_anisotropy(level);
        self
    }

    pub fn set_anisotropy(&mut self, level: f32) {
        let clamped = if level.is_nan() {
            Self::MIN_ANISOTROPY
        } else {
            level.clamp(Self::MIN_ANISOTROPY, Self::MAX_ANISOTROPY)
        };
        if clamped != level {
            log::warn!("Anisotropy {} out of range, using {}", level, clamped);
        }
        self.max_anisotropy = clamped;
    }

    /// Whether the texture needs a generated mip chain.
    pub fn uses_mipmaps(&self) -> bool {
        self.min_filter.uses_mipmaps()
    }
}

impl Default for TextureSampler {
    fn default() -> Self {
        Self {
            name: None,
            address_mode_u: AddressMode::ClampToEdge,
            address_mode_v: AddressMode::ClampToEdge,
            mag_filter: MagFilter::Nearest,
            min_filter: MinFilter::Nearest,
            max_anisotropy: Self::MIN_ANISOTROPY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gl_enum_values() {
        assert_eq!(MagFilter::Linear.gl_enum(), 0x2601);
        assert_eq!(MinFilter::NearestMipmapLinear.gl_enum(), 0x2702);
        assert_eq!(MinFilter::from_gl_enum(0x2701), Some(MinFilter::LinearMipmapNearest));
        assert_eq!(MagFilter::from_gl_enum(0x2703), None);
        for filter in MinFilter::ALL {
            assert_eq!(MinFilter::from_gl_enum(filter.gl_enum()), Some(filter));
        }
    }

    #[test]
    fn test_presets() {
        let height = TextureSampler::height_field();
        assert_eq!(height.address_mode_u, AddressMode::ClampToEdge);
        assert!(!height.uses_mipmaps());

        let diffuse = TextureSampler::diffuse();
        assert!(diffuse.uses_mipmaps());
        assert_eq!(diffuse.name.as_deref(), Some("diffuse"));

        let repeating = TextureSampler::default().with_address_mode(AddressMode::Repeat);
        assert_eq!(repeating.address_mode_u, AddressMode::Repeat);
        assert_eq!(repeating.address_mode_v, AddressMode::Repeat);
    }

    #[test]
    fn test_filters_from_gl_enums() {
        let mag = MagFilter::from_gl_enum(0x2600).unwrap();
        let min = MinFilter::from_gl_enum(0x2700).unwrap();
        let sampler = TextureSampler::diffuse().with_filters(mag, min);
        assert_eq!(sampler.mag_filter, MagFilter::Nearest);
        assert_eq!(sampler.min_filter, MinFilter::NearestMipmapNearest);
        assert!(sampler.uses_mipmaps());
    }

    #[test]
    fn test_anisotropy_clamped() {
        assert_eq!(TextureSampler::default().with_anisotropy(32.0).max_anisotropy, 16.0);
        assert_eq!(TextureSampler::default().with_anisotropy(0.0).max_anisotropy, 1.0);
        assert_eq!(TextureSampler::default().with_anisotropy(f32::NAN).max_anisotropy, 1.0);
        assert_eq!(TextureSampler::default().with_anisotropy(4.0).max_anisotropy, 4.0);
    }
}
