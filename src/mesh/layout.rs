//! Vertex attribute slots expected by the terrain shader.
//!
//! Every attribute lives in its own tightly packed buffer, so the stride of
//! a buffer equals the size of its single attribute.

/// Shader location of the position attribute.
pub const POSITION_LOCATION: u32 = 0;

/// Shader location of the texture coordinate attribute.
pub const TEX_COORD_LOCATION: u32 = 2;

/// What an attribute means to the shader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeSemantic {
    Position,
    TexCoord,
}

impl VertexAttributeSemantic {
    /// Attribute name as bound by the terrain shader.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::TexCoord => "texcoord",
        }
    }
}

/// Vertex attribute format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeFormat {
    Float32x2,
    Float32x3,
}

impl VertexAttributeFormat {
    /// Number of components per vertex.
    pub fn components(&self) -> u32 {
        match self {
            Self::Float32x2 => 2,
            Self::Float32x3 => 3,
        }
    }

    /// Size in bytes per vertex.
    pub fn size(&self) -> u32 {
        self.components() * std::mem::size_of::<f32>() as u32
    }
}

/// A single attribute bound to a shader location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexAttribute {
    pub semantic: VertexAttributeSemantic,
    pub format: VertexAttributeFormat,
    pub location: u32,
}

/// Set of attribute buffers making up a mesh.
///
/// Buffer `i` holds exactly `attributes[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLayout {
    pub attributes: Vec<VertexAttribute>,
    pub label: Option<String>,
}

impl VertexLayout {
    /// Positions only.
    pub fn position_only() -> Self {
        Self {
            attributes: vec![VertexAttribute {
                semantic: VertexAttributeSemantic::Position,
                format: VertexAttributeFormat::Float32x3,
                location: POSITION_LOCATION,
            }],
            label: Some("position".to_string()),
        }
    }

    /// Positions in buffer 0, texture coordinates in buffer 1.
    pub fn position_tex_coord() -> Self {
        Self {
            attributes: vec![
                VertexAttribute {
                    semantic: VertexAttributeSemantic::Position,
                    format: VertexAttributeFormat::Float32x3,
                    location: POSITION_LOCATION,
                },
                VertexAttribute {
                    semantic: VertexAttributeSemantic::TexCoord,
                    format: VertexAttributeFormat::Float32x2,
                    location: TEX_COORD_LOCATION,
                },
            ],
            label: Some("position_texcoord".to_string()),
        }
    }

    pub fn buffer_count(&self) -> usize {
        self.attributes.len()
    }

    /// Stride of a buffer in bytes, 0 if the buffer does not exist.
    pub fn buffer_stride(&self, buffer_index: usize) -> u32 {
        self.attributes
            .get(buffer_index)
            .map(|a| a.format.size())
            .unwrap_or(0)
    }

    /// Find the attribute with the given semantic.
    pub fn find(&self, semantic: VertexAttributeSemantic) -> Option<&VertexAttribute> {
        self.attributes.iter().find(|a| a.semantic == semantic)
    }
}
