//! Generate a heightfield mesh and print what a renderer would upload.
//!
//! Run with:
//!   cargo run --bin heightfield-info -- --tessellation 128
//!   cargo run --bin heightfield-info -- --mode indexed --no-tex-coords
//!   cargo run --bin heightfield-info -- --height-field terrain.png --diffuse diffuse.jpg
//!   cargo run --bin heightfield-info -- --mag-filter nearest --min-filter nearest-mipmap-linear

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use heightfield::texture::HeightMap;
use heightfield::{GridMode, HeightField, HeightFieldConfig, MagFilter, MinFilter};

/// Grid layout selection for CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
enum CliGridMode {
    /// Six vertices per cell, no index buffer.
    #[default]
    NonIndexed,
    /// Shared vertices with a u32 index buffer.
    Indexed,
}

impl From<CliGridMode> for GridMode {
    fn from(cli: CliGridMode) -> Self {
        match cli {
            CliGridMode::NonIndexed => GridMode::NonIndexed,
            CliGridMode::Indexed => GridMode::Indexed,
        }
    }
}

/// Magnification filter selection for CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
enum CliMagFilter {
    Nearest,
    #[default]
    Linear,
}

impl From<CliMagFilter> for MagFilter {
    fn from(cli: CliMagFilter) -> Self {
        match cli {
            CliMagFilter::Nearest => MagFilter::Nearest,
            CliMagFilter::Linear => MagFilter::Linear,
        }
    }
}

/// Minification filter selection for CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
enum CliMinFilter {
    Nearest,
    Linear,
    NearestMipmapNearest,
    LinearMipmapNearest,
    NearestMipmapLinear,
    #[default]
    LinearMipmapLinear,
}

impl From<CliMinFilter> for MinFilter {
    fn from(cli: CliMinFilter) -> Self {
        match cli {
            CliMinFilter::Nearest => MinFilter::Nearest,
            CliMinFilter::Linear => MinFilter::Linear,
            CliMinFilter::NearestMipmapNearest => MinFilter::NearestMipmapNearest,
            CliMinFilter::LinearMipmapNearest => MinFilter::LinearMipmapNearest,
            CliMinFilter::NearestMipmapLinear => MinFilter::NearestMipmapLinear,
            CliMinFilter::LinearMipmapLinear => MinFilter::LinearMipmapLinear,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "heightfield-info",
    about = "Generate a heightfield terrain grid and report its buffers",
    version
)]
struct Args {
    /// Grid cells per axis.
    #[arg(long, default_value = "64", allow_negative_numbers = true)]
    tessellation: i32,

    /// Skip texture coordinates.
    #[arg(long)]
    no_tex_coords: bool,

    /// Grid memory layout.
    #[arg(long, default_value = "non-indexed", value_enum)]
    mode: CliGridMode,

    /// Height texture (single channel).
    #[arg(long)]
    height_field: Option<PathBuf>,

    /// Diffuse color texture.
    #[arg(long)]
    diffuse: Option<PathBuf>,

    /// Diffuse texture magnification filter.
    #[arg(long, default_value = "linear", value_enum)]
    mag_filter: CliMagFilter,

    /// Diffuse texture minification filter.
    #[arg(long, default_value = "linear-mipmap-linear", value_enum)]
    min_filter: CliMinFilter,

    /// Anisotropic filtering samples for the diffuse texture (1-16).
    #[arg(long, default_value = "16")]
    anisotropy: f32,
}

impl From<Args> for HeightFieldConfig {
    fn from(args: Args) -> Self {
        Self {
            tessellation: args.tessellation,
            tex_coords: !args.no_tex_coords,
            mode: args.mode.into(),
            height_field_path: args.height_field,
            diffuse_texture_path: args.diffuse,
            mag_filter: args.mag_filter.into(),
            min_filter: args.min_filter.into(),
            anisotropy: args.anisotropy,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config: HeightFieldConfig = Args::parse().into();
    let field = match HeightField::from_config(&config) {
        Ok(field) => field,
        Err(e) => {
            log::error!("Failed to build heightfield: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let Some(draw) = field.draw_call() else {
        return ExitCode::FAILURE;
    };

    println!("label:        {}", draw.label.as_deref().unwrap_or("-"));
    println!("topology:     {:?}", draw.topology);
    println!("vertices:     {}", draw.vertex_count);
    match draw.index_count {
        Some(count) => println!("indices:      {} ({} bytes)", count, draw.index_buffer_size()),
        None => println!("indices:      none"),
    }
    for (i, attribute) in draw.layout.attributes.iter().enumerate() {
        println!(
            "buffer {}:     {} @ location {} {:?} ({} bytes)",
            i,
            attribute.semantic.name(),
            attribute.location,
            attribute.format,
            draw.vertex_buffer_size(i)
        );
    }
    if let Some(map) = field.height_map() {
        println!(
            "height field: {} ({}x{}, {:?})",
            map.name,
            map.width,
            map.height,
            HeightMap::FORMAT
        );
    }
    if let Some(diffuse) = field.diffuse_texture() {
        println!(
            "diffuse:      {} ({}x{})",
            diffuse.name, diffuse.width, diffuse.height
        );
    }
    let sampler = field.diffuse_sampler();
    println!(
        "sampler:      min {:?} (0x{:04x}), mag {:?} (0x{:04x}), anisotropy {}, mipmaps {}",
        sampler.min_filter,
        sampler.min_filter.gl_enum(),
        sampler.mag_filter,
        sampler.mag_filter.gl_enum(),
        sampler.max_anisotropy,
        sampler.uses_mipmaps()
    );

    ExitCode::SUCCESS
}
