use crate::drawable_parser::parse_drawable;
use crate::error::IconError;
use crate::png_writer::save_png;
use crate::rasterizer::rasterize;
use crate::svg_writer::synthesize_svg;
use std::fs;
use std::path::PathBuf;
use tracing::info;

pub const PLAY_STORE_SIZE: u32 = 512;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SizeTarget {
    pub density: &'static str,
    pub size: u32,
}

pub const SIZE_TARGETS: [SizeTarget; 5] = [
    SizeTarget { density: "mdpi", size: 48 },
    SizeTarget { density: "hdpi", size: 72 },
    SizeTarget { density: "xhdpi", size: 96 },
    SizeTarget { density: "xxhdpi", size: 144 },
    SizeTarget { density: "xxxhdpi", size: 192 },
];

/// Fixed locations of the input drawable and every generated file, relative
/// to an Android project root.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn input(&self) -> PathBuf {
        self.root.join("app/src/main/res/drawable/ic_launcher_foreground.xml")
    }

    pub fn debug_svg(&self) -> PathBuf {
        self.root.join("icon_temp.svg")
    }

    pub fn play_store_icon(&self) -> PathBuf {
        self.root.join("assets/playstore-icon-512.png")
    }

    pub fn mipmap_dir(&self, density: &str) -> PathBuf {
        self.root.join(format!("app/src/main/res/mipmap-{density}"))
    }

    pub fn launcher_icon(&self, density: &str) -> PathBuf {
        self.mipmap_dir(density).join("ic_launcher.png")
    }

    pub fn round_launcher_icon(&self, density: &str) -> PathBuf {
        self.mipmap_dir(density).join("ic_launcher_round.png")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputArtifact {
    pub path: PathBuf,
    pub size: u32,
}

#[derive(Debug)]
pub struct GenerationReport {
    pub svg_path: PathBuf,
    pub artifacts: Vec<OutputArtifact>,
    pub skipped_paths: usize,
}

pub fn write_svg(layout: &OutputLayout, svg: &str) -> Result<PathBuf, IconError> {
    let path = layout.debug_svg();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| IconError::io(parent, e))?;
    }
    fs::write(&path, svg).map_err(|e| IconError::io(&path, e))?;
    Ok(path)
}

fn write_png(path: PathBuf, svg: &str, size: u32) -> Result<OutputArtifact, IconError> {
    let bytes = rasterize(svg, size)?;
    save_png(&path, &bytes)?;
    info!("generated {} ({size}x{size})", path.display());
    Ok(OutputArtifact { path, size })
}

/// Rasterizes `svg` into the Play Store icon and both launcher icons of every
/// density. Files written before a failure are left in place.
pub fn write_artifacts(layout: &OutputLayout, svg: &str) -> Result<Vec<OutputArtifact>, IconError> {
    let mut artifacts = Vec::with_capacity(1 + SIZE_TARGETS.len() * 2);
    info!("converting to {PLAY_STORE_SIZE}x{PLAY_STORE_SIZE} PNG");
    artifacts.push(write_png(layout.play_store_icon(), svg, PLAY_STORE_SIZE)?);

    for target in SIZE_TARGETS {
        // No separate round geometry exists, so both icons share the render.
        artifacts.push(write_png(layout.launcher_icon(target.density), svg, target.size)?);
        artifacts.push(write_png(
            layout.round_launcher_icon(target.density),
            svg,
            target.size,
        )?);
    }
    Ok(artifacts)
}

pub fn generate_icons(layout: &OutputLayout) -> Result<GenerationReport, IconError> {
    let drawable = parse_drawable(&layout.input())?;
    let svg = synthesize_svg(&drawable);
    let svg_path = write_svg(layout, &svg)?;
    let artifacts = write_artifacts(layout, &svg)?;
    Ok(GenerationReport {
        svg_path,
        artifacts,
        skipped_paths: drawable.skipped_paths,
    })
}
