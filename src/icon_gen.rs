//! Icon composition and generation.
//!
//! Each variant renders the same dumbbell glyph over a radial gradient
//! background; the three results land in the app's asset catalog as
//! fixed-name 1024x1024 RGB PNGs, next to a refreshed Contents.json.

use crate::contents_json::{self, ImageEntry};
use crate::palette;
use crate::render::{self, BBox};
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, Rgb, RgbImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

pub const ICON_SIZE: u32 = 1024;

// Dumbbell layout on the 1024 canvas.
const BAR_WIDTH: i32 = 400;
const BAR_HEIGHT: i32 = 60;
const BAR_SEGMENTS: i32 = 20;
const PLATE_WIDTH: i32 = 120;
const PLATE_HEIGHT: i32 = 280;
const PLATE_RADIUS: i32 = 30;
// How far each plate extends past its end of the bar.
const PLATE_OVERHANG: i32 = 20;
const INSET_MARGIN: i32 = 20;

/// One named icon configuration: background gradient pair plus the two
/// colors driving the dumbbell's left-to-right progression.
pub struct IconVariant {
    pub name: &'static str,
    pub filename: &'static str,
    pub background_center: Rgb<u8>,
    pub background_edge: Rgb<u8>,
    pub primary: Rgb<u8>,
    pub accent: Rgb<u8>,
}

pub const VARIANTS: [IconVariant; 3] = [
    IconVariant {
        name: "main",
        filename: "AppIcon.png",
        background_center: palette::CARD,
        background_edge: palette::BACKGROUND,
        primary: palette::PRIMARY,
        accent: palette::ACCENT,
    },
    // The dark gradient pair is its own tuning, not derived from the palette.
    IconVariant {
        name: "dark",
        filename: "AppIcon-Dark.png",
        background_center: Rgb([20, 30, 50]),
        background_edge: Rgb([10, 15, 30]),
        primary: palette::PRIMARY_LIGHT,
        accent: palette::ACCENT,
    },
    // Fully desaturated rendering for the monochrome icon slot.
    IconVariant {
        name: "tinted",
        filename: "AppIcon-Tinted.png",
        background_center: Rgb([60, 60, 60]),
        background_edge: Rgb([30, 30, 30]),
        primary: Rgb([180, 180, 180]),
        accent: Rgb([220, 220, 220]),
    },
];

/// Draws the dumbbell glyph centered on the canvas, mutating it in place.
///
/// Later draws land on top of earlier ones; there is no blending. The bar is
/// painted after the left plate and the right plate last, so the plates cap
/// both ends of the gradient.
pub fn draw_dumbbell(img: &mut RgbImage, primary: Rgb<u8>, accent: Rgb<u8>) {
    let center = (ICON_SIZE / 2) as i32;

    let bar_left = center - BAR_WIDTH / 2;
    let bar_top = center - BAR_HEIGHT / 2;

    let plate_top = center - PLATE_HEIGHT / 2;
    let plate_bottom = center + PLATE_HEIGHT / 2;

    let left_plate_left = bar_left - PLATE_OVERHANG;
    let left_plate = BBox::new(
        left_plate_left,
        plate_top,
        left_plate_left + PLATE_WIDTH,
        plate_bottom,
    );

    let right_plate_right = center + BAR_WIDTH / 2 + PLATE_OVERHANG;
    let right_plate = BBox::new(
        right_plate_right - PLATE_WIDTH,
        plate_top,
        right_plate_right,
        plate_bottom,
    );

    // Left plate with a lighter inset detail. The inset tone is derived from
    // the plate's own color so the monochrome variant stays monochrome.
    render::rounded_rect(img, &left_plate, PLATE_RADIUS, primary);
    render::rounded_rect(
        img,
        &left_plate.inset(INSET_MARGIN),
        PLATE_RADIUS - 10,
        palette::interpolate(primary, palette::WHITE, 0.3),
    );

    // Bar, as abutting segments stepping from primary to accent.
    let segment_width = f64::from(BAR_WIDTH) / f64::from(BAR_SEGMENTS);
    for i in 0..BAR_SEGMENTS {
        let ratio = f64::from(i) / f64::from(BAR_SEGMENTS - 1);
        let color = palette::interpolate(primary, accent, ratio);
        let seg_left = bar_left + (f64::from(i) * segment_width) as i32;
        // One extra column on the right edge so rounding cannot open a seam.
        let seg_right = bar_left + (f64::from(i + 1) * segment_width) as i32 + 1;
        render::fill_rect(
            img,
            &BBox::new(seg_left, bar_top, seg_right, bar_top + BAR_HEIGHT),
            color,
        );
    }

    // Right plate with its inset detail.
    render::rounded_rect(img, &right_plate, PLATE_RADIUS, accent);
    render::rounded_rect(
        img,
        &right_plate.inset(INSET_MARGIN),
        PLATE_RADIUS - 10,
        palette::interpolate(accent, palette::WHITE, 0.2),
    );
}

/// Renders one variant: gradient background, then the dumbbell on top.
pub fn render_variant(variant: &IconVariant) -> RgbImage {
    let mut img = render::radial_gradient(
        ICON_SIZE,
        variant.background_center,
        variant.background_edge,
    );
    draw_dumbbell(&mut img, variant.primary, variant.accent);
    img
}

/// Generates every variant and writes the icon set to `output`, or to the
/// app's asset catalog when no override is given.
pub fn generate_icons(output: Option<PathBuf>) -> Result<()> {
    let out_dir = match output {
        Some(dir) => dir,
        None => default_output_dir()?,
    };

    println!("Output directory: {}", out_dir.display());
    create_dir_all(&out_dir).context("Can't create output directory")?;

    for variant in &VARIANTS {
        println!("Generating {} icon...", variant.name);
        let icon = render_variant(variant);
        save_png(&icon, &out_dir.join(variant.filename))?;
        println!("  ✓ Saved {}", variant.filename);
    }

    let slots = vec![
        ImageEntry::universal(VARIANTS[0].filename),
        ImageEntry::universal(VARIANTS[1].filename).with_luminosity("dark"),
        ImageEntry::universal(VARIANTS[2].filename).with_luminosity("tinted"),
    ];
    contents_json::write_contents_json(&out_dir, slots)?;
    println!("  ✓ Saved Contents.json");

    println!("\nAll icons generated successfully!");
    Ok(())
}

/// Resolves the asset catalog inside the app project, relative to the
/// running executable (`target/<profile>/<bin>`, so the project root is
/// three ancestors up).
fn default_output_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Can't locate the running executable")?;
    let project_root = exe
        .ancestors()
        .nth(3)
        .context("Executable has no enclosing project directory")?;

    Ok(project_root
        .join("gymtrackpromax")
        .join("Assets.xcassets")
        .join("AppIcon.appiconset"))
}

// Encode an RGB image as PNG with compression.
fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    let encoder =
        PngEncoder::new_with_quality(&mut writer, CompressionType::Best, PngFilterType::Adaptive);
    encoder
        .write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgb8)
        .with_context(|| format!("Failed to encode {}", path.display()))?;

    writer.flush()?;
    Ok(())
}
