//! Rasterization of presented tiles and PNG export

use crate::algorithm::artwork::Artwork;
use crate::io::configuration::STROKE_COLOR;
use crate::io::error::{ArtError, Result};
use crate::spatial::layout::Tile;
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

// Pixel span covered by [start, start + length), clamped to the canvas
fn pixel_span(start: f64, length: f64, limit: u32) -> std::ops::Range<u32> {
    let clamp = |value: f64| value.round().clamp(0.0, f64::from(limit)) as u32;
    clamp(start)..clamp(start + length)
}

/// Paint `tiles` over a stroke-colored `width` x `height` canvas
pub fn render_tiles(tiles: &[Tile], width: u32, height: u32) -> RgbaImage {
    let mut img: RgbaImage = ImageBuffer::from_pixel(width, height, Rgba(STROKE_COLOR));

    for tile in tiles {
        let color = Rgba(tile.color.to_rgba8());
        for y in pixel_span(tile.rect.y, tile.rect.height, height) {
            for x in pixel_span(tile.rect.x, tile.rect.width, width) {
                if let Some(pixel) = img.get_pixel_mut_checked(x, y) {
                    *pixel = color;
                }
            }
        }
    }

    img
}

/// Render the artwork at the size it was generated for
pub fn render_artwork(artwork: &Artwork) -> RgbaImage {
    let size = artwork.size();
    render_tiles(&artwork.tiles(), size.width, size.height)
}

/// Render the artwork and save it as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The artwork has a zero width or height
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_artwork_as_png(artwork: &Artwork, output_path: &Path) -> Result<()> {
    let size = artwork.size();
    if size.width == 0 || size.height == 0 {
        return Err(crate::io::error::invalid_parameter(
            "size",
            &format!("{}x{}", size.width, size.height),
            &"cannot export an empty canvas",
        ));
    }

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ArtError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    render_artwork(artwork)
        .save(output_path)
        .map_err(|e| ArtError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
