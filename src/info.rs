use crate::error::{ResizeError, Result};
use image::ImageReader;
use std::fs;
use std::path::Path;

/// Prints the properties a resize run cares about: dimensions, color
/// type, format and size on disk.
pub fn print_image_info(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ResizeError::FileNotFound(path.to_path_buf()));
    }

    let reader = ImageReader::open(path)?;
    let format = reader.format();
    let img = reader.decode()?;
    let metadata = fs::metadata(path)?;

    crate::info!("📋 Image Information:");
    crate::info!("  📁 File: {:?}", path);
    crate::info!("  📏 Dimensions: {}x{} pixels", img.width(), img.height());
    crate::info!("  🎨 Color type: {:?}", img.color());
    crate::info!("  🎭 Format: {:?}", format);
    crate::info!("  📦 File size: {} bytes", metadata.len());

    let total_pixels = img.width() as u64 * img.height() as u64;
    crate::info!("  🔢 Total pixels: {}", total_pixels);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::DynamicImage;
    use tempfile::TempDir;

    #[test]
    fn test_print_image_info_not_found() {
        let result = print_image_info(Path::new("nonexistent.png"));
        assert!(matches!(result, Err(ResizeError::FileNotFound(_))));
    }

    #[test]
    fn test_print_image_info_valid_image() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("texture.png");
        DynamicImage::new_rgb8(8, 8).save(&path).unwrap();

        assert!(print_image_info(&path).is_ok());
    }

    #[test]
    fn test_print_image_info_corrupt_image() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.png");
        std::fs::write(&path, b"not a png").unwrap();

        let result = print_image_info(&path);
        assert!(matches!(result, Err(ResizeError::ImageProcessing(_))));
    }
}
