use crate::constants::{
    DEFAULT_EXTENSIONS, DEFAULT_TARGET_HEIGHT, DEFAULT_TARGET_WIDTH, MAX_TARGET_DIMENSION,
};
use crate::error::{ResizeError, Result};
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use std::fs;
use std::path::Path;

/// Configuration for a batch run: target dimensions and the set of
/// eligible file extensions. Replaces the edit-the-source configuration
/// of the original asset script.
#[derive(Debug, Clone)]
pub struct ResizeOptions {
    pub width: u32,
    pub height: u32,
    pub extensions: Vec<String>,
}

impl ResizeOptions {
    /// Builds validated options. Missing values fall back to the asset
    /// pipeline defaults (512x512, `png` + `jpg`).
    pub fn new(width: Option<u32>, height: Option<u32>, extensions: Vec<String>) -> Result<Self> {
        let width = width.unwrap_or(DEFAULT_TARGET_WIDTH);
        let height = height.unwrap_or(DEFAULT_TARGET_HEIGHT);
        if width == 0 || height == 0 || width > MAX_TARGET_DIMENSION || height > MAX_TARGET_DIMENSION
        {
            return Err(ResizeError::InvalidDimensions(
                width,
                height,
                MAX_TARGET_DIMENSION,
            ));
        }

        let extensions = if extensions.is_empty() {
            DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
        } else {
            extensions
        };

        Ok(Self {
            width,
            height,
            extensions,
        })
    }
}

/// Loads an image file and returns it along with its size on disk.
///
/// # Arguments
/// * `path` - Path to the image file to load
///
/// # Returns
/// * `Ok((image, file_size))` - The decoded image and its file size in bytes
/// * `Err(ResizeError)` - If the file is missing or cannot be decoded
pub fn load_image(path: &Path) -> Result<(DynamicImage, u64)> {
    if !path.exists() {
        return Err(ResizeError::FileNotFound(path.to_path_buf()));
    }

    let file_size = fs::metadata(path)?.len();
    let img = ImageReader::open(path)?.decode()?;

    Ok((img, file_size))
}

/// Scales the image to the exact target dimensions. Aspect ratio is NOT
/// preserved; distortion is accepted so every texture lands on the same
/// footprint.
pub fn scale_image(img: &mut DynamicImage, options: &ResizeOptions) {
    if img.dimensions() != (options.width, options.height) {
        *img = img.resize_exact(
            options.width,
            options.height,
            image::imageops::FilterType::Lanczos3,
        );
    }
}

/// Maps a file path to the format it will be re-encoded as. The file is
/// always saved back in its own format, so this follows the extension.
pub fn save_format_for(path: &Path) -> Result<ImageFormat> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| ResizeError::UnsupportedFormat(path.display().to_string()))?;

    ImageFormat::from_extension(ext).ok_or_else(|| ResizeError::UnsupportedFormat(ext.to_string()))
}

/// Writes the image back to `path` in the given format, overwriting
/// whatever was there.
pub fn save_image(img: &DynamicImage, path: &Path, format: ImageFormat) -> Result<()> {
    match format {
        // The JPEG encoder rejects alpha channels
        ImageFormat::Jpeg => {
            DynamicImage::ImageRgb8(img.to_rgb8()).save_with_format(path, ImageFormat::Jpeg)?;
        }
        _ => {
            img.save_with_format(path, format)?;
        }
    }

    Ok(())
}

/// Per-file pipeline: load -> scale -> save back to the same path. The
/// decoded image is dropped on return, so at most one texture is held in
/// memory at a time.
///
/// # Returns
/// * `Ok((size_before, size_after))` - File sizes in bytes around the re-encode
/// * `Err(ResizeError)` - On the first failing step; the file is only
///   overwritten once scaling has succeeded
pub fn resize_in_place(path: &Path, options: &ResizeOptions) -> Result<(u64, u64)> {
    // Resolve the save format up front so an unknown extension fails
    // before the original file is touched.
    let format = save_format_for(path)?;

    let (mut img, size_before) = load_image(path)?;
    let (orig_width, orig_height) = img.dimensions();

    scale_image(&mut img, options);
    save_image(&img, path, format)?;

    let size_after = fs::metadata(path)?.len();

    crate::verbose!(
        "{}: {}x{} -> {}x{}",
        path.display(),
        orig_width,
        orig_height,
        options.width,
        options.height
    );

    Ok((size_before, size_after))
}
