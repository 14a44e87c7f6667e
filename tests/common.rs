use image::{DynamicImage, GenericImageView, ImageReader};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn create_rgb_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    DynamicImage::new_rgb8(width, height).save(&path).unwrap();
    path
}

pub fn create_rgb_jpg(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    DynamicImage::new_rgb8(width, height).save(&path).unwrap();
    path
}

pub fn create_text_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    let mut file = File::create(&path).unwrap();
    file.write_all(contents).unwrap();
    path
}

pub fn image_dimensions(path: &Path) -> (u32, u32) {
    ImageReader::open(path)
        .unwrap()
        .decode()
        .unwrap()
        .dimensions()
}
