use image::{DynamicImage, GenericImageView};
use proptest::prelude::*;
use std::path::Path;
use tex_resize::batch::is_eligible_file;
use tex_resize::processing::{save_format_for, scale_image, ResizeOptions};

proptest! {
    #[test]
    fn resize_options_dimensions_in_range(
        width in 1u32..=16_384u32,
        height in 1u32..=16_384u32,
    ) {
        let options = ResizeOptions::new(Some(width), Some(height), vec![]);
        prop_assert!(options.is_ok());
    }

    #[test]
    fn resize_options_rejects_zero_width(height in 1u32..=16_384u32) {
        let result = ResizeOptions::new(Some(0), Some(height), vec![]);
        prop_assert!(result.is_err());
    }

    #[test]
    fn scale_image_always_lands_on_target(
        src_width in 1u32..=64u32,
        src_height in 1u32..=64u32,
        dst_width in 1u32..=64u32,
        dst_height in 1u32..=64u32,
    ) {
        let mut img = DynamicImage::new_rgb8(src_width, src_height);
        let options = ResizeOptions::new(Some(dst_width), Some(dst_height), vec![]).unwrap();

        scale_image(&mut img, &options);

        prop_assert_eq!(img.dimensions(), (dst_width, dst_height));
    }

    #[test]
    fn default_extensions_match_lowercase_only(stem in "[a-z][a-z0-9]{0,8}") {
        let exts: Vec<String> = vec!["png".to_string(), "jpg".to_string()];

        let png = format!("{}.png", stem);
        let jpg = format!("{}.jpg", stem);
        let png_upper = format!("{}.PNG", stem);
        let jpeg = format!("{}.jpeg", stem);
        let txt = format!("{}.txt", stem);

        prop_assert!(is_eligible_file(Path::new(&png), &exts));
        prop_assert!(is_eligible_file(Path::new(&jpg), &exts));

        prop_assert!(!is_eligible_file(Path::new(&png_upper), &exts));
        prop_assert!(!is_eligible_file(Path::new(&jpeg), &exts));
        prop_assert!(!is_eligible_file(Path::new(&txt), &exts));
    }

    #[test]
    fn save_format_resolves_for_default_extensions(stem in "[a-z][a-z0-9]{0,8}") {
        let png = format!("{}.png", stem);
        let jpg = format!("{}.jpg", stem);
        prop_assert!(save_format_for(Path::new(&png)).is_ok());
        prop_assert!(save_format_for(Path::new(&jpg)).is_ok());
    }
}
