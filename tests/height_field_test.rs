use flow_prims::resources::height_field::{HeightField, load_height_field, luminance, sample};
use image::{DynamicImage, GrayImage, ImageBuffer, Luma, Rgb, RgbImage, Rgba, RgbaImage};

#[test]
fn should_weight_channels_like_luma() {
    assert_eq!(luminance([0, 0, 0]), 0);
    assert_eq!(luminance([u16::MAX; 3]), 255);
    assert_eq!(luminance([u16::MAX, 0, 0]), 76);
    assert_eq!(luminance([0, u16::MAX, 0]), 150);
    assert_eq!(luminance([0, 0, u16::MAX]), 29);
}

#[test]
fn should_read_first_pixel_at_origin() {
    let field = GrayImage::from_fn(4, 3, |x, y| Luma([(x * 40 + y * 60) as u8]));
    assert_eq!(sample(&field, 1.0, 0.0, 0.0), 0.0);
    assert_eq!(sample(&field, 1.0, 0.5, 0.5), 140.0 / 255.0);
}

#[test]
fn should_clamp_far_corner_to_last_pixel() {
    let field = GrayImage::from_fn(4, 3, |x, y| Luma([(x * 40 + y * 60) as u8]));
    // (3, 2) holds 240
    assert_eq!(sample(&field, 1.0, 1.0, 1.0), 240.0 / 255.0);
    assert_eq!(sample(&field, 1.0, 1.0, 0.0), 120.0 / 255.0);
}

#[test]
fn should_truncate_instead_of_interpolating() {
    let field = GrayImage::from_fn(4, 1, |x, _| Luma([(x * 40) as u8]));
    // 4 * 0.49 = 1.96 lands on column 1
    assert_eq!(sample(&field, 1.0, 0.49, 0.0), 40.0 / 255.0);
    assert_eq!(sample(&field, 1.0, 0.5, 0.0), 80.0 / 255.0);
}

#[test]
fn should_scale_by_magnitude() {
    let field = RgbImage::from_pixel(1, 1, Rgb([255, 255, 255]));
    assert_eq!(sample(&field, 3.5, 0.3, 0.7), 3.5);
    assert_eq!(sample(&field, -1.0, 0.0, 0.0), -1.0);
}

#[test]
fn should_widen_8_bit_channels() {
    let rgb = RgbImage::from_pixel(1, 1, Rgb([255, 128, 0]));
    assert_eq!(rgb.color_at(0, 0), [u16::MAX, 128 * 257, 0]);

    let rgba = RgbaImage::from_pixel(1, 1, Rgba([255, 0, 0, 0]));
    assert_eq!(rgba.color_at(0, 0), [u16::MAX, 0, 0]);

    let gray = GrayImage::from_pixel(2, 1, Luma([1]));
    assert_eq!(gray.bounds(), (2, 1));
    assert_eq!(gray.color_at(1, 0), [257; 3]);
}

#[test]
fn should_keep_16_bit_precision_in_dynamic_images() {
    let deep = DynamicImage::ImageRgb16(ImageBuffer::from_pixel(1, 1, Rgb([u16::MAX, 0, 0])));
    assert_eq!(deep.color_at(0, 0), [u16::MAX, 0, 0]);
    assert_eq!(sample(&deep, 255.0, 0.0, 0.0).round(), 76.0);

    let shallow = DynamicImage::ImageRgb8(RgbImage::from_pixel(3, 2, Rgb([255, 0, 0])));
    assert_eq!(shallow.bounds(), (3, 2));
    assert_eq!(shallow.color_at(2, 1), [u16::MAX, 0, 0]);

    let luma: ImageBuffer<Luma<u16>, Vec<u16>> = ImageBuffer::from_pixel(1, 1, Luma([1000]));
    let luma = DynamicImage::ImageLuma16(luma);
    assert_eq!(luma.color_at(0, 0), [1000; 3]);
}

#[test]
fn should_return_zero_for_empty_fields() {
    let field = GrayImage::new(0, 0);
    assert_eq!(sample(&field, 10.0, 0.5, 0.5), 0.0);
}

#[test]
fn should_report_missing_height_field_file() {
    let err = load_height_field("does/not/exist.png").unwrap_err();
    assert!(format!("{:#}", err).contains("does/not/exist.png"));
}
