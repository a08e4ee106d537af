use bagscreen::{BoundingBox, RawDetection};
use image::{DynamicImage, ImageBuffer, Rgb};

/// Creates a 100x100 dark test scan.
pub fn create_test_scan() -> DynamicImage {
    let img = ImageBuffer::from_fn(100, 100, |_, _| Rgb([40u8, 40u8, 60u8]));
    DynamicImage::ImageRgb8(img)
}

/// Creates a raw detection with a box placed well inside the test scan.
pub fn make_raw(class: &str, confidence: f32) -> RawDetection {
    make_raw_at(class, confidence, BoundingBox::new(20.0, 30.0, 70.0, 80.0))
}

/// Creates a raw detection with an explicit box.
pub fn make_raw_at(class: &str, confidence: f32, bbox: BoundingBox) -> RawDetection {
    RawDetection {
        class: class.to_string(),
        confidence,
        bbox,
    }
}

/// Absolute-difference float comparison for confidences and samples.
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-6
}
