use font8x8::{BASIC_FONTS, UnicodeFonts};
use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;

use crate::models::Detection;

/// Box outline thickness in pixels.
const BOX_THICKNESS: u32 = 2;
/// Cell size of the bitmap font before scaling.
const GLYPH_SIZE: u32 = 8;
/// Upscale factor for chip text.
const TEXT_SCALE: u32 = 2;
/// Padding inside the ID chip.
const CHIP_PADDING: u32 = 2;

const TEXT_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// Render bounding boxes and ID chips onto a fresh RGB copy of the source.
///
/// The source image is left untouched; the output is always 8-bit RGB no
/// matter what the decoder produced. Detections draw in sequence order, so a
/// later box paints over an earlier one where they overlap. With no
/// detections the result is just the converted source.
pub fn annotate(image: &DynamicImage, detections: &[Detection]) -> RgbImage {
    let mut canvas = image.to_rgb8();
    for det in detections {
        draw_detection(&mut canvas, det);
    }
    canvas
}

fn draw_detection(canvas: &mut RgbImage, det: &Detection) {
    let (width, height) = canvas.dimensions();
    if width == 0 || height == 0 {
        return;
    }

    let x1 = (det.bbox.x1.max(0.0) as i32).min(width as i32 - 1);
    let y1 = (det.bbox.y1.max(0.0) as i32).min(height as i32 - 1);
    let x2 = (det.bbox.x2.max(0.0) as i32).min(width as i32 - 1);
    let y2 = (det.bbox.y2.max(0.0) as i32).min(height as i32 - 1);
    if x2 <= x1 || y2 <= y1 {
        // Box clamps to nothing visible.
        return;
    }

    let w = (x2 - x1) as u32;
    let h = (y2 - y1) as u32;

    // Nested hollow rectangles give the 2-pixel outline.
    for inset in 0..BOX_THICKNESS {
        let rw = w.saturating_sub(2 * inset);
        let rh = h.saturating_sub(2 * inset);
        if rw == 0 || rh == 0 {
            break;
        }
        let rect = Rect::at(x1 + inset as i32, y1 + inset as i32).of_size(rw, rh);
        draw_hollow_rect_mut(canvas, rect, det.color);
    }

    // Filled chip sized to the ID text, sitting on the box's top-left corner
    // and clamped to the canvas top.
    let label = det.id.to_string();
    let chip_w = label.len() as u32 * GLYPH_SIZE * TEXT_SCALE + 2 * CHIP_PADDING;
    let chip_h = GLYPH_SIZE * TEXT_SCALE + 2 * CHIP_PADDING;
    let chip_y = (y1 - chip_h as i32).max(0);
    let chip = Rect::at(x1, chip_y).of_size(chip_w, chip_h);
    draw_filled_rect_mut(canvas, chip, det.color);

    draw_label(
        canvas,
        &label,
        x1 + CHIP_PADDING as i32,
        chip_y + CHIP_PADDING as i32,
    );
}

/// Blit scaled bitmap glyphs in the high-contrast text color.
fn draw_label(canvas: &mut RgbImage, text: &str, origin_x: i32, origin_y: i32) {
    let advance = (GLYPH_SIZE * TEXT_SCALE) as i32;
    let mut pen_x = origin_x;

    for ch in text.chars() {
        let Some(glyph) = BASIC_FONTS.get(ch) else {
            pen_x += advance;
            continue;
        };
        for (row, &bits) in glyph.iter().enumerate() {
            for col in 0..GLYPH_SIZE {
                if (bits >> col) & 1 == 0 {
                    continue;
                }
                for dy in 0..TEXT_SCALE {
                    for dx in 0..TEXT_SCALE {
                        let px = pen_x + (col * TEXT_SCALE + dx) as i32;
                        let py = origin_y + (row as u32 * TEXT_SCALE + dy) as i32;
                        if px >= 0
                            && py >= 0
                            && (px as u32) < canvas.width()
                            && (py as u32) < canvas.height()
                        {
                            canvas.put_pixel(px as u32, py as u32, TEXT_COLOR);
                        }
                    }
                }
            }
        }
        pen_x += advance;
    }
}
