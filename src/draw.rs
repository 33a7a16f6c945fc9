//! Raster primitives.
//!
//! Everything composites with the standard source-over operator so that
//! later layers occlude earlier ones exactly as far as their alpha says.
//! Coordinates are `f32`; pixel coverage is tested at pixel centers
//! (`x + 0.5`, `y + 0.5`) with no antialiasing — the shapes here are either
//! soft glows or strokes wide enough not to need it.

use crate::theme::{lerp_color, Rgb};
use image::{GrayImage, Luma, Rgba, RgbaImage};

/// Source-over blend of `src` onto the pixel at `(x, y)`.
/// Out-of-bounds writes are silently ignored.
pub fn blend_pixel(img: &mut RgbaImage, x: i64, y: i64, src: Rgba<u8>) {
    if x < 0 || y < 0 || x >= img.width() as i64 || y >= img.height() as i64 {
        return;
    }
    let sa = src[3] as f32 / 255.0;
    if sa <= 0.0 {
        return;
    }
    let dst = img.get_pixel_mut(x as u32, y as u32);
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        *dst = Rgba([0, 0, 0, 0]);
        return;
    }
    for i in 0..3 {
        let sc = src[i] as f32;
        let dc = dst[i] as f32;
        dst[i] = ((sc * sa + dc * da * (1.0 - sa)) / out_a).round() as u8;
    }
    dst[3] = (out_a * 255.0).round() as u8;
}

/// Fill an axis-aligned ellipse centered at `(cx, cy)`.
pub fn fill_ellipse(img: &mut RgbaImage, cx: f32, cy: f32, rx: f32, ry: f32, color: Rgba<u8>) {
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    let x_min = (cx - rx).floor() as i64;
    let x_max = (cx + rx).ceil() as i64;
    let y_min = (cy - ry).floor() as i64;
    let y_max = (cy + ry).ceil() as i64;
    for y in y_min..=y_max {
        for x in x_min..=x_max {
            let dx = (x as f32 + 0.5 - cx) / rx;
            let dy = (y as f32 + 0.5 - cy) / ry;
            if dx * dx + dy * dy <= 1.0 {
                blend_pixel(img, x, y, color);
            }
        }
    }
}

pub fn fill_circle(img: &mut RgbaImage, cx: f32, cy: f32, r: f32, color: Rgba<u8>) {
    fill_ellipse(img, cx, cy, r, r, color);
}

/// Fill a rounded rectangle spanning `(x0, y0)..(x1, y1)` with corner
/// radius `radius`.
pub fn fill_rounded_rect(
    img: &mut RgbaImage,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    radius: f32,
    color: Rgba<u8>,
) {
    let radius = radius.max(0.0);
    for y in y0.floor() as i64..=y1.ceil() as i64 {
        for x in x0.floor() as i64..=x1.ceil() as i64 {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            if px < x0 || px > x1 || py < y0 || py > y1 {
                continue;
            }
            // Distance past the corner-circle centers; zero inside the
            // straight-edged cross section.
            let qx = if px < x0 + radius {
                x0 + radius - px
            } else if px > x1 - radius {
                px - (x1 - radius)
            } else {
                0.0
            };
            let qy = if py < y0 + radius {
                y0 + radius - py
            } else if py > y1 - radius {
                py - (y1 - radius)
            } else {
                0.0
            };
            if qx * qx + qy * qy <= radius * radius {
                blend_pixel(img, x, y, color);
            }
        }
    }
}

/// Stroke a straight segment with the given width.
pub fn draw_thick_line(
    img: &mut RgbaImage,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    width: f32,
    color: Rgba<u8>,
) {
    let half = (width / 2.0).max(0.5);
    let x_min = (x0.min(x1) - half).floor() as i64;
    let x_max = (x0.max(x1) + half).ceil() as i64;
    let y_min = (y0.min(y1) - half).floor() as i64;
    let y_max = (y0.max(y1) + half).ceil() as i64;
    for y in y_min..=y_max {
        for x in x_min..=x_max {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            if segment_distance(px, py, x0, y0, x1, y1) <= half {
                blend_pixel(img, x, y, color);
            }
        }
    }
}

/// Radial glow: color fades `c1` → `c2` and alpha falls off linearly from
/// `peak_alpha` towards the rim.
pub fn gradient_circle(
    img: &mut RgbaImage,
    cx: f32,
    cy: f32,
    radius: f32,
    c1: Rgb,
    c2: Rgb,
    peak_alpha: u8,
) {
    if radius <= 0.0 {
        return;
    }
    let x_min = (cx - radius).floor() as i64;
    let x_max = (cx + radius).ceil() as i64;
    let y_min = (cy - radius).floor() as i64;
    let y_max = (cy + radius).ceil() as i64;
    for y in y_min..=y_max {
        for x in x_min..=x_max {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist > radius {
                continue;
            }
            let t = dist / radius;
            let c = lerp_color(c1, c2, t);
            let a = (peak_alpha as f32 * (1.0 - t * 0.3)) as u8;
            blend_pixel(img, x, y, Rgba([c[0], c[1], c[2], a]));
        }
    }
}

/// Stroke an elliptical arc into a mask.
///
/// The ellipse is inscribed in the bbox `(x0, y0)..(x1, y1)` and the stroke
/// thickens inward by `width`. Angles are degrees measured clockwise from
/// 3 o'clock with the y axis pointing down, and the range may run past 360
/// (e.g. 180 → 405 covers the top bowl plus a 45° hook).
pub fn stroke_mask_arc(
    mask: &mut GrayImage,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    start_deg: f32,
    end_deg: f32,
    width: f32,
) {
    let cx = (x0 + x1) / 2.0;
    let cy = (y0 + y1) / 2.0;
    let rx = (x1 - x0) / 2.0;
    let ry = (y1 - y0) / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    let irx = (rx - width).max(0.0);
    let iry = (ry - width).max(0.0);
    let (w, h) = mask.dimensions();
    let px_min = (x0.floor() as i64).max(0);
    let px_max = (x1.ceil() as i64).min(w as i64 - 1);
    let py_min = (y0.floor() as i64).max(0);
    let py_max = (y1.ceil() as i64).min(h as i64 - 1);
    for y in py_min..=py_max {
        for x in px_min..=px_max {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let outer = (dx / rx).powi(2) + (dy / ry).powi(2);
            if outer > 1.0 {
                continue;
            }
            if irx > 0.0 && iry > 0.0 && (dx / irx).powi(2) + (dy / iry).powi(2) < 1.0 {
                continue;
            }
            let mut ang = dy.atan2(dx).to_degrees();
            if ang < 0.0 {
                ang += 360.0;
            }
            if ang < start_deg {
                ang += 360.0;
            }
            if ang <= end_deg {
                mask.put_pixel(x as u32, y as u32, Luma([255]));
            }
        }
    }
}

/// Stroke a straight segment into a mask.
pub fn stroke_mask_line(mask: &mut GrayImage, x0: f32, y0: f32, x1: f32, y1: f32, width: f32) {
    let half = (width / 2.0).max(0.5);
    let (w, h) = mask.dimensions();
    let px_min = ((x0.min(x1) - half).floor() as i64).max(0);
    let px_max = ((x0.max(x1) + half).ceil() as i64).min(w as i64 - 1);
    let py_min = ((y0.min(y1) - half).floor() as i64).max(0);
    let py_max = ((y0.max(y1) + half).ceil() as i64).min(h as i64 - 1);
    for y in py_min..=py_max {
        for x in px_min..=px_max {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            if segment_distance(px, py, x0, y0, x1, y1) <= half {
                mask.put_pixel(x as u32, y as u32, Luma([255]));
            }
        }
    }
}

/// Composite a vertical `c1` → `c2` gradient field through a mask.
///
/// The gradient spans `field_y0 .. field_y0 + field_height`; a pixel only
/// becomes visible where the mask is nonzero, with the mask value used as
/// source alpha. This is what gives the letter mark its color run: the
/// gradient and the silhouette are built independently and combined here.
pub fn apply_masked_vertical_gradient(
    img: &mut RgbaImage,
    mask: &GrayImage,
    field_y0: f32,
    field_height: f32,
    c1: Rgb,
    c2: Rgb,
) {
    let span = (field_height - 1.0).max(1.0);
    for (x, y, m) in mask.enumerate_pixels() {
        let a = m[0];
        if a == 0 {
            continue;
        }
        let t = (y as f32 - field_y0) / span;
        let c = lerp_color(c1, c2, t);
        blend_pixel(img, x as i64, y as i64, Rgba([c[0], c[1], c[2], a]));
    }
}

fn segment_distance(px: f32, py: f32, x0: f32, y0: f32, x1: f32, y1: f32) -> f32 {
    let vx = x1 - x0;
    let vy = y1 - y0;
    let len_sq = vx * vx + vy * vy;
    let t = if len_sq <= f32::EPSILON {
        0.0
    } else {
        (((px - x0) * vx + (py - y0) * vy) / len_sq).clamp(0.0, 1.0)
    };
    let nx = x0 + vx * t;
    let ny = y0 + vy * t;
    ((px - nx).powi(2) + (py - ny).powi(2)).sqrt()
}
