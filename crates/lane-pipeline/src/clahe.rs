//! Contrast-limited adaptive histogram equalization
//!
//! Per-tile histogram equalization with a clipped, redistributed
//! histogram and bilinear blending between neighboring tile lookup
//! tables. Normalizes uneven road lighting (shadow, glare) before
//! edge detection.

use image::GrayImage;

const BINS: usize = 256;

/// Equalize contrast over a `tiles` x `tiles` grid with the given clip
/// limit (a multiplier over the uniform histogram level).
pub fn equalize(image: &GrayImage, clip_limit: f32, tiles: u32) -> GrayImage {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return image.clone();
    }
    let tiles = tiles.max(1);
    let tile_w = width.div_ceil(tiles).max(1);
    let tile_h = height.div_ceil(tiles).max(1);
    let tiles_x = width.div_ceil(tile_w);
    let tiles_y = height.div_ceil(tile_h);

    let luts = tile_luts(image, clip_limit, tile_w, tile_h, tiles_x, tiles_y);

    let mut out = GrayImage::new(width, height);
    for y in 0..height {
        let (ty0, ty1, wy) = blend_coords(y, tile_h, tiles_y);
        for x in 0..width {
            let (tx0, tx1, wx) = blend_coords(x, tile_w, tiles_x);

            let v = image.get_pixel(x, y).0[0] as usize;
            let v00 = lut_at(&luts, tiles_x, tx0, ty0)[v] as f32;
            let v10 = lut_at(&luts, tiles_x, tx1, ty0)[v] as f32;
            let v01 = lut_at(&luts, tiles_x, tx0, ty1)[v] as f32;
            let v11 = lut_at(&luts, tiles_x, tx1, ty1)[v] as f32;

            let top = v00 * (1.0 - wx) + v10 * wx;
            let bottom = v01 * (1.0 - wx) + v11 * wx;
            let value = (top * (1.0 - wy) + bottom * wy).round().clamp(0.0, 255.0);
            out.put_pixel(x, y, image::Luma([value as u8]));
        }
    }
    out
}

/// Neighboring tile indices and blend weight for one axis.
///
/// Pixels before the first tile center or past the last one pin to the
/// border tile instead of blending.
fn blend_coords(pos: u32, tile_size: u32, tiles: u32) -> (u32, u32, f32) {
    let f = (pos as f32 + 0.5) / tile_size as f32 - 0.5;
    if f <= 0.0 {
        return (0, 0, 0.0);
    }
    let t = f.floor() as u32;
    if t + 1 >= tiles {
        return (tiles - 1, tiles - 1, 0.0);
    }
    (t, t + 1, f - t as f32)
}

fn lut_at(luts: &[[u8; BINS]], tiles_x: u32, tx: u32, ty: u32) -> &[u8; BINS] {
    &luts[(ty * tiles_x + tx) as usize]
}

fn tile_luts(
    image: &GrayImage,
    clip_limit: f32,
    tile_w: u32,
    tile_h: u32,
    tiles_x: u32,
    tiles_y: u32,
) -> Vec<[u8; BINS]> {
    let (width, height) = image.dimensions();
    let mut luts = Vec::with_capacity((tiles_x * tiles_y) as usize);

    for ty in 0..tiles_y {
        for tx in 0..tiles_x {
            let x0 = tx * tile_w;
            let y0 = ty * tile_h;
            let x1 = (x0 + tile_w).min(width);
            let y1 = (y0 + tile_h).min(height);
            let count = ((x1 - x0) * (y1 - y0)) as u32;

            let mut hist = [0u32; BINS];
            for y in y0..y1 {
                for x in x0..x1 {
                    hist[image.get_pixel(x, y).0[0] as usize] += 1;
                }
            }

            // Clip and redistribute the excess uniformly
            let clip = ((clip_limit * count as f32 / BINS as f32) as u32).max(1);
            let mut excess = 0u32;
            for bin in hist.iter_mut() {
                if *bin > clip {
                    excess += *bin - clip;
                    *bin = clip;
                }
            }
            let bonus = excess / BINS as u32;
            let remainder = (excess % BINS as u32) as usize;
            for (i, bin) in hist.iter_mut().enumerate() {
                *bin += bonus + u32::from(i < remainder);
            }

            let mut lut = [0u8; BINS];
            let scale = 255.0 / count.max(1) as f32;
            let mut cdf = 0u32;
            for (i, &bin) in hist.iter().enumerate() {
                cdf += bin;
                lut[i] = (cdf as f32 * scale).round().clamp(0.0, 255.0) as u8;
            }
            luts.push(lut);
        }
    }
    luts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_dimensions_match() {
        let img = GrayImage::from_fn(100, 64, |x, y| image::Luma([((x + y) % 256) as u8]));
        let out = equalize(&img, 2.0, 8);
        assert_eq!(out.dimensions(), (100, 64));
    }

    #[test]
    fn test_uniform_image_stays_flat() {
        let img = GrayImage::from_pixel(64, 64, image::Luma([90]));
        let out = equalize(&img, 2.0, 8);
        let first = out.get_pixel(0, 0).0[0];
        for p in out.pixels() {
            assert_eq!(p.0[0], first);
        }
    }

    #[test]
    fn test_spreads_low_contrast_ramp() {
        // A dim, low-contrast ramp should use more of the value range
        let img = GrayImage::from_fn(64, 64, |x, _| image::Luma([100 + (x / 8) as u8]));
        let out = equalize(&img, 4.0, 4);
        let in_max = img.pixels().map(|p| p.0[0]).max().unwrap();
        let out_max = out.pixels().map(|p| p.0[0]).max().unwrap();
        assert!(out_max > in_max);
    }
}
