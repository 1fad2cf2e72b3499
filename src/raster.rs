use crate::foundation::error::{VectreeError, VectreeResult};
use crate::tree::Tree;

/// The result of rasterization: straight-alpha RGBA8 pixels, row-major,
/// no padding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data; `width * height * 4` bytes.
    pub rgba: Vec<u8>,
}

impl RasterImage {
    /// Total number of bytes. Equals `width * height * 4`.
    pub fn byte_count(&self) -> usize {
        self.rgba.len()
    }
}

/// Parses SVG data and rasterizes it at `scale` (1.0 = native size).
pub fn rasterize(data: &[u8], scale: f32) -> VectreeResult<RasterImage> {
    let tree = Tree::from_data(data)?;
    rasterize_tree(&tree, scale)
}

/// Reads an SVG file and rasterizes it at `scale` (1.0 = native size).
pub fn rasterize_file(path: impl AsRef<std::path::Path>, scale: f32) -> VectreeResult<RasterImage> {
    let tree = Tree::from_file(path)?;
    rasterize_tree(&tree, scale)
}

/// Rasterizes an already-parsed tree at `scale` (1.0 = native size).
///
/// Fails with [`VectreeError::EmptyImage`] when the document has nothing to
/// draw, and with [`VectreeError::InvalidSize`] when the scaled dimensions
/// round below one pixel. On failure nothing is returned; there are no
/// partially filled buffers.
///
/// The engine renders premultiplied alpha; the output is converted to
/// straight alpha so that RGB channels are independent of coverage, which is
/// what alpha-aware image encoders expect.
#[tracing::instrument(skip(tree))]
pub fn rasterize_tree(tree: &Tree, scale: f32) -> VectreeResult<RasterImage> {
    if tree.is_empty() {
        return Err(VectreeError::EmptyImage);
    }

    let size = tree.size();
    let width = (size.width * scale).round();
    let height = (size.height * scale).round();
    if !width.is_finite() || !height.is_finite() || width < 1.0 || height < 1.0 {
        return Err(VectreeError::InvalidSize);
    }
    let (width, height) = (width as u32, height as u32);

    // Zero-initialized; pixels not touched by the render stay transparent.
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| VectreeError::Engine(format!("pixmap allocation failed ({width}x{height})")))?;

    let ts = resvg::tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(tree.engine(), ts, &mut pixmap.as_mut());

    let mut rgba = pixmap.take();
    unpremultiply_rgba8_in_place(&mut rgba);

    Ok(RasterImage {
        width,
        height,
        rgba,
    })
}

/// Converts premultiplied RGBA8 to straight alpha in place.
///
/// For `0 < a < 255` each channel becomes `min(255, round(c * 255 / a))`;
/// `a == 0` pixels carry no color and `a == 255` pixels are already straight,
/// so both are left untouched. The clamp absorbs rounding error accumulated
/// when the engine premultiplied.
fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u32;
        if a == 0 || a == 255 {
            continue;
        }
        px[0] = unpremultiply_channel(px[0], a);
        px[1] = unpremultiply_channel(px[1], a);
        px[2] = unpremultiply_channel(px[2], a);
    }
}

fn unpremultiply_channel(c: u8, a: u32) -> u8 {
    // Integer rounding: (c * 255 + a/2) / a == round(c * 255 / a).
    ((c as u32 * 255 + a / 2) / a).min(255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_full_alpha_are_identity() {
        let mut px = vec![10, 20, 30, 0, 40, 50, 60, 255];
        let original = px.clone();
        unpremultiply_rgba8_in_place(&mut px);
        assert_eq!(px, original);
    }

    #[test]
    fn half_alpha_recovers_straight_channels() {
        // (64, 0, 32) premultiplied at a=128 is roughly (128, 0, 64) straight.
        let mut px = vec![64, 0, 32, 128];
        unpremultiply_rgba8_in_place(&mut px);
        assert_eq!(px, vec![128, 0, 64, 128]);
    }

    #[test]
    fn rounding_overflow_clamps_to_255() {
        // 200 * 255 / 100 would be 510; invalid premultiplied data must
        // still clamp instead of wrapping.
        let mut px = vec![200, 0, 0, 100];
        unpremultiply_rgba8_in_place(&mut px);
        assert_eq!(px[0], 255);
    }

    #[test]
    fn repremultiply_round_trips_within_one() {
        // For every valid (alpha, premultiplied channel) pair, converting to
        // straight alpha and back reproduces the input within +/- 1.
        for a in 1u32..255 {
            for c in 0..=a {
                let straight = unpremultiply_channel(c as u8, a);
                let back = ((straight as u32 * a) as f32 / 255.0).round() as u32;
                let diff = back.abs_diff(c);
                assert!(diff <= 1, "a={a} c={c} straight={straight} back={back}");
            }
        }
    }
}
