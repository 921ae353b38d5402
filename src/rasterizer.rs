use crate::error::IconError;
use crate::png_writer::encode_png_rgba8;
use resvg::tiny_skia::{Pixmap, Transform};

/// Renders `svg` into a `size`×`size` RGBA PNG. The SVG is scaled to fit and
/// centered, so its viewBox decides the aspect.
pub fn rasterize(svg: &str, size: u32) -> Result<Vec<u8>, IconError> {
    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opt).map_err(|e| IconError::Rasterize(e.to_string()))?;

    let mut pixmap = Pixmap::new(size, size)
        .ok_or_else(|| IconError::Rasterize(format!("cannot allocate {size}x{size} pixmap")))?;

    let svg_size = tree.size();
    let scale = (size as f32 / svg_size.width()).min(size as f32 / svg_size.height());
    let offset_x = (size as f32 - svg_size.width() * scale) / 2.0;
    let offset_y = (size as f32 - svg_size.height() * scale) / 2.0;
    let transform = Transform::from_scale(scale, scale).post_translate(offset_x, offset_y);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    encode_png_rgba8(size, size, &rgba)
}
