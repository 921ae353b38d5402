use crate::error::IconError;
use std::fs;
use std::path::Path;

/// Encodes straight (non-premultiplied) RGBA8 pixels as a PNG.
pub fn encode_png_rgba8(w: u32, h: u32, rgba: &[u8]) -> Result<Vec<u8>, IconError> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, w, h);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(rgba)?;
        writer.finish()?;
    }
    Ok(out)
}

/// Writes `bytes` to `path`, creating parent directories and replacing any
/// existing file.
pub fn save_png(path: &Path, bytes: &[u8]) -> Result<(), IconError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| IconError::io(parent, e))?;
    }
    fs::write(path, bytes).map_err(|e| IconError::io(path, e))
}
