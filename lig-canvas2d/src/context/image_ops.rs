//! Pixel readback and PNG/JPEG output for Canvas2dContext.

use super::Canvas2dContext;
use crate::error::{Canvas2dError, Canvas2dResult};
use crate::geometry::CanvasColor;
use image::codecs::jpeg::JpegEncoder;

/// Byte length of a `width` x `height` RGBA region.
fn image_data_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}

impl Canvas2dContext {
    /// Read a rectangle of straight-alpha RGBA pixels.
    ///
    /// Pixels outside the canvas read as transparent black.
    pub fn get_image_data(&self, x: i32, y: i32, width: u32, height: u32) -> Vec<u8> {
        let mut data = vec![0u8; image_data_len(width, height)];
        let src = self.pixmap.data();

        for dy in 0..height {
            for dx in 0..width {
                let src_x = x + dx as i32;
                let src_y = y + dy as i32;
                if src_x < 0
                    || src_y < 0
                    || src_x >= self.width as i32
                    || src_y >= self.height as i32
                {
                    continue;
                }

                let src_idx = (src_y as u32 * self.width + src_x as u32) as usize * 4;
                let dst_idx = (dy as usize * width as usize + dx as usize) * 4;
                let pixel = &src[src_idx..src_idx + 4];

                // Convert from premultiplied alpha to straight alpha
                match pixel[3] {
                    0 => {}
                    255 => data[dst_idx..dst_idx + 4].copy_from_slice(pixel),
                    a => {
                        let alpha_f = a as f32 / 255.0;
                        for c in 0..3 {
                            data[dst_idx + c] = (pixel[c] as f32 / alpha_f).min(255.0) as u8;
                        }
                        data[dst_idx + 3] = a;
                    }
                }
            }
        }

        data
    }

    /// Read a single straight-alpha pixel, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<CanvasColor> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let data = self.get_image_data(x as i32, y as i32, 1, 1);
        Some(CanvasColor::from_rgba8(data[0], data[1], data[2], data[3]))
    }

    /// Export canvas as PNG data.
    ///
    /// # Arguments
    /// * `ppi` - Pixels per inch for PNG metadata (default 72)
    pub fn to_png(&self, ppi: Option<f32>) -> Canvas2dResult<Vec<u8>> {
        let ppi = ppi.unwrap_or(72.0);

        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            // Set pixel density metadata (pixels per meter)
            let ppm = (ppi.max(0.0) / 0.0254).round() as u32;
            encoder.set_pixel_dims(Some(png::PixelDimensions {
                xppu: ppm,
                yppu: ppm,
                unit: png::Unit::Meter,
            }));

            let mut writer = encoder.write_header()?;
            let data = self.get_image_data(0, 0, self.width, self.height);
            writer.write_image_data(&data)?;
        }
        Ok(buf)
    }

    /// Export canvas as baseline JPEG data at `quality` (1-100).
    ///
    /// JPEG has no alpha channel; translucent pixels come out composited
    /// over black.
    pub fn to_jpeg(&self, quality: u8) -> Canvas2dResult<Vec<u8>> {
        if quality == 0 || quality > 100 {
            return Err(Canvas2dError::InvalidQuality(quality));
        }

        // Premultiplied RGB is exactly the color over a black backdrop
        let rgb: Vec<u8> = self
            .pixmap
            .data()
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();

        let mut buf = Vec::new();
        JpegEncoder::new_with_quality(&mut buf, quality).encode(
            &rgb,
            self.width,
            self.height,
            image::ExtendedColorType::Rgb8,
        )?;
        log::debug!(target: "canvas", "encoded {}x{} JPEG, {} bytes", self.width, self.height, buf.len());
        Ok(buf)
    }
}
