use crate::bitmap::Bitmap;
use crate::color::Color;
use crate::font::{self, ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};

/// Drawing surface over an RGB24 screen buffer.
///
/// All coordinates are signed and every primitive clips against the buffer,
/// so callers can draw sprites that are partially off-screen.
pub struct Frame<'a> {
    pixels: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> Frame<'a> {
    pub fn new(pixels: &'a mut [u8], width: usize, height: usize) -> Self {
        debug_assert_eq!(pixels.len(), width * height * 3);
        Self {
            pixels,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self, color: Color) {
        for pixel in self.pixels.chunks_exact_mut(3) {
            pixel[0] = color.r;
            pixel[1] = color.g;
            pixel[2] = color.b;
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some((y as usize * self.width + x as usize) * 3)
    }

    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = color.r;
            self.pixels[idx + 1] = color.g;
            self.pixels[idx + 2] = color.b;
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|idx| {
            Color::new_rgb(self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2])
        })
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(w).min(self.width as i32);
        let y1 = y.saturating_add(h).min(self.height as i32);
        for py in y0..y1 {
            for px in x0..x1 {
                self.put_pixel(px, py, color);
            }
        }
    }

    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        let r2 = radius * radius;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= r2 {
                    self.put_pixel(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Draw the set bits of `bitmap` stretched to `w` x `h` pixels using
    /// nearest-neighbour sampling.
    pub fn blit_scaled(&mut self, bitmap: &Bitmap, x: i32, y: i32, w: i32, h: i32, color: Color) {
        if w <= 0 || h <= 0 {
            return;
        }
        for ty in 0..h {
            let sy = ty as usize * bitmap.height() / h as usize;
            for tx in 0..w {
                let sx = tx as usize * bitmap.width() / w as usize;
                if bitmap.get(sx, sy) {
                    self.put_pixel(x + tx, y + ty, color);
                }
            }
        }
    }

    pub fn draw_text(&mut self, text: &str, x: i32, y: i32, scale: i32, color: Color) {
        let mut origin = x;
        for c in text.chars() {
            let rows = font::glyph(c);
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                        self.fill_rect(
                            origin + col * scale,
                            y + row as i32 * scale,
                            scale,
                            scale,
                            color,
                        );
                    }
                }
            }
            origin += ADVANCE * scale;
        }
    }

    /// Draw `text` horizontally centred on `cx`, with its top edge at `y`.
    pub fn draw_text_centered(&mut self, text: &str, cx: i32, y: i32, scale: i32, color: Color) {
        let x = cx - font::text_width(text, scale) / 2;
        self.draw_text(text, x, y, scale, color);
    }

    /// Height of one line of text at `scale`.
    pub fn line_height(scale: i32) -> i32 {
        GLYPH_HEIGHT * scale
    }
}

#[cfg(test)]
mod tests {
    use super::Frame;
    use crate::{Bitmap, Color};

    const W: usize = 16;
    const H: usize = 12;

    fn buffer() -> Vec<u8> {
        vec![0u8; W * H * 3]
    }

    #[test]
    fn clear_fills_every_pixel() {
        let mut buf = buffer();
        let mut frame = Frame::new(&mut buf, W, H);
        frame.clear(Color::BLUE);
        assert!(buf.chunks_exact(3).all(|px| px == [0, 0, 255]));
    }

    #[test]
    fn rects_are_clipped_to_the_buffer() {
        let mut buf = buffer();
        let mut frame = Frame::new(&mut buf, W, H);
        frame.fill_rect(-4, -4, 6, 6, Color::WHITE);
        frame.fill_rect(14, 10, 10, 10, Color::RED);

        assert_eq!(frame.pixel(0, 0), Some(Color::WHITE));
        assert_eq!(frame.pixel(1, 1), Some(Color::WHITE));
        assert_eq!(frame.pixel(2, 2), Some(Color::BLACK));
        assert_eq!(frame.pixel(15, 11), Some(Color::RED));
        assert_eq!(frame.pixel(16, 11), None);
    }

    #[test]
    fn circles_cover_their_radius() {
        let mut buf = buffer();
        let mut frame = Frame::new(&mut buf, W, H);
        frame.fill_circle(8, 6, 2, Color::GREEN);
        assert_eq!(frame.pixel(8, 6), Some(Color::GREEN));
        assert_eq!(frame.pixel(10, 6), Some(Color::GREEN));
        assert_eq!(frame.pixel(8, 4), Some(Color::GREEN));
        assert_eq!(frame.pixel(10, 8), Some(Color::BLACK));
    }

    #[test]
    fn blit_scales_masks_up() {
        let bitmap = Bitmap::parse(&["#.", ".#"]).unwrap();
        let mut buf = buffer();
        let mut frame = Frame::new(&mut buf, W, H);
        frame.blit_scaled(&bitmap, 0, 0, 4, 4, Color::WHITE);

        assert_eq!(frame.pixel(0, 0), Some(Color::WHITE));
        assert_eq!(frame.pixel(1, 1), Some(Color::WHITE));
        assert_eq!(frame.pixel(2, 0), Some(Color::BLACK));
        assert_eq!(frame.pixel(3, 3), Some(Color::WHITE));
        assert_eq!(frame.pixel(0, 3), Some(Color::BLACK));
    }

    #[test]
    fn text_sets_glyph_pixels() {
        let mut buf = buffer();
        let mut frame = Frame::new(&mut buf, W, H);
        // 'I' has a full top bar across columns 1..=3.
        frame.draw_text("I", 0, 0, 1, Color::WHITE);
        assert_eq!(frame.pixel(0, 0), Some(Color::BLACK));
        assert_eq!(frame.pixel(1, 0), Some(Color::WHITE));
        assert_eq!(frame.pixel(2, 3), Some(Color::WHITE));
        assert_eq!(frame.pixel(4, 3), Some(Color::BLACK));
    }
}
