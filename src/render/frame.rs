use crate::foundation::core::Rgb8;

/// A rendered frame: tightly packed RGB8, row-major, no padding or header.
///
/// `data.len() == width * height * 3` always holds for frames produced by the rasterizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgb {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGB bytes.
    pub data: Vec<u8>,
}

impl FrameRgb {
    /// Bytes per pixel.
    pub const CHANNELS: usize = 3;

    /// Allocate a frame filled with one color.
    pub fn filled(width: u32, height: u32, color: Rgb8) -> Self {
        let n = (width as usize) * (height as usize);
        let mut data = Vec::with_capacity(n * Self::CHANNELS);
        for _ in 0..n {
            data.extend_from_slice(&color.to_array());
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Expected byte length for a `width`×`height` frame.
    pub fn byte_len_for(width: u32, height: u32) -> usize {
        (width as usize) * (height as usize) * Self::CHANNELS
    }

    /// Color at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * Self::CHANNELS;
        let px = self.data.get(i..i + Self::CHANNELS)?;
        Some(Rgb8::new(px[0], px[1], px[2]))
    }

    /// Number of pixels exactly equal to `color`.
    pub fn count_color(&self, color: Rgb8) -> usize {
        let want = color.to_array();
        self.data
            .chunks_exact(Self::CHANNELS)
            .filter(|px| *px == want)
            .count()
    }

    /// Borrow the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
