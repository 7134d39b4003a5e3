use image::imageops::{self, FilterType};
use image::RgbImage;

use crate::error::MediaError;

/// Byte order of the three colour channels in a packed pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelOrder {
    Rgb,
    Bgr,
}

/// A decoded video frame, 3 bytes per pixel, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    order: ChannelOrder,
    pixels: Vec<u8>,
}

impl Frame {
    pub fn new(
        width: u32,
        height: u32,
        order: ChannelOrder,
        pixels: Vec<u8>,
    ) -> Result<Self, MediaError> {
        let expected = frame_len(width, height);
        if width == 0 || height == 0 || pixels.len() != expected {
            return Err(MediaError::FrameSize {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            order,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn order(&self) -> ChannelOrder {
        self.order
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Reorder channels to RGB if needed.
    pub fn into_rgb(mut self) -> Self {
        if self.order == ChannelOrder::Bgr {
            for px in self.pixels.chunks_exact_mut(3) {
                px.swap(0, 2);
            }
            self.order = ChannelOrder::Rgb;
        }
        self
    }

    /// Lanczos3 resample to `width`x`height`. The result is always RGB.
    pub fn resize(self, width: u32, height: u32) -> Result<Self, MediaError> {
        let frame = self.into_rgb();
        if frame.width == width && frame.height == height {
            return Ok(frame);
        }
        let (src_width, src_height, actual) = (frame.width, frame.height, frame.pixels.len());
        let image = RgbImage::from_raw(src_width, src_height, frame.pixels).ok_or(
            MediaError::FrameSize {
                width: src_width,
                height: src_height,
                expected: frame_len(src_width, src_height),
                actual,
            },
        )?;
        let resized = imageops::resize(&image, width, height, FilterType::Lanczos3);
        Frame::new(width, height, ChannelOrder::Rgb, resized.into_raw())
    }
}

pub fn frame_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 3
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, order: ChannelOrder, px: [u8; 3]) -> Frame {
        let pixels = px.repeat((width * height) as usize);
        Frame::new(width, height, order, pixels).unwrap()
    }

    #[test]
    fn rejects_mismatched_buffer() {
        let err = Frame::new(4, 2, ChannelOrder::Rgb, vec![0; 10]).unwrap_err();
        assert!(matches!(
            err,
            MediaError::FrameSize {
                expected: 24,
                actual: 10,
                ..
            }
        ));
        assert!(Frame::new(0, 2, ChannelOrder::Rgb, Vec::new()).is_err());
    }

    #[test]
    fn bgr_frames_are_swapped() {
        let frame = solid(2, 2, ChannelOrder::Bgr, [10, 20, 30]).into_rgb();
        assert_eq!(frame.order(), ChannelOrder::Rgb);
        assert_eq!(&frame.pixels()[..3], &[30, 20, 10]);
    }

    #[test]
    fn rgb_frames_are_untouched() {
        let frame = solid(2, 1, ChannelOrder::Rgb, [1, 2, 3]).into_rgb();
        assert_eq!(frame.pixels(), &[1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn resize_to_display_surface() {
        let frame = solid(64, 36, ChannelOrder::Bgr, [0, 0, 255])
            .resize(800, 300)
            .unwrap();
        assert_eq!((frame.width(), frame.height()), (800, 300));
        assert_eq!(frame.pixels().len(), frame_len(800, 300));
        assert_eq!(frame.order(), ChannelOrder::Rgb);
        // Solid input stays solid through the filter.
        let centre = frame_len(800, 150) + 400 * 3;
        assert_eq!(&frame.pixels()[centre..centre + 3], &[255, 0, 0]);
    }
}
