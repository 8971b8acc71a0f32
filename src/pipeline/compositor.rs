//! Output buffer shared by all workers.

use parking_lot::Mutex;
use sepia_tone::{BufferError, Rgb, RgbBuffer};

/// Owns the output image for the duration of a run.
///
/// Workers paste finished tiles through [`paste`](Compositor::paste), which
/// holds the buffer lock only for the copy. Tiles from the tiler never
/// overlap, so paste order does not affect the final image.
#[derive(Debug)]
pub struct Compositor {
    canvas: Mutex<RgbBuffer>,
}

impl Compositor {
    /// Allocate a `width x height` canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        Self {
            canvas: Mutex::new(RgbBuffer::new(width, height, background)),
        }
    }

    /// Copy `tile` into the canvas at `(left, top)`.
    pub fn paste(&self, tile: &RgbBuffer, left: u32, top: u32) -> Result<(), BufferError> {
        self.canvas.lock().paste(tile, left, top)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.canvas.lock().dimensions()
    }

    /// Take the finished image.
    pub fn into_inner(self) -> RgbBuffer {
        self.canvas.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_background() {
        let compositor = Compositor::new(3, 2, Rgb::new(9, 9, 9));
        assert_eq!(compositor.dimensions(), (3, 2));

        let canvas = compositor.into_inner();
        assert!(canvas.pixels().iter().all(|&px| px == Rgb::new(9, 9, 9)));
    }

    #[test]
    fn test_paste_from_many_threads() {
        let compositor = Compositor::new(8, 8, Rgb::BLACK);

        std::thread::scope(|scope| {
            for row in 0..8u32 {
                let compositor = &compositor;
                scope.spawn(move || {
                    let strip = RgbBuffer::new(8, 1, Rgb::new(row as u8, 0, 0));
                    compositor.paste(&strip, 0, row).unwrap();
                });
            }
        });

        let canvas = compositor.into_inner();
        for y in 0..8 {
            assert_eq!(canvas.get(5, y), Some(Rgb::new(y as u8, 0, 0)));
        }
    }

    #[test]
    fn test_paste_out_of_bounds() {
        let compositor = Compositor::new(2, 2, Rgb::BLACK);
        let tile = RgbBuffer::new(2, 2, Rgb::WHITE);
        assert!(compositor.paste(&tile, 1, 0).is_err());
    }
}
