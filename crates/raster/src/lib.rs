use core::fmt;

/// Bytes per pixel in the buffers this crate accepts.
pub const CHANNELS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "rgba size mismatch: expected {expected} bytes, got {actual}")
            }
        }
    }
}

impl std::error::Error for Error {}

/// A decoded, row-major RGBA8 image.
///
/// This is the engine's only input format. Decoding from a file or URL is the
/// host platform's job; the buffer arrives here already expanded to 4 bytes
/// per pixel and is never mutated by the tracing core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wraps a decoded RGBA8 byte vector.
    ///
    /// Fails if `data` is not exactly `width * height * 4` bytes.
    pub fn from_rgba8(width: usize, height: usize, data: Vec<u8>) -> Result<Self, Error> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or(Error::SizeMismatch {
                expected: usize::MAX,
                actual: data.len(),
            })?;

        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// One row of pixels, `width * 4` bytes.
    pub fn row(&self, y: usize) -> &[u8] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.width * CHANNELS;
        &self.data[start..start + self.width * CHANNELS]
    }

    pub fn rgba(&self, x: usize, y: usize) -> [u8; 4] {
        assert!(x < self.width && y < self.height, "pixel index out of bounds");
        let idx = (y * self.width + x) * CHANNELS;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }

    /// The opacity byte at (x, y).
    pub fn alpha(&self, x: usize, y: usize) -> u8 {
        assert!(x < self.width && y < self.height, "pixel index out of bounds");
        self.data[(y * self.width + x) * CHANNELS + 3]
    }

    /// Returns a copy of this buffer rotated 90° clockwise about its center.
    ///
    /// The result has swapped dimensions with `dst(h-1-y, x) = src(x, y)`.
    /// VERTICAL-orientation tracing scans a buffer that went through this
    /// transform, so the engine walks what were the source image's columns.
    pub fn rotated90(&self) -> Self {
        let (w, h) = (self.width, self.height);
        let mut data = vec![0u8; self.data.len()];
        for y in 0..h {
            for x in 0..w {
                let src = (y * w + x) * CHANNELS;
                // Destination row stride is the new width, h.
                let dst = (x * h + (h - 1 - y)) * CHANNELS;
                data[dst..dst + CHANNELS].copy_from_slice(&self.data[src..src + CHANNELS]);
            }
        }
        Self {
            width: h,
            height: w,
            data,
        }
    }
}
