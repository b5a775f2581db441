/// Which image axis the scanned rows run along.
///
/// `Vertical` expects the pixel buffer to have been rotated 90° clockwise
/// (see `PixelBuffer::rotated90`) before tracing, so the engine walks what
/// were the source image's columns; the attribute formulas swap the axes
/// back when emitting positions and UVs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracerConfig {
    /// Alpha bytes below this value classify as transparent.
    ///
    /// The intended range is 0..=255 but any value is accepted verbatim:
    /// a threshold <= 0 classifies every pixel opaque, a threshold > 255
    /// classifies every pixel transparent.
    pub threshold: i32,

    /// Tessellation density in (0, 1].
    ///
    /// Controls how many rows per region are sampled when generating
    /// triangles; values near 1 sample nearly every row, values near 0
    /// produce the coarsest mesh. Non-positive values degrade to the
    /// coarsest sampling rather than erroring.
    pub detail: f32,

    pub orientation: Orientation,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            threshold: 40,
            detail: 0.06,
            orientation: Orientation::Horizontal,
        }
    }
}
