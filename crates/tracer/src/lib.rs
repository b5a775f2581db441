//! Triangulates the opaque silhouette of an RGBA image into a flat 2-D mesh.
//!
//! The pipeline scans each row for opaque/transparent transitions, groups
//! rows with matching transition counts into regions (bridging single-row
//! gaps), threads a sliding window across density-sampled rows to emit
//! triangle strips, normalizes their winding, and maps the result to
//! position/normal/UV arrays for a host mesh container.
//!
//! ```
//! use alphamesh::{trace_mesh, TracerConfig};
//! use alphamesh_mesh::DefaultMesh;
//! use alphamesh_raster::PixelBuffer;
//!
//! let rgba = [255u8; 4 * 4 * 4].to_vec();
//! let image = PixelBuffer::from_rgba8(4, 4, rgba).unwrap();
//! let mesh: DefaultMesh = trace_mesh(&image, &TracerConfig::default()).unwrap();
//! assert!(mesh.triangle_count() > 0);
//! ```

mod attributes;
mod config;
mod error;
mod region;
mod scanline;
mod strip;
pub mod svg_writer;
mod winding;

pub use attributes::build_attributes;
pub use config::{Orientation, TracerConfig};
pub use error::TraceError;
pub use region::{build_regions, Region, RegionMap};
pub use scanline::{is_transparent, scan_rows, RowPoints};
pub use strip::generate_triangles;
pub use winding::{orient_clockwise, winding_value};

use alphamesh_mesh::{Triangle, VertexBuffers};
use alphamesh_raster::PixelBuffer;

/// Runs the full pipeline and hands the attribute arrays to `M`.
///
/// Fails with [`TraceError::EmptySilhouette`] when the alpha channel never
/// crosses the threshold. The buffer is only read; each call allocates its
/// own intermediate state, so concurrent calls on distinct buffers need no
/// synchronization.
pub fn trace_mesh<M: VertexBuffers>(
    image: &PixelBuffer,
    config: &TracerConfig,
) -> Result<M, TraceError> {
    let triangles = trace_triangles(image, config)?;
    Ok(build_attributes(
        &triangles,
        image.width(),
        image.height(),
        config.orientation,
    ))
}

/// The normalized triangle list in pixel coordinates, before attribute
/// mapping. Exposed for visual inspection alongside [`build_regions`];
/// consuming this instead of [`trace_mesh`] never changes what
/// [`trace_mesh`] would produce.
pub fn trace_triangles(
    image: &PixelBuffer,
    config: &TracerConfig,
) -> Result<Vec<Triangle>, TraceError> {
    let rows = scan_rows(image, config.threshold);
    let map = build_regions(&rows);
    if map.regions().is_empty() {
        return Err(TraceError::EmptySilhouette);
    }
    let mut triangles = generate_triangles(&map, config.detail);
    for triangle in &mut triangles {
        orient_clockwise(triangle);
    }
    Ok(triangles)
}
