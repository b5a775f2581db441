mod buffers;
mod geometry;

pub use buffers::*;
pub use geometry::*;

/// A reasonable default mesh to select for unopinionated consumers.
pub type DefaultMesh = MeshBuffers;

/// The seam between the triangulation core and a host mesh container.
///
/// The core only ever produces three flat attribute arrays; a host 3-D engine
/// implements this trait to receive them directly into its own vertex-buffer
/// type instead of copying out of [`MeshBuffers`].
pub trait VertexBuffers: Sized {
    /// Creates the container from flat attribute arrays.
    ///
    /// # Arguments
    ///
    /// * `positions` - 3 floats per vertex.
    /// * `normals` - 3 floats per vertex, same vertex count as `positions`.
    /// * `uvs` - 2 floats per vertex, same vertex count as `positions`.
    fn from_attributes(positions: Vec<f32>, normals: Vec<f32>, uvs: Vec<f32>) -> Self;

    /// Returns the number of vertices stored. Always a multiple of 3.
    fn vertex_count(&self) -> usize;
}
