use crate::VertexBuffers;

/// Flat per-vertex attribute arrays.
///
/// Vertices are grouped in consecutive triples, one triple per triangle, in
/// triangle emission order. There is no index buffer; shared vertices are
/// duplicated.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBuffers {
    positions: Vec<f32>,
    normals: Vec<f32>,
    uvs: Vec<f32>,
}

impl MeshBuffers {
    /// Positions, 3 floats per vertex.
    pub fn positions(&self) -> &[f32] {
        self.positions.as_slice()
    }

    /// Normals, 3 floats per vertex.
    pub fn normals(&self) -> &[f32] {
        self.normals.as_slice()
    }

    /// Texture coordinates, 2 floats per vertex.
    pub fn uvs(&self) -> &[f32] {
        self.uvs.as_slice()
    }

    pub fn triangle_count(&self) -> usize {
        self.vertex_count() / 3
    }
}

impl VertexBuffers for MeshBuffers {
    fn from_attributes(positions: Vec<f32>, normals: Vec<f32>, uvs: Vec<f32>) -> Self {
        debug_assert_eq!(positions.len() % 9, 0);
        debug_assert_eq!(normals.len(), positions.len());
        debug_assert_eq!(uvs.len() / 2, positions.len() / 3);
        Self {
            positions,
            normals,
            uvs,
        }
    }

    fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }
}
