use alphamesh_mesh::{Triangle, VertexBuffers};

use crate::config::Orientation;

/// Every vertex carries the same normal; the mesh is flat and faces one
/// fixed direction.
const NORMAL: [f32; 3] = [0.0, -1.0, 0.0];

/// Maps normalized triangles into flat position / normal / UV arrays.
///
/// `width` and `height` are the scanned buffer's dimensions. Positions are
/// divided by the source image's natural width in both modes; for
/// `Vertical` that is the buffer height, because the buffer arrived
/// pre-rotated 90°.
///
/// `Horizontal` flips the vertical axis (image row 0 is the top, UV origin
/// is the bottom); `Vertical` swaps the axes back instead, composing with
/// the pre-rotation.
pub fn build_attributes<M: VertexBuffers>(
    triangles: &[Triangle],
    width: usize,
    height: usize,
    orientation: Orientation,
) -> M {
    let vertex_count = triangles.len() * 3;
    let mut positions = Vec::with_capacity(vertex_count * 3);
    let mut normals = Vec::with_capacity(vertex_count * 3);
    let mut uvs = Vec::with_capacity(vertex_count * 2);

    let w = width as f32;
    let h = height as f32;
    let scale = match orientation {
        Orientation::Horizontal => w,
        Orientation::Vertical => h,
    };

    for triangle in triangles {
        for p in [triangle.p0, triangle.p1, triangle.p2] {
            let x = p.x as f32;
            let y = p.y as f32;
            match orientation {
                Orientation::Horizontal => {
                    positions.extend_from_slice(&[x / scale, (h - y) / scale, 0.0]);
                    uvs.extend_from_slice(&[x / w, (h - y) / h]);
                }
                Orientation::Vertical => {
                    positions.extend_from_slice(&[y / scale, x / scale, 0.0]);
                    uvs.extend_from_slice(&[y / h, x / w]);
                }
            }
            normals.extend_from_slice(&NORMAL);
        }
    }

    M::from_attributes(positions, normals, uvs)
}
