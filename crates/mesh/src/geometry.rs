/// Integer pixel coordinate used for transition points and raw triangles.
pub type Point2 = cgmath::Vector2<i32>;

// We rely on Point2 being repr(c).
static_assertions::assert_eq_size!(Point2, [i32; 2]);
static_assertions::assert_eq_align!(Point2, i32);

/// Three pixel-space points. Connectivity is implicit; after winding
/// normalization the points are always listed in one fixed orientation.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(C)]
pub struct Triangle {
    pub p0: Point2,
    pub p1: Point2,
    pub p2: Point2,
}

impl Triangle {
    pub fn new(p0: Point2, p1: Point2, p2: Point2) -> Self {
        Self { p0, p1, p2 }
    }
}

impl std::default::Default for Triangle {
    fn default() -> Self {
        Self {
            p0: Point2 { x: 0, y: 0 },
            p1: Point2 { x: 0, y: 0 },
            p2: Point2 { x: 0, y: 0 },
        }
    }
}
