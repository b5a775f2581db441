use alphamesh_mesh::Triangle;

/// Signed-area proxy for (p0, p1, p2).
///
/// This is the negated z component of the cross product (p1-p0) x (p2-p1):
/// positive for clockwise point order in image space (y grows downward),
/// negative for counterclockwise.
pub fn winding_value(t: &Triangle) -> i64 {
    let (a, b, c) = (t.p0, t.p1, t.p2);
    i64::from(b.y - a.y) * i64::from(c.x - b.x) - i64::from(b.x - a.x) * i64::from(c.y - b.y)
}

/// Forces a single consistent winding by swapping the first two points when
/// the proxy is non-negative.
///
/// Not idempotent: a second pass over an already-swapped triangle would swap
/// it back, so the pipeline runs this exactly once per emitted triangle.
pub fn orient_clockwise(t: &mut Triangle) {
    if winding_value(t) >= 0 {
        std::mem::swap(&mut t.p0, &mut t.p1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector2;

    #[test]
    fn negative_value_is_left_alone() {
        let mut t = Triangle::new(
            Vector2::new(0, 0),
            Vector2::new(3, 0),
            Vector2::new(0, 3),
        );
        assert!(winding_value(&t) < 0);
        let before = t;
        orient_clockwise(&mut t);
        assert_eq!(t, before);
    }

    #[test]
    fn non_negative_value_swaps_first_two_points() {
        let mut t = Triangle::new(
            Vector2::new(3, 0),
            Vector2::new(0, 3),
            Vector2::new(3, 3),
        );
        assert!(winding_value(&t) > 0);
        orient_clockwise(&mut t);
        assert_eq!(t.p0, Vector2::new(0, 3));
        assert_eq!(t.p1, Vector2::new(3, 0));
        assert_eq!(t.p2, Vector2::new(3, 3));
        assert!(winding_value(&t) < 0);
    }

    #[test]
    fn degenerate_triangle_stays_degenerate() {
        let mut t = Triangle::new(
            Vector2::new(0, 0),
            Vector2::new(1, 0),
            Vector2::new(2, 0),
        );
        assert_eq!(winding_value(&t), 0);
        orient_clockwise(&mut t);
        assert_eq!(winding_value(&t), 0);
        assert_eq!(t.p0, Vector2::new(1, 0));
    }

    #[test]
    fn one_pass_normalizes_any_orientation() {
        let points = [
            Vector2::new(0, 0),
            Vector2::new(7, 1),
            Vector2::new(2, 5),
        ];
        // All 6 orderings of the same three points end up consistent.
        let orders = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];
        for order in orders {
            let mut t = Triangle::new(points[order[0]], points[order[1]], points[order[2]]);
            orient_clockwise(&mut t);
            assert!(winding_value(&t) <= 0);
        }
    }
}
