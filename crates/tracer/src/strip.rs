use alphamesh_mesh::{Point2, Triangle};

use crate::region::{Region, RegionMap};

/// Fixed three-slot sliding window.
///
/// Once full, every push drops the oldest point and yields a triangle from
/// the window contents in age order.
struct TriWindow {
    points: [Point2; 3],
    len: usize,
}

impl TriWindow {
    fn new() -> Self {
        Self {
            points: [Point2 { x: 0, y: 0 }; 3],
            len: 0,
        }
    }

    fn push(&mut self, p: Point2) -> Option<Triangle> {
        if self.len == 3 {
            self.points.rotate_left(1);
            self.points[2] = p;
        } else {
            self.points[self.len] = p;
            self.len += 1;
        }
        (self.len == 3).then(|| Triangle::new(self.points[0], self.points[1], self.points[2]))
    }
}

/// How many row point lists to skip between samples within one region.
///
/// Smaller `detail` values produce a larger step and a coarser mesh. The
/// result is clamped to a minimum of 1, which absorbs every degenerate
/// ratio: non-positive `detail` (including the infinite ratio at exactly
/// zero), single-row regions, and NaN. Genuinely huge finite ratios
/// saturate the cast, leaving only the boundary rows sampled.
fn sample_step(region: &Region, detail: f32) -> usize {
    let span = (region.end - region.start) as f32;
    let raw = (region.rows.len() as f32 - 3.0) / (span * detail);
    if raw.is_finite() && raw >= 1.0 {
        raw as usize
    } else {
        1
    }
}

fn push_row(window: &mut TriWindow, out: &mut Vec<Triangle>, row: &[Point2], slot: usize) {
    let end = row.len().min(slot + 3);
    for m in slot..end {
        if let Some(triangle) = window.push(row[m]) {
            out.push(triangle);
        }
    }
}

/// Threads a sliding window across each region's sampled rows, once per pair
/// of adjacent transition slots, emitting a connected strip of triangles that
/// approximates the silhouette between successive boundaries.
///
/// For every region the first and last row point lists are always processed
/// so the region's boundary is captured regardless of the stride.
pub fn generate_triangles(map: &RegionMap, detail: f32) -> Vec<Triangle> {
    let mut triangles = Vec::new();
    for slot in (map.min_transitions..=map.max_transitions).step_by(2) {
        for region in &map.regions {
            let rows = region.rows.as_slice();
            if rows.is_empty() {
                continue;
            }
            let step = sample_step(region, detail);
            let mut window = TriWindow::new();

            push_row(&mut window, &mut triangles, &rows[0], slot);
            let mut i = step;
            while i + 1 < rows.len() {
                push_row(&mut window, &mut triangles, &rows[i], slot);
                i += step;
            }
            if rows.len() > 1 {
                push_row(&mut window, &mut triangles, &rows[rows.len() - 1], slot);
            }
        }
    }
    triangles
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector2;

    fn span_region(start: usize, end: usize, width: i32) -> Region {
        let rows = (start..=end)
            .map(|y| vec![Vector2::new(0, y as i32), Vector2::new(width, y as i32)])
            .collect();
        Region {
            start,
            end,
            transitions: 2,
            rows,
        }
    }

    fn map_of(regions: Vec<Region>) -> RegionMap {
        let max_transitions = regions.iter().map(|r| r.transitions).max().unwrap_or(0);
        RegionMap {
            regions,
            max_transitions,
            min_transitions: 0,
        }
    }

    #[test]
    fn window_emits_once_full_then_every_push() {
        let mut window = TriWindow::new();
        assert!(window.push(Vector2::new(0, 0)).is_none());
        assert!(window.push(Vector2::new(1, 0)).is_none());
        let t = window.push(Vector2::new(0, 1)).unwrap();
        assert_eq!(t.p0, Vector2::new(0, 0));
        assert_eq!(t.p2, Vector2::new(0, 1));
        // Oldest point dropped on the next push.
        let t = window.push(Vector2::new(1, 1)).unwrap();
        assert_eq!(t.p0, Vector2::new(1, 0));
        assert_eq!(t.p2, Vector2::new(1, 1));
    }

    #[test]
    fn step_grows_as_detail_shrinks() {
        let region = span_region(0, 9, 4);
        let coarse = sample_step(&region, 0.01);
        let default = sample_step(&region, 0.06);
        let fine = sample_step(&region, 1.0);
        assert!(coarse >= default);
        assert!(default >= fine);
        assert_eq!(fine, 1);
    }

    #[test]
    fn step_clamps_degenerate_inputs_to_one() {
        let region = span_region(0, 9, 4);
        // detail of exactly zero drives the ratio to infinity; it still
        // clamps like the rest of the non-positive range.
        assert_eq!(sample_step(&region, 0.0), 1);
        assert_eq!(sample_step(&region, -1.0), 1);
        // Single-row region: span is zero and the row count is below 3.
        assert_eq!(sample_step(&span_region(5, 5, 4), 0.06), 1);
        // Exactly three rows against a zero denominator: 0/0 is NaN,
        // which also clamps.
        let mut padded = span_region(5, 5, 4);
        padded.rows.push(padded.rows[0].clone());
        padded.rows.push(padded.rows[0].clone());
        assert_eq!(padded.rows.len(), 3);
        assert_eq!(sample_step(&padded, 0.0), 1);
    }

    #[test]
    fn dense_detail_strips_every_row() {
        // 4 rows, step 1: 8 pushes through the window = 6 triangles.
        let map = map_of(vec![span_region(0, 3, 5)]);
        let triangles = generate_triangles(&map, 1.0);
        assert_eq!(triangles.len(), 6);
    }

    #[test]
    fn coarse_detail_keeps_boundary_rows() {
        // Step saturates; only the first and last rows are sampled, which
        // still yields one strip of 2 triangles between the boundaries.
        let map = map_of(vec![span_region(0, 9, 5)]);
        let triangles = generate_triangles(&map, 0.001);
        assert_eq!(triangles.len(), 2);
        assert_eq!(triangles[0].p0, Vector2::new(0, 0));
        assert_eq!(triangles[1].p2, Vector2::new(5, 9));
    }

    #[test]
    fn single_row_region_processes_its_row_once() {
        // First and last row coincide; the row is pushed once, so a
        // 2-transition region never reaches a full window and emits no
        // zero-area triangles.
        let map = map_of(vec![span_region(5, 5, 4)]);
        let triangles = generate_triangles(&map, 0.06);
        assert!(triangles.is_empty());
    }

    #[test]
    fn slots_beyond_row_length_emit_nothing() {
        // A 2-transition region against a 4-transition maximum: slot 2
        // indexes past this region's lists and contributes no points.
        let narrow = span_region(0, 2, 5);
        let mut map = map_of(vec![narrow]);
        map.max_transitions = 4;
        let only_slot0 = generate_triangles(&map_of(vec![span_region(0, 2, 5)]), 1.0);
        let with_extra_slot = generate_triangles(&map, 1.0);
        assert_eq!(only_slot0, with_extra_slot);
    }

    #[test]
    fn four_transition_rows_fan_out_both_boundary_pairs() {
        // Rows with two spans: points at indices 0..4. Slot 0 consumes
        // indices 0..3, slot 2 consumes 2..4.
        let rows: Vec<Vec<Point2>> = (0..3)
            .map(|y| {
                vec![
                    Vector2::new(0, y),
                    Vector2::new(2, y),
                    Vector2::new(4, y),
                    Vector2::new(6, y),
                ]
            })
            .collect();
        let region = Region {
            start: 0,
            end: 2,
            transitions: 4,
            rows,
        };
        let triangles = generate_triangles(&map_of(vec![region]), 1.0);
        // Slot 0: 3 pushes per row over 3 rows = 7 triangles.
        // Slot 2: 2 pushes per row over 3 rows = 4 triangles.
        assert_eq!(triangles.len(), 11);
    }
}
