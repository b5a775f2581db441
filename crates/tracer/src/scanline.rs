use alphamesh_raster::PixelBuffer;
use cgmath::Vector2;

use alphamesh_mesh::Point2;

/// The transition points recorded for one scanned row, in column order.
/// The row's transition count is the list length.
pub type RowPoints = Vec<Point2>;

/// Classifies one alpha byte against the configured threshold.
///
/// Pure and unvalidated: thresholds outside 0..=255 are legal and simply
/// collapse to a constant mapping (<= 0 means nothing is transparent,
/// > 255 means everything is).
#[inline(always)]
pub fn is_transparent(alpha: u8, threshold: i32) -> bool {
    i32::from(alpha) < threshold
}

/// Walks every image row left to right and records where the opaque /
/// transparent classification flips.
///
/// The running state starts transparent, so a row beginning with opaque
/// pixels records its first point at column 0. A row that is still opaque at
/// the last column closes out with one forced point there even though no
/// flip occurred; without it a silhouette touching the right edge would
/// never terminate its final span. Rows with no transitions contribute an
/// empty list.
pub fn scan_rows(image: &PixelBuffer, threshold: i32) -> Vec<RowPoints> {
    let mut rows = Vec::with_capacity(image.height());
    for y in 0..image.height() {
        let mut points = RowPoints::new();
        let mut transparent = true;
        for x in 0..image.width() {
            let classified = is_transparent(image.alpha(x, y), threshold);
            if classified != transparent {
                points.push(Vector2::new(x as i32, y as i32));
                transparent = classified;
            } else if x + 1 == image.width() && !transparent {
                // Forced closure for rows that end opaque.
                points.push(Vector2::new(x as i32, y as i32));
            }
        }
        rows.push(points);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(img: alphamesh_test_data::TestImage) -> PixelBuffer {
        PixelBuffer::from_rgba8(img.width, img.height, img.rgba).unwrap()
    }

    #[test]
    fn classifier_compares_against_threshold() {
        assert!(is_transparent(39, 40));
        assert!(!is_transparent(40, 40));
        assert!(!is_transparent(255, 40));
    }

    #[test]
    fn classifier_accepts_degenerate_thresholds() {
        // <= 0: everything opaque.
        assert!(!is_transparent(0, 0));
        assert!(!is_transparent(0, -5));
        // > 255: everything transparent.
        assert!(is_transparent(255, 256));
    }

    #[test]
    fn opaque_row_yields_entry_and_forced_closure() {
        let img = buffer(alphamesh_test_data::opaque(5, 2));
        let rows = scan_rows(&img, 40);
        assert_eq!(rows.len(), 2);
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(
                row.as_slice(),
                &[
                    Vector2::new(0, y as i32),
                    Vector2::new(4, y as i32),
                ]
            );
        }
    }

    #[test]
    fn transparent_row_yields_no_points() {
        let img = buffer(alphamesh_test_data::transparent(5, 3));
        let rows = scan_rows(&img, 40);
        assert!(rows.iter().all(|r| r.is_empty()));
    }

    #[test]
    fn interior_span_records_entry_and_exit_columns() {
        let img = buffer(alphamesh_test_data::centered_square());
        let rows = scan_rows(&img, 40);
        assert!(rows[0].is_empty());
        // The exit point lands on the first transparent column after the span.
        assert_eq!(
            rows[1].as_slice(),
            &[Vector2::new(1, 1), Vector2::new(3, 1)]
        );
        assert_eq!(
            rows[2].as_slice(),
            &[Vector2::new(1, 2), Vector2::new(3, 2)]
        );
        assert!(rows[3].is_empty());
    }

    #[test]
    fn threshold_above_byte_range_blanks_the_image() {
        let img = buffer(alphamesh_test_data::opaque(4, 4));
        let rows = scan_rows(&img, 256);
        assert!(rows.iter().all(|r| r.is_empty()));
    }

    #[test]
    fn non_positive_threshold_fills_the_image() {
        let img = buffer(alphamesh_test_data::transparent(4, 1));
        let rows = scan_rows(&img, 0);
        assert_eq!(rows[0].len(), 2);
    }
}
