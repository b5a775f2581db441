//! Canned RGBA images for exercising the tracer.
//!
//! Images are built in code rather than checked in as files; every fixture is
//! a plain width/height/byte-vector triple so no crate in the workspace has
//! to depend on this one outside of tests.

pub struct TestImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

const OPAQUE: u8 = 255;
const CLEAR: u8 = 0;

/// Builds an image from an ASCII pattern, one string per row.
///
/// `'#'` marks a fully opaque pixel (alpha 255), anything else is fully
/// transparent (alpha 0). All rows must have equal length.
pub fn from_pattern(rows: &[&str]) -> TestImage {
    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.len());
    let mut rgba = Vec::with_capacity(width * height * 4);
    for row in rows {
        assert_eq!(row.len(), width, "ragged pattern row");
        for c in row.chars() {
            let a = if c == '#' { OPAQUE } else { CLEAR };
            rgba.extend_from_slice(&[a, a, a, a]);
        }
    }
    TestImage {
        width,
        height,
        rgba,
    }
}

/// A fully opaque rectangle.
pub fn opaque(width: usize, height: usize) -> TestImage {
    solid(width, height, OPAQUE)
}

/// A fully transparent rectangle. Tracing this must fail.
pub fn transparent(width: usize, height: usize) -> TestImage {
    solid(width, height, CLEAR)
}

fn solid(width: usize, height: usize, alpha: u8) -> TestImage {
    TestImage {
        width,
        height,
        rgba: [alpha, alpha, alpha, alpha].repeat(width * height),
    }
}

/// The 4x4 image with an opaque 2x2 center block from the end-to-end
/// scenario: rows 1 and 2 carry the silhouette, everything else is clear.
pub fn centered_square() -> TestImage {
    from_pattern(&[
        "....", //
        ".##.", //
        ".##.", //
        "....",
    ])
}

/// Two opaque bands separated by exactly one transparent row.
///
/// Scanning this yields two regions whose starts/ends differ by two, the
/// shape that triggers the region builder's single-row gap fill.
pub fn split_bands(width: usize) -> TestImage {
    let band = "#".repeat(width);
    let gap = ".".repeat(width);
    from_pattern(&[&band, &band, &gap, &band, &band].map(String::as_str))
}
