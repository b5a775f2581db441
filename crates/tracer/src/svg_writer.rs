//! Debug dump of intermediate tracing state as an SVG.
//!
//! Strictly diagnostic: nothing here feeds back into the numeric output.
//! Transition points render as markers, triangles as a wireframe, both in
//! raw pixel coordinates.

use std::{fs::File, io::Write, path::Path};

use alphamesh_mesh::Triangle;

use crate::region::RegionMap;

const MUL: f32 = 5.0;

pub fn generate_svg<P: AsRef<Path>>(
    path: P,
    map: &RegionMap,
    triangles: &[Triangle],
) -> std::io::Result<()> {
    let mut f = File::create(path)?;
    writeln!(f, "<svg xmlns=\"http://www.w3.org/2000/svg\" >")?;
    writeln!(f, "  <rect width=\"100%\" height=\"100%\" fill=\"white\"/>")?;
    writeln!(f, "  <g transform=\"translate(15, 20) scale({})\">", MUL)?;

    for triangle in triangles {
        writeln!(
            f,
            "    <polygon points=\"{},{} {},{} {},{}\" fill=\"none\" stroke=\"#000\" stroke-width=\"0.1\"/>",
            triangle.p0.x,
            triangle.p0.y,
            triangle.p1.x,
            triangle.p1.y,
            triangle.p2.x,
            triangle.p2.y
        )?;
    }

    for (i, region) in map.regions().iter().enumerate() {
        writeln!(
            f,
            "    <!-- Region {}: rows {}-{}, {} transitions -->",
            i,
            region.start(),
            region.end(),
            region.transitions()
        )?;
        for row in region.rows() {
            for p in row {
                writeln!(
                    f,
                    "    <circle cx=\"{}\" cy=\"{}\" r=\"0.3\" fill=\"#c00\"/>",
                    p.x, p.y
                )?;
            }
        }
    }

    writeln!(f, "  </g>")?;
    writeln!(f, "</svg>")?;
    Ok(())
}
