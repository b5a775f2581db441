use crate::scanline::RowPoints;

/// A contiguous vertical band of rows sharing one transition count, the unit
/// the tessellation works over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) transitions: usize,
    pub(crate) rows: Vec<RowPoints>,
}

impl Region {
    /// First absorbed row index.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Last absorbed row index. Filler rows appended by gap fill do not
    /// advance this.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The transition count every absorbed row reported.
    pub fn transitions(&self) -> usize {
        self.transitions
    }

    /// Row point lists in row order, one per absorbed or filled row.
    pub fn rows(&self) -> &[RowPoints] {
        self.rows.as_slice()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionMap {
    pub(crate) regions: Vec<Region>,
    pub(crate) max_transitions: usize,
    pub(crate) min_transitions: usize,
}

impl RegionMap {
    pub fn regions(&self) -> &[Region] {
        self.regions.as_slice()
    }

    pub fn max_transitions(&self) -> usize {
        self.max_transitions
    }

    pub fn min_transitions(&self) -> usize {
        self.min_transitions
    }
}

/// Groups scanned rows into regions and runs the single-row gap fill.
///
/// A row whose transition count differs from the previous row's opens a new
/// region (unless the count is zero, which only resets the tracking). Equal
/// non-zero counts extend the open region. After grouping, any region
/// followed by another that starts exactly two rows later gains a filler row:
/// a copy of its last point list translated down by one row. The skipped row
/// is never classified on its own, it borrows the neighboring boundary's
/// topology. Gaps of two or more rows stay unmerged.
pub fn build_regions(rows: &[RowPoints]) -> RegionMap {
    let mut regions: Vec<Region> = Vec::new();
    let mut last_transitions = 0;

    for (y, row) in rows.iter().enumerate() {
        let transitions = row.len();
        if transitions != last_transitions {
            if transitions != 0 {
                regions.push(Region {
                    start: y,
                    end: y,
                    transitions,
                    rows: vec![row.clone()],
                });
            }
            last_transitions = transitions;
        } else if transitions != 0 {
            if let Some(region) = regions.last_mut() {
                region.end = y;
                region.rows.push(row.clone());
            }
        }
    }

    for i in 0..regions.len().saturating_sub(1) {
        if regions[i + 1].start == regions[i].end + 2 {
            let filler: RowPoints = regions[i]
                .rows
                .last()
                .map(|list| {
                    list.iter()
                        .map(|p| cgmath::Vector2::new(p.x, p.y + 1))
                        .collect()
                })
                .unwrap_or_default();
            regions[i].rows.push(filler);
        }
    }

    let max_transitions = regions
        .iter()
        .map(|r| r.transitions)
        .max()
        .unwrap_or(0);

    RegionMap {
        regions,
        max_transitions,
        // Fixed at zero: slot traversal always starts at the first
        // boundary pair.
        min_transitions: 0,
    }
}
