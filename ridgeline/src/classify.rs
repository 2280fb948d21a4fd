// Row classification
// Splits one row of intensities into land or water segments, bridging short noisy gaps

use ridgeline_common::{LineClass, Point, Segment};

use crate::height::y_coordinate;

/// Vertical placement of one sampled row in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowBand {
    /// Top of the band, `row position * spacing`
    pub offset: u32,
    /// Height of a full-intensity sample above the band baseline
    pub max_height: u32,
}

impl RowBand {
    pub fn new(offset: u32, max_height: u32) -> Self {
        Self { offset, max_height }
    }

    fn point(&self, column: usize, value: u8) -> Point {
        Point::new(column as u32, y_coordinate(value, self.max_height, self.offset))
    }
}

/// Build the ordered segments of `class` along one row.
///
/// A failing column does not close the open segment when any of the next
/// `lookahead` columns passes; it is skipped without contributing a point.
/// Otherwise the open segment is closed and accumulation restarts at the
/// next passing column. `lookahead == 0` gives strict per-column splitting.
pub fn classify_row(row: &[u8], class: LineClass, lookahead: usize, band: RowBand) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current = Vec::new();

    for (column, &value) in row.iter().enumerate() {
        if class.accepts(value) {
            current.push(band.point(column, value));
            continue;
        }

        if bridges_gap(row, column, class, lookahead) {
            continue;
        }

        if let Some(segment) = Segment::new(std::mem::take(&mut current)) {
            segments.push(segment);
        }
    }

    if let Some(segment) = Segment::new(current) {
        segments.push(segment);
    }

    segments
}

/// True when a passing column exists in `column+1 ..= column+lookahead`
fn bridges_gap(row: &[u8], column: usize, class: LineClass, lookahead: usize) -> bool {
    row.iter()
        .skip(column + 1)
        .take(lookahead)
        .any(|&value| class.accepts(value))
}

/// Unclassified trace: one point for every column of the row
pub fn trace_row(row: &[u8], band: RowBand) -> Vec<Point> {
    row.iter()
        .enumerate()
        .map(|(column, &value)| band.point(column, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BAND: RowBand = RowBand {
        offset: 0,
        max_height: 100,
    };

    fn columns(segments: &[Segment]) -> Vec<Vec<u32>> {
        segments
            .iter()
            .map(|s| s.points().iter().map(|p| p.x).collect())
            .collect()
    }

    #[test]
    fn strict_split_without_lookahead() {
        let row = [0, 0, 0, 100, 100, 100, 0, 0];

        let water = classify_row(&row, LineClass::Water, 0, BAND);
        assert_eq!(columns(&water), vec![vec![0, 1, 2], vec![6, 7]]);

        let land = classify_row(&row, LineClass::Land, 0, BAND);
        assert_eq!(columns(&land), vec![vec![3, 4, 5]]);
    }

    #[test]
    fn short_gap_is_bridged_and_skipped() {
        let row = [100, 100, 0, 100, 100];
        for lookahead in [1, 2, 5, 50] {
            let land = classify_row(&row, LineClass::Land, lookahead, BAND);
            assert_eq!(columns(&land), vec![vec![0, 1, 3, 4]], "lookahead {lookahead}");
        }
    }

    #[test]
    fn gap_longer_than_lookahead_splits() {
        let row = [9, 9, 0, 0, 0, 9];
        let land = classify_row(&row, LineClass::Land, 2, BAND);
        assert_eq!(columns(&land), vec![vec![0, 1], vec![5]]);

        let land = classify_row(&row, LineClass::Land, 3, BAND);
        assert_eq!(columns(&land), vec![vec![0, 1, 5]]);
    }

    #[test]
    fn lookahead_stops_at_row_end() {
        let row = [7, 7, 0, 0];
        let land = classify_row(&row, LineClass::Land, 10, BAND);
        assert_eq!(columns(&land), vec![vec![0, 1]]);
    }

    #[test]
    fn no_qualifying_column_gives_no_segments() {
        assert!(classify_row(&[0, 0, 0], LineClass::Land, 5, BAND).is_empty());
        assert!(classify_row(&[1, 2, 3], LineClass::Water, 5, BAND).is_empty());
        assert!(classify_row(&[], LineClass::Water, 5, BAND).is_empty());
    }

    #[test]
    fn fully_qualifying_row_is_one_segment() {
        let row = [10u8; 12];
        let land = classify_row(&row, LineClass::Land, 0, BAND);
        assert_eq!(columns(&land), vec![(0..12).collect::<Vec<u32>>()]);
    }

    #[test]
    fn points_carry_band_offset() {
        let band = RowBand::new(30, 100);
        let land = classify_row(&[255, 0, 0], LineClass::Land, 0, band);
        assert_eq!(land[0].points(), &[Point::new(0, 30)]);

        let water = classify_row(&[255, 0, 0], LineClass::Water, 0, band);
        assert_eq!(water[0].points(), &[Point::new(1, 130), Point::new(2, 130)]);
    }

    #[test]
    fn trace_covers_every_column() {
        let row = [0, 255, 0, 51];
        let points = trace_row(&row, RowBand::new(0, 5));
        let xs: Vec<u32> = points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0, 1, 2, 3]);
        assert_eq!(points[1].y, 0);
        assert_eq!(points[3].y, 4);
    }
}
