// Segment decimation
// Thins a segment's point list by keeping every Nth surviving point

use ridgeline_common::{Point, Segment};

/// Keep the points whose index within `points` is a multiple of `rate`.
/// Indices are positions in the list, not columns, so bridged gaps shift
/// the thinning phase. A rate of 1 (or 0) returns the points unchanged.
pub fn decimate_points(points: &[Point], rate: usize) -> Vec<Point> {
    if rate <= 1 {
        return points.to_vec();
    }

    points.iter().step_by(rate).copied().collect()
}

/// Decimate one segment. The first point always survives, so the result is never empty.
pub fn decimate_segment(segment: &Segment, rate: usize) -> Vec<Point> {
    decimate_points(segment.points(), rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(n: u32) -> Vec<Point> {
        (0..n).map(|x| Point::new(x, x * 2)).collect()
    }

    #[test]
    fn rate_one_is_identity() {
        let points = run(17);
        assert_eq!(decimate_points(&points, 1), points);
    }

    #[test]
    fn keeps_ceil_n_over_k_points() {
        for n in 1..40u32 {
            for k in 2..9usize {
                let kept = decimate_points(&run(n), k);
                assert_eq!(kept.len(), (n as usize).div_ceil(k), "n={n} k={k}");
                assert!(kept.iter().all(|p| p.x as usize % k == 0));
            }
        }
    }

    #[test]
    fn indexes_by_position_not_column() {
        // Column 2 was skipped by gap bridging
        let points = vec![
            Point::new(0, 5),
            Point::new(1, 5),
            Point::new(3, 5),
            Point::new(4, 5),
        ];
        let kept = decimate_points(&points, 2);
        assert_eq!(kept, vec![Point::new(0, 5), Point::new(3, 5)]);
    }

    #[test]
    fn segment_keeps_first_point() {
        let segment = Segment::new(vec![Point::new(9, 1)]).unwrap();
        assert_eq!(decimate_segment(&segment, 4), vec![Point::new(9, 1)]);
    }
}
