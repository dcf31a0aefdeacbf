use gridstar_core::Point;

/// The eight king-move offsets `{-1, 0, 1}² \ {(0, 0)}`.
pub const OFFSETS: [Point; 8] = [
    Point::new(-1, -1),
    Point::new(0, -1),
    Point::new(1, -1),
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(-1, 1),
    Point::new(0, 1),
    Point::new(1, 1),
];

/// Append the 8-directional neighbors of `p` to `buf`, keeping only those
/// for which `keep` returns `true`.
pub fn neighbors_8(p: Point, buf: &mut Vec<Point>, keep: impl Fn(Point) -> bool) {
    buf.extend(OFFSETS.iter().map(|&d| p + d).filter(|&n| keep(n)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_eight_without_filter() {
        let mut buf = Vec::new();
        neighbors_8(Point::new(5, 5), &mut buf, |_| true);
        assert_eq!(buf.len(), 8);
        assert!(!buf.contains(&Point::new(5, 5)));
        assert!(buf.iter().all(|n| n.is_adjacent(Point::new(5, 5))));
    }

    #[test]
    fn filter_applies() {
        let mut buf = Vec::new();
        neighbors_8(Point::new(0, 0), &mut buf, |n| n.x >= 0 && n.y >= 0);
        assert_eq!(buf, vec![Point::new(1, 0), Point::new(0, 1), Point::new(1, 1)]);
    }

    #[test]
    fn appends_without_clearing() {
        let mut buf = vec![Point::new(9, 9)];
        neighbors_8(Point::new(0, 0), &mut buf, |n| n == Point::new(1, 1));
        assert_eq!(buf, vec![Point::new(9, 9), Point::new(1, 1)]);
    }
}
