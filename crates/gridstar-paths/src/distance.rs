use gridstar_core::Point;

/// Euclidean (L2) distance between two points.
///
/// Used both as the step cost (1 orthogonal, √2 diagonal) and as the A*
/// estimate, which never overestimates on an 8-connected grid.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(b.x - a.x);
    let dy = f64::from(b.y - a.y);
    dx.hypot(dy)
}

/// Chebyshev (L∞) distance between two points: the number of king moves.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Sum of [`euclidean`] step costs along `path`.
///
/// Zero for paths with fewer than two points.
pub fn path_cost(path: &[Point]) -> f64 {
    path.windows(2).map(|w| euclidean(w[0], w[1])).sum()
}
