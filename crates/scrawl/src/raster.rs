//! Line rasterization with Bresenham's algorithm.
//!
//! Bresenham selects the discrete grid cells approximating a straight line
//! using only integer arithmetic: track an error term of how far the ideal
//! line has drifted from the current cell and step x and/or y whenever the
//! doubled error crosses the slope thresholds.

use crate::geometry::Point;

/// Compute every cell on the straight path from `start` to `end`,
/// inclusive of both endpoints.
///
/// Pure function - marking a canvas is the caller's job. The loop
/// condition excludes the exact endpoint, so it is appended unconditionally
/// afterwards; that also covers the degenerate cases (`start == end`
/// returns exactly one cell, single-axis lines still end on `end`).
///
/// The result is an 8-connected path: consecutive cells differ by at most
/// one in each coordinate.
pub fn rasterize(start: Point, end: Point) -> Vec<Point> {
    let (mut x, mut y) = (start.x, start.y);
    let (x2, y2) = (end.x, end.y);

    let dx = (x2 - x).abs();
    let dy = (y2 - y).abs();
    let sx = if x < x2 { 1 } else { -1 };
    let sy = if y < y2 { 1 } else { -1 };
    let mut error = dx - dy;

    let mut cells = Vec::with_capacity((dx.max(dy) + 1) as usize);

    while x != x2 || y != y2 {
        cells.push(Point::new(x, y));

        let double_error = error * 2;
        if double_error > -dy {
            error -= dy;
            x += sx;
        }
        if double_error < dx {
            error += dx;
            y += sy;
        }
    }

    cells.push(end);

    log::trace!(
        "rasterized {} -> {}: {} cells",
        start,
        end,
        cells.len()
    );
    cells
}
