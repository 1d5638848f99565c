//! The character canvas: a fixed-size mutable grid of glyphs with the
//! drawing operations layered on top.
//!
//! ## Rust Lesson #3: Composition over Inheritance
//!
//! In Python you might subclass `list[str]` to bolt drawing methods onto a
//! row collection. Rust has no inheritance; instead `Canvas` *owns* its
//! rows (`Vec<Vec<char>>`) and exposes only the operations that keep the
//! invariant intact: width and height are fixed at construction and no row
//! ever changes length.

use std::fmt;

use crate::geometry::{segments_of, Point};
use crate::raster::rasterize;
use crate::shapes::regular_polygon;

/// Error type for canvas operations.
///
/// ## Rust Lesson #4: Error Handling
///
/// Rust uses `Result<T, E>` instead of exceptions:
/// - `Ok(value)` = success
/// - `Err(error)` = failure
///
/// You MUST handle errors - the compiler won't let you ignore them!
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasError {
    /// A write landed outside `[0,width) x [0,height)`.
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
    /// A polygon needs at least two points.
    InsufficientPoints { found: usize },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanvasError::OutOfBounds { x, y, width, height } => write!(
                f,
                "cell ({}, {}) is outside the {}x{} canvas",
                x, y, width, height
            ),
            CanvasError::InsufficientPoints { found } => write!(
                f,
                "a polygon needs at least 2 points, got {}",
                found
            ),
        }
    }
}

impl std::error::Error for CanvasError {}

/// The character used for unmarked cells.
pub const BLANK: char = ' ';

/// A fixed-size character grid.
///
/// Origin (0,0) is the top-left corner; x grows rightward, y downward.
/// The canvas is created once, mutated in place by draw calls, and can be
/// rendered to text at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    rows: Vec<Vec<char>>,
}

impl Canvas {
    /// Create a blank canvas of the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        log::debug!("new {}x{} canvas", width, height);
        Self {
            width,
            height,
            rows: vec![vec![BLANK; width]; height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Write a glyph into one cell, rejecting out-of-range coordinates.
    ///
    /// The Python original spliced into row strings and would raise an
    /// opaque index error (or silently truncate) off the edge; here the
    /// bounds check is explicit.
    pub fn set_cell(&mut self, x: i32, y: i32, glyph: char) -> Result<(), CanvasError> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return Err(CanvasError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.rows[y as usize][x as usize] = glyph;
        Ok(())
    }

    /// Read one cell, or `None` outside the canvas.
    pub fn cell(&self, x: i32, y: i32) -> Option<char> {
        if x < 0 || y < 0 {
            return None;
        }
        self.rows
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
    }

    /// Iterate over all marked (non-blank) cells with their glyphs.
    pub fn cells(&self) -> impl Iterator<Item = (Point, char)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter().enumerate().filter_map(move |(x, &glyph)| {
                if glyph == BLANK {
                    None
                } else {
                    Some((Point::new(x as i32, y as i32), glyph))
                }
            })
        })
    }

    /// Render the canvas as display lines, lazily.
    ///
    /// The first and last lines are a ruler of column indices (digits
    /// mod 10, preceded by one space to clear the row labels); every row in
    /// between is prefixed and suffixed with its row index mod 10.
    pub fn render(&self) -> impl Iterator<Item = String> + '_ {
        let ruler = Self::ruler(self.width);
        let footer = ruler.clone();

        std::iter::once(ruler)
            .chain(self.rows.iter().enumerate().map(|(idx, row)| {
                let digit = char::from_digit((idx % 10) as u32, 10).unwrap_or('?');
                let mut line = String::with_capacity(self.width + 2);
                line.push(digit);
                line.extend(row.iter());
                line.push(digit);
                line
            }))
            .chain(std::iter::once(footer))
    }

    /// Column-index ruler: one leading space, then digits 0-9 repeating.
    fn ruler(width: usize) -> String {
        let mut line = String::with_capacity(width + 1);
        line.push(' ');
        for i in 0..width {
            line.push(char::from_digit((i % 10) as u32, 10).unwrap_or('?'));
        }
        line
    }

    // ========================================================================
    // Drawing operations
    // ========================================================================

    /// Draw an open or closed polygon over the given points.
    ///
    /// Consecutive points become segments; with `closed`, the last point
    /// connects back to the first. Every rasterized cell is written with
    /// `glyph` - later segments overwrite earlier ones at shared cells
    /// (last-write-wins, no blending). On an out-of-bounds cell the draw
    /// aborts; cells already written stay written (best-effort).
    pub fn draw_polygon(
        &mut self,
        points: &[Point],
        closed: bool,
        glyph: char,
    ) -> Result<(), CanvasError> {
        if points.len() < 2 {
            return Err(CanvasError::InsufficientPoints {
                found: points.len(),
            });
        }

        let segments = segments_of(points, closed);
        log::debug!(
            "draw_polygon: {} points, closed={}, {} segments",
            points.len(),
            closed,
            segments.len()
        );

        for segment in segments {
            for cell in rasterize(segment.start, segment.end) {
                self.set_cell(cell.x, cell.y, glyph)?;
            }
        }
        Ok(())
    }

    /// Draw a single line segment.
    pub fn draw_line(&mut self, start: Point, end: Point, glyph: char) -> Result<(), CanvasError> {
        self.draw_polygon(&[start, end], false, glyph)
    }

    /// Draw an axis-aligned rectangle between two opposite corners.
    ///
    /// The caller must supply the true upper-left and lower-right corners;
    /// other orderings draw a distorted shape (matching the source, no
    /// validation).
    pub fn draw_rectangle(
        &mut self,
        upper_left: Point,
        lower_right: Point,
        glyph: char,
    ) -> Result<(), CanvasError> {
        let corners = [
            upper_left,
            Point::new(lower_right.x, upper_left.y),
            lower_right,
            Point::new(upper_left.x, lower_right.y),
        ];
        self.draw_polygon(&corners, true, glyph)
    }

    /// Draw a regular n-gon outline around a center point.
    ///
    /// A high `point_count` approximates a circle.
    pub fn draw_ngon(
        &mut self,
        center: Point,
        radius: f64,
        point_count: usize,
        rotation_degrees: f64,
        glyph: char,
    ) -> Result<(), CanvasError> {
        let points = regular_polygon(center, radius, point_count, rotation_degrees);
        self.draw_polygon(&points, true, glyph)
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.render() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn new_canvas_is_blank() {
        let canvas = Canvas::new(12, 5);
        assert_eq!(canvas.width(), 12);
        assert_eq!(canvas.height(), 5);
        assert_eq!(canvas.cells().count(), 0);
        assert_eq!(canvas.cell(0, 0), Some(BLANK));
        assert_eq!(canvas.cell(11, 4), Some(BLANK));
    }

    #[test]
    fn set_cell_rejects_out_of_bounds() {
        let mut canvas = Canvas::new(10, 4);
        assert!(canvas.set_cell(0, 0, '*').is_ok());
        assert!(canvas.set_cell(9, 3, '*').is_ok());

        for (x, y) in [(-1, 0), (0, -1), (10, 0), (0, 4)] {
            let err = canvas.set_cell(x, y, '*').unwrap_err();
            assert_eq!(
                err,
                CanvasError::OutOfBounds { x, y, width: 10, height: 4 },
                "expected out-of-bounds for ({}, {})",
                x,
                y
            );
        }
    }

    #[test]
    fn render_has_rulers_and_row_labels() {
        let mut canvas = Canvas::new(14, 3);
        canvas.set_cell(2, 1, '*').unwrap();

        let lines: Vec<String> = canvas.render().collect();
        assert_eq!(lines.len(), 5); // header + 3 rows + footer
        assert_eq!(lines[0], " 01234567890123");
        assert_eq!(lines[0], lines[4], "header and footer match");
        assert_eq!(lines[1], "0              0");
        assert_eq!(lines[2], "1  *           1");
        assert!(lines[2].starts_with('1') && lines[2].ends_with('1'));
    }

    #[test]
    fn row_labels_wrap_mod_ten() {
        let canvas = Canvas::new(3, 12);
        let lines: Vec<String> = canvas.render().collect();
        // Row 10 wraps back to digit 0, row 11 to 1
        assert!(lines[11].starts_with('0'));
        assert!(lines[12].starts_with('1'));
    }

    #[test]
    fn draw_polygon_needs_two_points() {
        let mut canvas = Canvas::new(10, 10);
        let err = canvas.draw_polygon(&[Point::new(1, 1)], true, '*').unwrap_err();
        assert_eq!(err, CanvasError::InsufficientPoints { found: 1 });
        assert_eq!(
            canvas.draw_polygon(&[], false, '*').unwrap_err(),
            CanvasError::InsufficientPoints { found: 0 }
        );
    }

    #[test]
    fn draw_line_marks_every_cell() {
        let mut canvas = Canvas::new(10, 10);
        canvas.draw_line(Point::new(1, 1), Point::new(5, 1), '+').unwrap();
        for x in 1..=5 {
            assert_eq!(canvas.cell(x, 1), Some('+'));
        }
        assert_eq!(canvas.cells().count(), 5);
    }

    #[test]
    fn closed_triangle_equals_three_explicit_segments() {
        let a = Point::new(1, 1);
        let b = Point::new(8, 2);
        let c = Point::new(4, 7);

        let mut polygon = Canvas::new(12, 10);
        polygon.draw_polygon(&[a, b, c], true, '*').unwrap();

        let mut segments = Canvas::new(12, 10);
        segments.draw_line(a, b, '*').unwrap();
        segments.draw_line(b, c, '*').unwrap();
        segments.draw_line(c, a, '*').unwrap();

        let polygon_cells: HashSet<_> = polygon.cells().collect();
        let segment_cells: HashSet<_> = segments.cells().collect();
        assert_eq!(polygon_cells, segment_cells);
    }

    #[test]
    fn open_polygon_leaves_the_gap() {
        let a = Point::new(0, 0);
        let b = Point::new(4, 0);
        let c = Point::new(4, 4);

        let mut canvas = Canvas::new(6, 6);
        canvas.draw_polygon(&[a, b, c], false, '*').unwrap();

        // Closing edge back to (0,0) must be absent
        assert_eq!(canvas.cell(2, 2), Some(BLANK));
        assert_eq!(canvas.cell(0, 0), Some('*'));
        assert_eq!(canvas.cell(4, 4), Some('*'));
    }

    #[test]
    fn later_draws_overwrite_earlier_cells() {
        let mut canvas = Canvas::new(10, 10);
        canvas.draw_line(Point::new(0, 5), Point::new(9, 5), '-').unwrap();
        canvas.draw_line(Point::new(5, 0), Point::new(5, 9), '|').unwrap();
        // The crossing cell carries the later glyph
        assert_eq!(canvas.cell(5, 5), Some('|'));
    }

    #[test]
    fn rectangle_outline() {
        let mut canvas = Canvas::new(10, 8);
        canvas
            .draw_rectangle(Point::new(2, 1), Point::new(7, 5), '#')
            .unwrap();

        for x in 2..=7 {
            assert_eq!(canvas.cell(x, 1), Some('#'), "top edge at x={}", x);
            assert_eq!(canvas.cell(x, 5), Some('#'), "bottom edge at x={}", x);
        }
        for y in 1..=5 {
            assert_eq!(canvas.cell(2, y), Some('#'), "left edge at y={}", y);
            assert_eq!(canvas.cell(7, y), Some('#'), "right edge at y={}", y);
        }
        // Interior stays blank
        assert_eq!(canvas.cell(4, 3), Some(BLANK));
    }

    #[test]
    fn drawing_off_canvas_errors() {
        let mut canvas = Canvas::new(10, 10);
        let err = canvas
            .draw_line(Point::new(5, 5), Point::new(20, 5), '*')
            .unwrap_err();
        assert!(matches!(err, CanvasError::OutOfBounds { .. }));
        // Best-effort: the in-bounds prefix was written
        assert_eq!(canvas.cell(5, 5), Some('*'));
        assert_eq!(canvas.cell(9, 5), Some('*'));
    }

    #[test]
    fn ngon_draws_a_closed_outline() {
        let mut canvas = Canvas::new(30, 30);
        canvas.draw_ngon(Point::new(15, 15), 10.0, 6, 0.0, 'o').unwrap();
        assert!(canvas.cells().count() > 6, "outline covers more than the vertices");
        // Rightmost vertex sits at center + radius
        assert_eq!(canvas.cell(25, 15), Some('o'));
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = CanvasError::OutOfBounds { x: 12, y: -1, width: 10, height: 5 };
        assert_eq!(err.to_string(), "cell (12, -1) is outside the 10x5 canvas");
        let err = CanvasError::InsufficientPoints { found: 1 };
        assert_eq!(err.to_string(), "a polygon needs at least 2 points, got 1");
    }
}
