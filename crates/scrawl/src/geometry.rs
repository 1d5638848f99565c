//! Core geometry types for scrawl.
//!
//! ## Rust Lesson #2: Structs & Derives
//!
//! In JS you'd write: `const point = { x: 3, y: 7 }`
//! In Rust, we define a `struct` with explicit types.
//!
//! The `#[derive(...)]` macro auto-generates common functionality:
//! - `Debug` = like console.log, lets you print with `{:?}`
//! - `Clone` / `Copy` = the value can be duplicated / copied implicitly
//! - `PartialEq` / `Eq` = can compare with `==`
//! - `Hash` = usable as a HashMap key or in a HashSet

use std::fmt;

/// A cell coordinate on the canvas.
///
/// `i32` rather than `usize` so intermediate shape math (an n-gon vertex
/// left of the canvas, for example) stays representable; the canvas itself
/// rejects out-of-range writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point. Called as `Point::new(3, 7)`.
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}/{})", self.x, self.y)
    }
}

/// A straight segment between two cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Euclidean length of the segment.
    #[inline]
    pub fn length(&self) -> f64 {
        let dx = (self.end.x - self.start.x) as f64;
        let dy = (self.end.y - self.start.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// True when both endpoints are the same cell.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

/// Decompose an ordered point sequence into consecutive segments.
///
/// With `closed`, one more segment connects the last point back to the
/// first. Fewer than two points yield no segments; validating that is the
/// caller's job (the canvas rejects it with `InsufficientPoints`).
pub fn segments_of(points: &[Point], closed: bool) -> Vec<Segment> {
    // zip points[..n-1] with points[1..], like pairing start/end lists
    let mut segments: Vec<Segment> = points
        .windows(2)
        .map(|pair| Segment::new(pair[0], pair[1]))
        .collect();

    if closed && points.len() >= 2 {
        // `windows` never yields the wrap-around pair, so add it here
        segments.push(Segment::new(points[points.len() - 1], points[0]));
    }

    segments
}
