//! Real-valued geometry value types: points and shapes with centroids.
//!
//! These mirror the canvas types but live in continuous space. The
//! deliberately unusual part is the comparison semantics: two shapes are
//! equal when their *centroids* are equal. Two differently shaped polygons
//! with the same centroid compare equal - that is the defined contract,
//! not a bug. Shapes sort by `centroid_distance()`, an explicit key rather
//! than a `PartialOrd` impl: distinct centroids can tie on distance, and a
//! trait ordering that calls such shapes `Equal` while `==` says otherwise
//! would break the std comparison contract.

use std::fmt;

/// Error type for figure operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FigureError {
    /// The centroid of zero points is undefined.
    EmptyShape,
}

impl fmt::Display for FigureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FigureError::EmptyShape => write!(f, "an empty shape has no centroid"),
        }
    }
}

impl std::error::Error for FigureError {}

/// A point in continuous 2D space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance from (0, 0).
    #[inline]
    pub fn distance_from_origin(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/// Display format is `(x/y)`, matching the canvas point format.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}/{})", self.x, self.y)
    }
}

/// An ordered, non-unique collection of points.
///
/// ## Rust Lesson #5: Newtype Wrappers
///
/// The Python original subclassed `list` to add `centroid()`. Rust's
/// answer is a struct wrapping the `Vec`, exposing only what the type
/// needs - nobody can `.remove(0)` a shape into an inconsistent state
/// through a base-class method we forgot about.
#[derive(Debug, Clone)]
pub struct Shape {
    points: Vec<Point>,
}

impl Shape {
    /// Create a shape over the given points. Empty shapes are allowed;
    /// only `centroid()` rejects them.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Arithmetic mean of all point coordinates.
    pub fn centroid(&self) -> Result<Point, FigureError> {
        if self.points.is_empty() {
            return Err(FigureError::EmptyShape);
        }
        let n = self.points.len() as f64;
        let sum_x: f64 = self.points.iter().map(|p| p.x).sum();
        let sum_y: f64 = self.points.iter().map(|p| p.y).sum();
        Ok(Point::new(sum_x / n, sum_y / n))
    }

    /// Distance of the centroid from the origin - the sort key for
    /// ordering shapes, used with `sort_by` and `partial_cmp`.
    pub fn centroid_distance(&self) -> Result<f64, FigureError> {
        Ok(self.centroid()?.distance_from_origin())
    }
}

impl From<Vec<Point>> for Shape {
    fn from(points: Vec<Point>) -> Self {
        Shape::new(points)
    }
}

/// Shapes are equal when their centroids are equal. Empty shapes have no
/// centroid and are never equal, not even to each other.
impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        match (self.centroid(), other.centroid()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

/// Bracketed list of points: `[(0/0), (1/1)]`.
impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", point)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(origin_x: f64, origin_y: f64) -> Shape {
        Shape::new(vec![
            Point::new(origin_x, origin_y),
            Point::new(origin_x, origin_y + 1.0),
            Point::new(origin_x + 1.0, origin_y + 1.0),
            Point::new(origin_x + 1.0, origin_y),
        ])
    }

    #[test]
    fn point_display() {
        assert_eq!(Point::new(2.3, 43.14).to_string(), "(2.3/43.14)");
        assert_eq!(Point::new(0.5, 0.0).to_string(), "(0.5/0)");
    }

    #[test]
    fn distance_from_origin() {
        assert_eq!(Point::new(1.0, 1.0).distance_from_origin(), 2.0_f64.sqrt());
        assert_eq!(Point::new(3.0, 4.0).distance_from_origin(), 5.0);
        assert_eq!(Point::new(0.0, 0.0).distance_from_origin(), 0.0);
    }

    #[test]
    fn centroid_is_the_mean() {
        let centroid = square(0.0, 0.0).centroid().unwrap();
        assert_eq!(centroid, Point::new(0.5, 0.5));

        let single = Shape::new(vec![Point::new(5.53, 2.5)]);
        assert_eq!(single.centroid().unwrap(), Point::new(5.53, 2.5));
    }

    #[test]
    fn empty_shape_has_no_centroid() {
        let empty = Shape::new(vec![]);
        assert_eq!(empty.centroid(), Err(FigureError::EmptyShape));
    }

    #[test]
    fn equality_compares_centroids_not_points() {
        // An axis-aligned unit square and the diamond inscribed in it:
        // different vertex sets, same centroid (0.5, 0.5).
        let s1 = square(0.0, 0.0);
        let s2 = Shape::new(vec![
            Point::new(0.0, 0.5),
            Point::new(0.5, 1.0),
            Point::new(1.0, 0.5),
            Point::new(0.5, 0.0),
        ]);
        assert_eq!(s1, s2);
        assert_ne!(s1, square(5.0, 5.0));
    }

    #[test]
    fn empty_shapes_are_never_equal() {
        let empty = Shape::new(vec![]);
        assert_ne!(empty, Shape::new(vec![]));
        assert_ne!(empty, square(0.0, 0.0));
    }

    #[test]
    fn sorting_by_centroid_distance() {
        let near = square(0.0, 0.0);
        let mid = square(5.0, 5.0);
        let far = square(10.0, 10.0);

        assert!(near.centroid_distance().unwrap() < mid.centroid_distance().unwrap());
        assert!(mid.centroid_distance().unwrap() < far.centroid_distance().unwrap());

        let mut shapes = vec![far.clone(), near.clone(), mid.clone()];
        shapes.sort_by(|a, b| {
            let da = a.centroid_distance().unwrap();
            let db = b.centroid_distance().unwrap();
            da.partial_cmp(&db).unwrap()
        });
        assert_eq!(shapes[0], near);
        assert_eq!(shapes[1], mid);
        assert_eq!(shapes[2], far);
    }

    #[test]
    fn empty_shapes_have_no_sort_key() {
        let empty = Shape::new(vec![]);
        assert_eq!(empty.centroid_distance(), Err(FigureError::EmptyShape));
    }

    #[test]
    fn equidistant_centroids_tie_on_distance_but_stay_unequal() {
        // Distinct centroids, same distance from the origin: the sort key
        // ties while equality (centroid comparison) says unequal.
        let a = Shape::new(vec![Point::new(1.0, 0.0)]);
        let b = Shape::new(vec![Point::new(0.0, 1.0)]);

        assert_eq!(
            a.centroid_distance().unwrap(),
            b.centroid_distance().unwrap()
        );
        assert_ne!(a, b);
    }

    #[test]
    fn shape_display_is_a_bracketed_list() {
        let shape = Shape::new(vec![
            Point::new(2.3, 43.14),
            Point::new(5.53, 2.5),
            Point::new(12.2, 28.7),
        ]);
        assert_eq!(shape.to_string(), "[(2.3/43.14), (5.53/2.5), (12.2/28.7)]");
        assert_eq!(Shape::new(vec![]).to_string(), "[]");
    }
}
