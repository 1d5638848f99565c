//! Shape generation - regular n-gon vertices and the named shape catalog.

use std::f64::consts::PI;

use crate::geometry::Point;

/// Generate the vertices of a regular n-gon.
///
/// `point_count` vertices are distributed evenly around a circle of
/// `radius` cells centered on `center`, starting at `rotation_degrees`
/// and sweeping clockwise in canvas coordinates (y grows downward). Each
/// vertex is rounded to the nearest cell.
///
/// The angle step is the real-valued `360.0 / point_count`, so counts that
/// do not divide 360 still come out geometrically even.
pub fn regular_polygon(
    center: Point,
    radius: f64,
    point_count: usize,
    rotation_degrees: f64,
) -> Vec<Point> {
    if point_count == 0 {
        return Vec::new();
    }

    let step = 360.0 / point_count as f64;

    (0..point_count)
        .map(|i| {
            let angle = (rotation_degrees + i as f64 * step) * PI / 180.0;
            let x = center.x as f64 + radius * angle.cos();
            let y = center.y as f64 + radius * angle.sin();
            Point::new(x.round() as i32, y.round() as i32)
        })
        .collect()
}

/// Named shape presets for the CLI and TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Triangle,
    Square,
    Diamond,
    Pentagon,
    Hexagon,
    Octagon,
    /// A 24-gon, which reads as a circle at terminal resolution.
    Circle,
}

impl ShapeKind {
    /// All shapes, in display order.
    pub fn all() -> &'static [ShapeKind] {
        &[
            ShapeKind::Triangle,
            ShapeKind::Square,
            ShapeKind::Diamond,
            ShapeKind::Pentagon,
            ShapeKind::Hexagon,
            ShapeKind::Octagon,
            ShapeKind::Circle,
        ]
    }

    /// Lowercase name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Triangle => "triangle",
            ShapeKind::Square => "square",
            ShapeKind::Diamond => "diamond",
            ShapeKind::Pentagon => "pentagon",
            ShapeKind::Hexagon => "hexagon",
            ShapeKind::Octagon => "octagon",
            ShapeKind::Circle => "circle",
        }
    }

    /// Parse a shape name, case-insensitively.
    pub fn from_name(name: &str) -> Option<ShapeKind> {
        ShapeKind::all()
            .iter()
            .find(|kind| kind.name() == name.to_lowercase())
            .copied()
    }

    /// Number of vertices the preset uses.
    pub fn point_count(&self) -> usize {
        match self {
            ShapeKind::Triangle => 3,
            ShapeKind::Square | ShapeKind::Diamond => 4,
            ShapeKind::Pentagon => 5,
            ShapeKind::Hexagon => 6,
            ShapeKind::Octagon => 8,
            ShapeKind::Circle => 24,
        }
    }

    /// Default rotation so the preset sits upright.
    ///
    /// A square needs a 45-degree twist to show flat edges; the diamond is
    /// the same 4-gon left on its corner. Odd-count shapes start at -90 so
    /// one vertex points straight up.
    pub fn base_rotation(&self) -> f64 {
        match self {
            ShapeKind::Triangle | ShapeKind::Pentagon => -90.0,
            ShapeKind::Square => 45.0,
            ShapeKind::Diamond | ShapeKind::Circle => 0.0,
            ShapeKind::Hexagon | ShapeKind::Octagon => 22.5,
        }
    }

    /// Generate this preset's vertices around `center`.
    ///
    /// `rotation_degrees` is added on top of the preset's base rotation.
    pub fn vertices(&self, center: Point, radius: f64, rotation_degrees: f64) -> Vec<Point> {
        regular_polygon(
            center,
            radius,
            self.point_count(),
            self.base_rotation() + rotation_degrees,
        )
    }
}
