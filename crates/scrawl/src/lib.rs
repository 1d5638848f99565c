//! # scrawl
//!
//! Character-grid vector drawing: rasterize lines, polygons, rectangles,
//! and regular n-gons onto a fixed-size text canvas, plus a small set of
//! real-valued geometry value types (points and shapes with centroids).
//!
//! ## Rust Lesson #1: Modules
//!
//! Rust modules are like ES6 modules but more explicit:
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level
//!
//! Unlike Node.js, you must explicitly declare every module.

pub mod canvas;
pub mod figures;
pub mod geometry;
pub mod raster;
pub mod shapes;

// Re-export common types at crate root for convenience.
pub use canvas::{Canvas, CanvasError};
pub use geometry::{Point, Segment};
pub use raster::rasterize;
pub use shapes::{regular_polygon, ShapeKind};
