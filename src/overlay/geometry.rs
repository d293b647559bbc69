//! Rectangle and point geometry for the pixel canvas.
//!
//! Coordinates are native image pixels, 1:1 against the fixed 1000x1000
//! background raster. No scaling transform exists anywhere in the pipeline.

use serde::{Deserialize, Serialize};

use crate::config::CANVAS_SIZE;
use crate::error_handling::GeometryError;

/// A point in canvas or viewport space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position in pixels.
    pub x: f64,
    /// Vertical position in pixels.
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge in pixels.
    pub x: f64,
    /// Top edge in pixels.
    pub y: f64,
    /// Width in pixels, positive for a valid rectangle.
    pub width: f64,
    /// Height in pixels, positive for a valid rectangle.
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle without validating it.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether this rectangle satisfies the canvas invariant: finite,
    /// non-negative origin, positive extent, contained in the
    /// [`CANVAS_SIZE`] square.
    pub fn is_valid(&self) -> bool {
        let finite = self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite();
        finite
            && self.x >= 0.0
            && self.y >= 0.0
            && self.width > 0.0
            && self.height > 0.0
            && self.x + self.width <= CANVAS_SIZE
            && self.y + self.height <= CANVAS_SIZE
    }

    /// Whether the point lies inside this rectangle.
    ///
    /// Edges are inclusive on the top/left and exclusive on the
    /// bottom/right, so adjacent rectangles do not double-claim their
    /// shared border.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    /// Center of the rectangle: `coordinate + dimension / 2`.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// A viewport in screen space, used for tooltip placement and scroll math.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Viewport width in pixels.
    pub width: f64,
    /// Viewport height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Creates a new viewport.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Parses an `"x1,y1,x2,y2"` quad-coordinate string into a rectangle.
///
/// The corner order is not significant: the rectangle is normalized to
/// `{x: min, y: min, width: |x2-x1|, height: |y2-y1|}`.
///
/// # Errors
///
/// Returns a [`GeometryError`] when the string does not contain exactly
/// four values, a value is not a finite number, or the normalized
/// rectangle has zero extent. Bounds checking against the canvas is a
/// separate concern, see [`Rect::is_valid`].
pub fn parse_quad(coords: &str) -> Result<Rect, GeometryError> {
    let parts: Vec<&str> = coords.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        return Err(GeometryError::WrongArity(parts.len()));
    }

    let mut values = [0.0f64; 4];
    for (slot, part) in values.iter_mut().zip(&parts) {
        let parsed: f64 = part
            .parse()
            .map_err(|_| GeometryError::NotFinite((*part).to_string()))?;
        if !parsed.is_finite() {
            return Err(GeometryError::NotFinite((*part).to_string()));
        }
        *slot = parsed;
    }

    let [x1, y1, x2, y2] = values;
    let rect = Rect::new(x1.min(x2), y1.min(y2), (x2 - x1).abs(), (y2 - y1).abs());
    if rect.width == 0.0 || rect.height == 0.0 {
        return Err(GeometryError::ZeroExtent);
    }
    Ok(rect)
}

/// Parses and bounds-checks a quad string in one step.
///
/// # Errors
///
/// Everything [`parse_quad`] rejects, plus [`GeometryError::OutOfBounds`]
/// for rectangles that violate the canvas invariant.
pub fn parse_valid_quad(coords: &str) -> Result<Rect, GeometryError> {
    let rect = parse_quad(coords)?;
    if !rect.is_valid() {
        return Err(GeometryError::OutOfBounds);
    }
    Ok(rect)
}

/// Scroll offset that centers `rect` in the viewport.
///
/// `scroll = center - viewport / 2` on each axis. The value is returned
/// unclamped; clamping to the scrollable range is the render layer's job.
pub fn scroll_to_center(rect: &Rect, viewport: &Viewport) -> Point {
    let center = rect.center();
    Point::new(
        center.x - viewport.width / 2.0,
        center.y - viewport.height / 2.0,
    )
}
