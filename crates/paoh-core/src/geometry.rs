//! Geometric primitives for plot projection.
//!
//! - [`Point`] - A 2D coordinate in plot space
//! - [`Size`] - Width and height dimensions
//! - [`Insets`] - Margin values for four sides
//!
//! # Coordinate System
//!
//! PAOH plots use a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X (time)
//!     │
//!     │
//!     ▼
//!    +Y (lanes)
//! ```
//!
//! Projected layouts are expressed relative to the top-left corner of the
//! plotting area; the renderer translates them by the canvas margins.

/// A 2D point in plot coordinate space.
///
/// # Examples
///
/// ```
/// # use paoh_core::geometry::Point;
/// let p = Point::new(15.0, 25.0);
/// assert_eq!(p.x(), 15.0);
/// assert!(p.is_finite());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns `true` if both coordinates are finite numbers.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Represents the dimensions of an area with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns a new Size with the insets removed from both dimensions.
    ///
    /// The result may be negative when the insets exceed the size; callers
    /// validate the extent before using it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use paoh_core::geometry::{Insets, Size};
    /// let canvas = Size::new(1200.0, 800.0);
    /// let plot = canvas.shrink(Insets::new(30.0, 20.0, 20.0, 150.0));
    /// assert_eq!(plot.width(), 1030.0);
    /// assert_eq!(plot.height(), 750.0);
    /// ```
    pub fn shrink(self, insets: Insets) -> Self {
        Self {
            width: self.width - insets.horizontal_sum(),
            height: self.height - insets.vertical_sum(),
        }
    }

    /// Returns `true` if both dimensions are finite and strictly positive.
    pub fn is_drawable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Represents spacing around an area with potentially different values for each side
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates new insets with specified values for each side
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Returns the top inset value
    pub fn top(self) -> f32 {
        self.top
    }

    /// Returns the right inset value
    pub fn right(self) -> f32 {
        self.right
    }

    /// Returns the bottom inset value
    pub fn bottom(self) -> f32 {
        self.bottom
    }

    /// Returns the left inset value
    pub fn left(self) -> f32 {
        self.left
    }

    /// Returns the sum of left and right insets
    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    /// Returns the sum of top and bottom insets
    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }
}
