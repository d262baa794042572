// Copyright 2025 the Raster Figure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key and payload types: integer positions and colored points.

use core::cmp::Ordering;
use core::fmt;

/// An integer 2D coordinate.
///
/// Positions are totally ordered in column-major order: `x` is compared first and
/// `y` breaks ties. This is the key order of [`PointTree`](crate::PointTree).
///
/// ```
/// use raster_dict::Position;
///
/// assert!(Position::new(0, 9) < Position::new(1, 0));
/// assert!(Position::new(3, 1) < Position::new(3, 2));
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Position {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Position {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a position from its coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x.cmp(&other.x).then(self.y.cmp(&other.y))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A position paired with an opaque color value.
///
/// Colored points are keyed by [`position`](Self::position) when stored in a
/// [`PointTree`](crate::PointTree); the color is never inspected by the tree.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ColoredPoint {
    position: Position,
    color: u32,
}

impl ColoredPoint {
    /// Create a colored point.
    pub const fn new(position: Position, color: u32) -> Self {
        Self { position, color }
    }

    /// Shorthand for `ColoredPoint::new(Position::new(x, y), color)`.
    pub const fn at(x: i32, y: i32, color: u32) -> Self {
        Self::new(Position::new(x, y), color)
    }

    /// The key of this point.
    pub const fn position(&self) -> Position {
        self.position
    }

    /// The packed color value.
    pub const fn color(&self) -> u32 {
        self.color
    }
}
