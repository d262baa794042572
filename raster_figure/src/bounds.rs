// Copyright 2025 the Raster Figure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! World-space enclosing rectangles for the coarse overlap phase.

/// A figure's enclosing rectangle in world space, from `offset` to
/// `offset + (width, height)`.
///
/// Coordinates are `i64` so that the far corner of any `i32` figure is representable.
/// A negative width or height is kept as given: the far edge then lies left of (or above)
/// the near one, and [`overlaps`](Self::overlaps) compares the edges as stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    /// Left edge, the figure's offset x.
    pub left: i64,
    /// Top edge, the figure's offset y.
    pub top: i64,
    /// Right edge, `left + width`.
    pub right: i64,
    /// Bottom edge, `top + height`.
    pub bottom: i64,
}

impl BoundingBox {
    /// Box at origin `(x, y)` with the given size.
    pub const fn from_xywh(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            left: x,
            top: y,
            right: x + width,
            bottom: y + height,
        }
    }

    /// False when one of the four separating conditions holds, true otherwise.
    ///
    /// Edges are inclusive, so boxes that only touch overlap.
    pub const fn overlaps(&self, other: &Self) -> bool {
        !(self.left > other.right
            || self.right < other.left
            || self.top > other.bottom
            || self.bottom < other.top)
    }

    /// Convert to a Kurbo rectangle.
    ///
    /// Kurbo orders the corners, so an inverted box comes back with positive size.
    #[allow(
        clippy::cast_precision_loss,
        reason = "Figure coordinates originate from i32 values, which f64 represents exactly."
    )]
    pub fn to_rect(&self) -> kurbo::Rect {
        kurbo::Rect::new(
            self.left as f64,
            self.top as f64,
            self.right as f64,
            self.bottom as f64,
        )
    }
}
