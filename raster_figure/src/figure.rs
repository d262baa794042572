// Copyright 2025 the Raster Figure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Figures and the two-phase overlap test.

use raster_dict::{ColoredPoint, Iter, PointTree, Position};
use tracing::trace;

use crate::bounds::BoundingBox;
use crate::error::FigureError;
use crate::types::{FigureKind, PixelScan};

/// A sparse raster figure.
///
/// Points are stored in figure-local coordinates; [`offset`](Self::offset) places the
/// figure in world space. `width` and `height` describe the enclosing rectangle and are
/// used only by the bounding-box phase of [`intersects`](Self::intersects); points
/// outside that rectangle are accepted as-is.
#[derive(Debug)]
pub struct Figure {
    id: u32,
    width: i32,
    height: i32,
    kind: FigureKind,
    offset: Position,
    points: PointTree,
}

impl Figure {
    /// Create a figure with no points.
    pub fn new(id: u32, width: i32, height: i32, kind: FigureKind, offset: Position) -> Self {
        Self {
            id,
            width,
            height,
            kind,
            offset,
            points: PointTree::new(),
        }
    }

    /// Identifier of this figure.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Width of the enclosing rectangle.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the enclosing rectangle.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Classification tag.
    pub fn kind(&self) -> FigureKind {
        self.kind
    }

    /// Update the classification tag.
    pub fn set_kind(&mut self, kind: FigureKind) {
        self.kind = kind;
    }

    /// World-space position of the local origin.
    pub fn offset(&self) -> Position {
        self.offset
    }

    /// Move the figure in world space.
    pub fn set_offset(&mut self, offset: Position) {
        self.offset = offset;
    }

    /// Add a point in local coordinates.
    ///
    /// Fails with [`FigureError::DuplicateLocalPosition`] if that position is taken.
    pub fn add_point(&mut self, point: ColoredPoint) -> Result<(), FigureError> {
        self.points.insert(point).map_err(FigureError::from)
    }

    /// Remove and return the point at a local position.
    pub fn remove_point(&mut self, local: Position) -> Result<ColoredPoint, FigureError> {
        self.points.remove(local).map_err(FigureError::from)
    }

    /// The point at a local position, if any.
    pub fn point_at(&self, local: Position) -> Option<ColoredPoint> {
        self.points.find(local)
    }

    /// True if the figure has a point at a local position.
    pub fn contains_local_position(&self, local: Position) -> bool {
        self.points.find(local).is_some()
    }

    /// Number of points.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Points in ascending local position order.
    pub fn points(&self) -> Iter<'_> {
        self.points.iter()
    }

    /// The enclosing rectangle in world space, `offset` to `offset + (width, height)`
    /// with both edges inclusive.
    pub fn world_bounds(&self) -> BoundingBox {
        BoundingBox::from_xywh(
            i64::from(self.offset.x),
            i64::from(self.offset.y),
            i64::from(self.width),
            i64::from(self.height),
        )
    }

    /// [`world_bounds`](Self::world_bounds) as a Kurbo rectangle.
    pub fn world_rect(&self) -> kurbo::Rect {
        self.world_bounds().to_rect()
    }

    /// World-space location of a local position, as a Kurbo point.
    pub fn world_point(&self, local: Position) -> kurbo::Point {
        let x = i64::from(self.offset.x) + i64::from(local.x);
        let y = i64::from(self.offset.y) + i64::from(local.y);
        #[allow(
            clippy::cast_precision_loss,
            reason = "Sums of two i32 values are represented exactly in f64."
        )]
        let (x, y) = (x as f64, y as f64);
        kurbo::Point::new(x, y)
    }

    /// Map a position local to this figure into `other`'s local frame.
    ///
    /// Returns `None` when the result does not fit in `i32`; no point can be stored there.
    pub fn local_to_other(&self, local: Position, other: &Self) -> Option<Position> {
        let x = i64::from(self.offset.x) + i64::from(local.x) - i64::from(other.offset.x);
        let y = i64::from(self.offset.y) + i64::from(local.y) - i64::from(other.offset.y);
        Some(Position::new(i32::try_from(x).ok()?, i32::try_from(y).ok()?))
    }

    /// Whether this figure overlaps `other`, using [`PixelScan::ExcludeMaximum`].
    ///
    /// See [`intersects_with`](Self::intersects_with).
    pub fn intersects(&self, other: &Self) -> bool {
        self.intersects_with(other, PixelScan::default())
    }

    /// Whether this figure overlaps `other`.
    ///
    /// First the enclosing rectangles are compared; if they are apart, no point is looked
    /// at. Otherwise this figure's points are walked in ascending order, each one is
    /// translated into `other`'s local frame and looked up there. The first hit answers
    /// true. `scan` selects whether the point at this figure's maximum position takes part.
    pub fn intersects_with(&self, other: &Self, scan: PixelScan) -> bool {
        if !self.world_bounds().overlaps(&other.world_bounds()) {
            trace!(this = self.id, other = other.id, "bounding boxes apart");
            return false;
        }
        let (Ok(first), Ok(last)) = (self.points.minimum(), self.points.maximum()) else {
            return false;
        };
        let last = last.position();
        let mut cursor = Some(first);
        while let Some(point) = cursor {
            let local = point.position();
            if local == last && scan == PixelScan::ExcludeMaximum {
                break;
            }
            if let Some(theirs) = self.local_to_other(local, other)
                && other.contains_local_position(theirs)
            {
                trace!(this = self.id, other = other.id, %local, %theirs, "pixel overlap");
                return true;
            }
            cursor = self.points.successor(local);
        }
        false
    }
}
