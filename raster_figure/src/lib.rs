// Copyright 2025 the Raster Figure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=raster_figure --heading-base-level=0

//! Raster Figure: sparse raster figures with pixel-exact overlap tests.
//!
//! A [`Figure`] is an arbitrary set of colored points in its own local frame, placed in
//! world space by an offset, with a declared enclosing rectangle. Points are kept in a
//! [`raster_dict::PointTree`], one entry per point.
//!
//! ## Overlap test
//!
//! [`Figure::intersects`] runs in two phases:
//!
//! 1. The world-space enclosing rectangles are compared (edges inclusive). If they are
//!    apart the answer is false and no point is looked at.
//! 2. Otherwise this figure's points are walked in ascending position order, translated
//!    into the other figure's local frame (`own offset + local - other offset`) and looked
//!    up there. The first hit answers true.
//!
//! The walk stops before the point at this figure's maximum position, so that point never
//! takes part; a single-point figure therefore never intersects anything. Use
//! [`Figure::intersects_with`] with [`PixelScan::Inclusive`] to test every point.
//!
//! ## Not a renderer
//!
//! This crate does not draw, load images or handle input. Callers build figures with
//! [`Figure::add_point`], move them with [`Figure::set_offset`] and query collisions.
//! [`Figure::world_rect`] and [`Figure::world_point`] hand out Kurbo geometry for whatever
//! draws them.
//!
//! # Example
//!
//! ```rust
//! use raster_dict::{ColoredPoint, Position};
//! use raster_figure::{Figure, FigureKind, PixelScan};
//!
//! let mut a = Figure::new(1, 2, 2, FigureKind::UserMoved, Position::ORIGIN);
//! a.add_point(ColoredPoint::at(1, 1, 0xFF0000FF)).unwrap();
//! a.add_point(ColoredPoint::at(2, 2, 0xFF0000FF)).unwrap();
//!
//! let mut b = Figure::new(2, 2, 2, FigureKind::Fixed, Position::new(1, 1));
//! b.add_point(ColoredPoint::at(0, 0, 0x00FF00FF)).unwrap();
//!
//! // A's local (1, 1) is B's local (0, 0).
//! assert!(a.intersects(&b));
//!
//! // B's only point is its maximum, so only an inclusive scan tests it.
//! assert!(!b.intersects(&a));
//! assert!(b.intersects_with(&a, PixelScan::Inclusive));
//!
//! // Move B far away: the bounding boxes no longer overlap.
//! b.set_offset(Position::new(100, 100));
//! assert!(!a.intersects(&b));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod bounds;
pub mod error;
pub mod figure;
pub mod types;

pub use bounds::BoundingBox;
pub use error::{FigureError, ParseFigureKindError};
pub use figure::Figure;
pub use types::{FigureKind, PixelScan};
