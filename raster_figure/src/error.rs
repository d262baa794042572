// Copyright 2025 the Raster Figure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for figure operations.

use raster_dict::{PointTreeError, Position};

/// Failures reported by [`Figure`](crate::Figure) point edits.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum FigureError {
    /// The figure already has a point at this local position.
    #[error("figure already has a point at local position {0}")]
    DuplicateLocalPosition(Position),
    /// The figure has no point at this local position.
    #[error("figure has no point at local position {0}")]
    MissingLocalPosition(Position),
    /// Any other dictionary failure.
    #[error(transparent)]
    Points(PointTreeError),
}

impl From<PointTreeError> for FigureError {
    fn from(err: PointTreeError) -> Self {
        match err {
            PointTreeError::DuplicateKey(p) => Self::DuplicateLocalPosition(p),
            PointTreeError::MissingKey(p) => Self::MissingLocalPosition(p),
            other => Self::Points(other),
        }
    }
}

/// Returned when parsing an unknown [`FigureKind`](crate::FigureKind) tag.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown figure kind; expected one of `fixed`, `user`, `computer`, `target`")]
pub struct ParseFigureKindError;
