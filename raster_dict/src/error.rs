// Copyright 2025 the Raster Figure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for dictionary operations.

use crate::node::NodeId;
use crate::position::Position;

/// Failures reported by [`PointTree`](crate::PointTree) operations.
///
/// None of these leave the tree modified.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum PointTreeError {
    /// A point is already stored under this position.
    #[error("a point is already stored at {0}")]
    DuplicateKey(Position),
    /// No point is stored under this position.
    #[error("no point is stored at {0}")]
    MissingKey(Position),
    /// The (sub)tree holds no points.
    #[error("the tree holds no points")]
    EmptyDictionary,
    /// The subtree handle no longer refers to a live node.
    #[error("stale node handle {0:?}")]
    StaleNode(NodeId),
}
