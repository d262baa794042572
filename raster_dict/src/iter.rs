// Copyright 2025 the Raster Figure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ascending iteration over a [`PointTree`].

use core::iter::FusedIterator;

use crate::position::ColoredPoint;
use crate::tree::PointTree;

/// Iterator over the points of a [`PointTree`] in ascending position order.
///
/// Starts at the minimum and steps with [`PointTree::successor`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    tree: &'a PointTree,
    next: Option<ColoredPoint>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(tree: &'a PointTree) -> Self {
        Self {
            tree,
            next: tree.minimum().ok(),
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = ColoredPoint;

    fn next(&mut self) -> Option<ColoredPoint> {
        let current = self.next?;
        self.next = self.tree.successor(current.position());
        Some(current)
    }
}

impl FusedIterator for Iter<'_> {}
