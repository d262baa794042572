// Copyright 2025 the Raster Figure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree node representation: generational handles and arena slots.

use crate::position::ColoredPoint;

/// Identifier for a node in a [`PointTree`](crate::PointTree).
///
/// This is a small, copyable handle consisting of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On allocation, a fresh slot is used with generation `1`.
/// - When a node is freed (a removal splices it out, or drops the terminal markers of a
///   node that becomes terminal itself), any existing `NodeId` that pointed to that slot is stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `NodeId`.
/// - A slot whose generation has reached `u32::MAX` is retired instead of reused.
///
/// Inserting into a terminal marker converts that node in place, so a `NodeId` obtained
/// for an absent key stays live and refers to the new internal node afterwards.
///
/// Use [`PointTree::is_alive`](crate::PointTree::is_alive) to check whether a `NodeId` still
/// refers to a live node. Stale `NodeId`s never alias a different live node because the
/// generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }
}

/// Payload of a node: either a stored point with both child slots populated, or an
/// empty marker.
#[derive(Clone, Debug)]
pub(crate) enum NodeKind {
    Internal {
        point: ColoredPoint,
        left: NodeId,
        right: NodeId,
    },
    Terminal,
}

/// One arena slot.
///
/// `parent` is a non-owning back-link. Terminal markers keep it too, so upward walks can
/// start from the place where a missing key would sit.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) generation: u32,
    pub(crate) parent: Option<NodeId>,
    pub(crate) kind: NodeKind,
}

impl Node {
    pub(crate) const fn terminal(generation: u32, parent: Option<NodeId>) -> Self {
        Self {
            generation,
            parent,
            kind: NodeKind::Terminal,
        }
    }

    pub(crate) const fn is_terminal(&self) -> bool {
        matches!(self.kind, NodeKind::Terminal)
    }

    pub(crate) const fn point(&self) -> Option<ColoredPoint> {
        match self.kind {
            NodeKind::Internal { point, .. } => Some(point),
            NodeKind::Terminal => None,
        }
    }

    pub(crate) const fn children(&self) -> Option<(NodeId, NodeId)> {
        match self.kind {
            NodeKind::Internal { left, right, .. } => Some((left, right)),
            NodeKind::Terminal => None,
        }
    }
}
