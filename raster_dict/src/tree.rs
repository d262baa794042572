// Copyright 2025 the Raster Figure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core dictionary implementation: structure, updates, ordered queries.

use alloc::vec::Vec;
use core::cmp::Ordering;

use tracing::{debug, trace};

use crate::error::PointTreeError;
use crate::iter::Iter;
use crate::node::{Node, NodeId, NodeKind};
use crate::position::{ColoredPoint, Position};

impl Default for PointTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered dictionary mapping [`Position`] to [`ColoredPoint`].
///
/// Unbalanced binary search tree stored in an arena. Every internal node owns two child
/// slots that are always populated, either with another internal node or with a terminal
/// marker. The tree starts as a single terminal root.
///
/// Every operation comes in two forms: one starting at [`root`](Self::root), and an
/// `*_in` form taking an explicit subtree root. Operating on a subtree does not re-check
/// that keys stay ordered relative to the rest of the tree; callers pick subtrees that
/// actually enclose the key.
pub struct PointTree {
    nodes: Vec<Option<Node>>, // slots
    generations: Vec<u32>,    // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    root: NodeId,
    len: usize,
}

impl core::fmt::Debug for PointTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        let terminal = self
            .nodes
            .iter()
            .flatten()
            .filter(|n| n.is_terminal())
            .count();
        f.debug_struct("PointTree")
            .field("len", &self.len)
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("terminal", &terminal)
            .field("free_list", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

impl PointTree {
    /// Create an empty tree: a lone terminal root.
    pub fn new() -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            root: NodeId::new(0, 0),
            len: 0,
        };
        tree.root = tree.alloc_terminal(None);
        tree
    }

    /// Handle of the current root node.
    ///
    /// The root may change when the tree becomes non-empty again after a splice removal.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no points are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove all points. Every previously issued [`NodeId`] becomes stale.
    pub fn clear(&mut self) {
        for idx in 0..self.nodes.len() {
            if self.nodes[idx].is_some() {
                self.release(idx);
            }
        }
        self.len = 0;
        self.root = self.alloc_terminal(None);
    }

    /// Iterate stored points in ascending position order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Look up the point stored at `key`.
    pub fn find(&self, key: Position) -> Option<ColoredPoint> {
        self.find_in(self.root, key)
    }

    /// True if a point is stored at `key`.
    pub fn contains(&self, key: Position) -> bool {
        self.find(key).is_some()
    }

    /// Insert `point` keyed by its position.
    ///
    /// Fails with [`PointTreeError::DuplicateKey`] if that position is already taken.
    pub fn insert(&mut self, point: ColoredPoint) -> Result<(), PointTreeError> {
        self.insert_in(self.root, point)
    }

    /// Remove and return the point stored at `key`.
    ///
    /// Fails with [`PointTreeError::MissingKey`] if nothing is stored there.
    pub fn remove(&mut self, key: Position) -> Result<ColoredPoint, PointTreeError> {
        self.remove_in(self.root, key)
    }

    /// The point with the smallest position.
    pub fn minimum(&self) -> Result<ColoredPoint, PointTreeError> {
        self.minimum_in(self.root)
    }

    /// The point with the largest position.
    pub fn maximum(&self) -> Result<ColoredPoint, PointTreeError> {
        self.maximum_in(self.root)
    }

    /// The point with the smallest position strictly greater than `key`.
    ///
    /// `key` does not have to be stored.
    pub fn successor(&self, key: Position) -> Option<ColoredPoint> {
        self.successor_in(self.root, key)
    }

    /// The point with the largest position strictly less than `key`.
    ///
    /// `key` does not have to be stored.
    pub fn predecessor(&self, key: Position) -> Option<ColoredPoint> {
        self.predecessor_in(self.root, key)
    }

    /// Look up `key` below `subtree`. Stale handles find nothing.
    pub fn find_in(&self, subtree: NodeId, key: Position) -> Option<ColoredPoint> {
        if !self.is_alive(subtree) {
            return None;
        }
        self.node(self.search(subtree, key)).point()
    }

    /// Insert `point` below `subtree`.
    ///
    /// The terminal marker the search lands on is converted in place into an internal node
    /// holding `point`, with two fresh terminal children. Nothing changes on error.
    pub fn insert_in(&mut self, subtree: NodeId, point: ColoredPoint) -> Result<(), PointTreeError> {
        self.check_alive(subtree)?;
        let key = point.position();
        let slot = self.search(subtree, key);
        if !self.node(slot).is_terminal() {
            debug!(%key, "rejected insertion of duplicate key");
            return Err(PointTreeError::DuplicateKey(key));
        }
        let left = self.alloc_terminal(Some(slot));
        let right = self.alloc_terminal(Some(slot));
        self.node_mut(slot).kind = NodeKind::Internal { point, left, right };
        self.len += 1;
        Ok(())
    }

    /// Remove and return the point stored at `key` below `subtree`.
    ///
    /// A node with two terminal children becomes terminal itself. A node with exactly one
    /// internal child is spliced out and that child takes its place. A node with two
    /// internal children takes over the point of its in-order successor, which is then
    /// removed instead. Nothing changes on error.
    pub fn remove_in(
        &mut self,
        subtree: NodeId,
        key: Position,
    ) -> Result<ColoredPoint, PointTreeError> {
        self.check_alive(subtree)?;
        let found = self.search(subtree, key);
        let Some(point) = self.node(found).point() else {
            debug!(%key, "rejected removal of missing key");
            return Err(PointTreeError::MissingKey(key));
        };
        self.remove_node(found);
        self.len -= 1;
        Ok(point)
    }

    /// Leftmost point below `subtree`.
    pub fn minimum_in(&self, subtree: NodeId) -> Result<ColoredPoint, PointTreeError> {
        self.check_alive(subtree)?;
        if self.node(subtree).is_terminal() {
            return Err(PointTreeError::EmptyDictionary);
        }
        Ok(self.point(self.leftmost(subtree)))
    }

    /// Rightmost point below `subtree`.
    pub fn maximum_in(&self, subtree: NodeId) -> Result<ColoredPoint, PointTreeError> {
        self.check_alive(subtree)?;
        if self.node(subtree).is_terminal() {
            return Err(PointTreeError::EmptyDictionary);
        }
        Ok(self.point(self.rightmost(subtree)))
    }

    /// Successor of `key`, searching from `subtree`.
    ///
    /// If the node holding `key` has an internal right child, this is the minimum of that
    /// subtree. Otherwise the walk climbs parent links from wherever the search landed
    /// (terminal markers included) and returns the first ancestor greater than `key`.
    pub fn successor_in(&self, subtree: NodeId, key: Position) -> Option<ColoredPoint> {
        if !self.is_alive(subtree) || self.node(subtree).is_terminal() {
            return None;
        }
        let found = self.search(subtree, key);
        if let Some((_, right)) = self.node(found).children()
            && !self.node(right).is_terminal()
        {
            return Some(self.point(self.leftmost(right)));
        }
        self.first_ancestor(found, key, Ordering::Greater)
    }

    /// Predecessor of `key`, searching from `subtree`. Mirror image of
    /// [`successor_in`](Self::successor_in).
    pub fn predecessor_in(&self, subtree: NodeId, key: Position) -> Option<ColoredPoint> {
        if !self.is_alive(subtree) || self.node(subtree).is_terminal() {
            return None;
        }
        let found = self.search(subtree, key);
        if let Some((left, _)) = self.node(found).children()
            && !self.node(left).is_terminal()
        {
            return Some(self.point(self.rightmost(left)));
        }
        self.first_ancestor(found, key, Ordering::Less)
    }

    /// The node where a search for `key` from the root lands: the internal node holding
    /// `key`, or the terminal marker where it would be inserted.
    pub fn node_of(&self, key: Position) -> NodeId {
        self.search(self.root, key)
    }

    /// Returns true if `id` refers to a live node.
    ///
    /// See [`NodeId`] docs for the generational semantics.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .map(|n| n.generation == id.generation())
            .unwrap_or(false)
    }

    /// Whether a live node is a terminal marker. `None` for stale handles.
    pub fn is_terminal(&self, id: NodeId) -> Option<bool> {
        self.node_opt(id).map(Node::is_terminal)
    }

    /// Parent of a live node. `None` for the root and for stale handles.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id)?.parent
    }

    /// Left and right children of a live internal node.
    pub fn children_of(&self, id: NodeId) -> Option<(NodeId, NodeId)> {
        self.node_opt(id)?.children()
    }

    /// Point held by a live internal node.
    pub fn point_of(&self, id: NodeId) -> Option<ColoredPoint> {
        self.node_opt(id)?.point()
    }

    /// Number of internal nodes on the longest root-to-terminal path.
    ///
    /// There is no rebalancing, so this depends on insertion order and is `len()` in the
    /// worst case.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = Vec::new();
        stack.push((self.root, 0_usize));
        while let Some((id, d)) = stack.pop() {
            if let Some((left, right)) = self.node(id).children() {
                max = max.max(d + 1);
                stack.push((left, d + 1));
                stack.push((right, d + 1));
            }
        }
        max
    }

    // --- internals ---

    fn search(&self, from: NodeId, key: Position) -> NodeId {
        let mut cur = from;
        loop {
            match &self.node(cur).kind {
                NodeKind::Terminal => return cur,
                NodeKind::Internal { point, left, right } => match key.cmp(&point.position()) {
                    Ordering::Equal => return cur,
                    Ordering::Less => cur = *left,
                    Ordering::Greater => cur = *right,
                },
            }
        }
    }

    fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some((left, _)) = self.node(id).children() {
            if self.node(left).is_terminal() {
                break;
            }
            id = left;
        }
        id
    }

    fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some((_, right)) = self.node(id).children() {
            if self.node(right).is_terminal() {
                break;
            }
            id = right;
        }
        id
    }

    /// First proper ancestor of `from` whose key compares to `key` as `side`.
    fn first_ancestor(&self, from: NodeId, key: Position, side: Ordering) -> Option<ColoredPoint> {
        let mut cur = self.node(from).parent;
        while let Some(id) = cur {
            let point = self.point(id);
            if point.position().cmp(&key) == side {
                return Some(point);
            }
            cur = self.node(id).parent;
        }
        None
    }

    fn remove_node(&mut self, id: NodeId) {
        let Some((left, right)) = self.node(id).children() else {
            return;
        };
        match (self.node(left).is_terminal(), self.node(right).is_terminal()) {
            (true, true) => {
                trace!(?id, "removal: node reverts to terminal");
                self.free(left);
                self.free(right);
                self.node_mut(id).kind = NodeKind::Terminal;
            }
            (true, false) => self.splice(id, right, left),
            (false, true) => self.splice(id, left, right),
            (false, false) => {
                let next = self.leftmost(right);
                let moved = self.point(next);
                trace!(?id, key = %moved.position(), "removal: taking over successor point");
                if let NodeKind::Internal { point, .. } = &mut self.node_mut(id).kind {
                    *point = moved;
                }
                // `next` has a terminal left child, so this does not recurse again.
                self.remove_node(next);
            }
        }
    }

    /// Replace `id` by its only internal child and free `id` along with its terminal child.
    fn splice(&mut self, id: NodeId, child: NodeId, marker: NodeId) {
        trace!(?id, ?child, "removal: splicing node out");
        let parent = self.node(id).parent;
        self.node_mut(child).parent = parent;
        match parent {
            Some(p) => {
                if let NodeKind::Internal { left, right, .. } = &mut self.node_mut(p).kind {
                    if *left == id {
                        *left = child;
                    } else if *right == id {
                        *right = child;
                    }
                }
            }
            None => self.root = child,
        }
        self.free(marker);
        self.free(id);
    }

    fn alloc_terminal(&mut self, parent: Option<NodeId>) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            // Slots at `u32::MAX` are retired in `free` and never come back here.
            let generation = self.generations[idx] + 1;
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::terminal(generation, parent));
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::terminal(generation, parent)));
            self.generations.push(generation);
            (self.nodes.len() - 1, generation)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId uses 32-bit indices by design."
        )]
        let idx = idx as u32;
        NodeId::new(idx, generation)
    }

    fn free(&mut self, id: NodeId) {
        self.release(id.idx());
    }

    /// Empty a slot and queue it for reuse, unless its generation is exhausted.
    fn release(&mut self, idx: usize) {
        self.nodes[idx] = None;
        if self.generations[idx] < u32::MAX {
            self.free_list.push(idx);
        } else {
            trace!(idx, "retiring slot with exhausted generation");
        }
    }

    fn check_alive(&self, id: NodeId) -> Result<(), PointTreeError> {
        if self.is_alive(id) {
            Ok(())
        } else {
            Err(PointTreeError::StaleNode(id))
        }
    }

    /// Access a node; panics if `id` is stale.
    fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.idx()].as_ref().expect("dangling NodeId")
    }

    /// Access a node mutably; panics if `id` is stale.
    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.idx()].as_mut().expect("dangling NodeId")
    }

    fn node_opt(&self, id: NodeId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        if n.generation != id.generation() {
            return None;
        }
        Some(n)
    }

    /// Point of an internal node; panics on a terminal marker.
    fn point(&self, id: NodeId) -> ColoredPoint {
        self.node(id).point().expect("terminal node has no point")
    }
}

impl<'a> IntoIterator for &'a PointTree {
    type Item = ColoredPoint;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
