// Copyright 2025 the Raster Figure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=raster_dict --heading-base-level=0

//! Raster Dict: an ordered dictionary of colored 2D points keyed by position.
//!
//! - Stores [`ColoredPoint`]s keyed by their [`Position`], ordered column-major (x, then y).
//! - Supports lookup, insertion with duplicate rejection, removal, minimum/maximum and
//!   successor/predecessor queries.
//! - Any operation can start from an explicit subtree root instead of the tree root.
//!
//! The dictionary is a plain, unbalanced binary search tree. Nodes live in an arena and are
//! addressed by generational [`NodeId`] handles. Empty child slots hold real terminal
//! markers that keep a link to their parent, so a successor or predecessor query for a key
//! that is not stored walks up from the spot where that key would have been.
//!
//! Worst-case depth equals the number of insertions; there is no rebalancing.
//!
//! # Example
//!
//! ```rust
//! use raster_dict::{ColoredPoint, PointTree, PointTreeError, Position};
//!
//! let mut tree = PointTree::new();
//! tree.insert(ColoredPoint::at(0, 0, 1)).unwrap();
//! tree.insert(ColoredPoint::at(5, 0, 2)).unwrap();
//! tree.insert(ColoredPoint::at(2, 3, 3)).unwrap();
//!
//! // Keys are unique.
//! assert_eq!(
//!     tree.insert(ColoredPoint::at(5, 0, 2)),
//!     Err(PointTreeError::DuplicateKey(Position::new(5, 0))),
//! );
//!
//! assert_eq!(tree.minimum().unwrap().position(), Position::new(0, 0));
//! assert_eq!(tree.maximum().unwrap().position(), Position::new(5, 0));
//!
//! // In-order walk via successor.
//! let order: Vec<_> = tree.iter().map(|p| p.position()).collect();
//! assert_eq!(
//!     order,
//!     [Position::new(0, 0), Position::new(2, 3), Position::new(5, 0)],
//! );
//!
//! // Successor of a key that is not stored.
//! assert_eq!(tree.successor(Position::new(1, 0)).unwrap().position(), Position::new(2, 3));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod error;
pub mod iter;
pub mod node;
pub mod position;
pub mod tree;

pub use error::PointTreeError;
pub use iter::Iter;
pub use node::NodeId;
pub use position::{ColoredPoint, Position};
pub use tree::PointTree;
