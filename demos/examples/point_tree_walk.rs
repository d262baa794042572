// Copyright 2025 the Raster Figure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point tree basics.
//!
//! Insert a few points, walk them in order, query neighbours of a missing key and remove
//! points through each removal case.
//!
//! Run:
//! - `RUST_LOG=raster_dict=trace cargo run -p raster_demos --example point_tree_walk`

use raster_dict::{ColoredPoint, PointTree, Position};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tree = PointTree::new();
    for (x, y, color) in [(4, 0, 1), (2, 5, 2), (7, 1, 3), (2, 1, 4), (6, 6, 5), (9, 0, 6)] {
        tree.insert(ColoredPoint::at(x, y, color)).unwrap();
    }
    if let Err(err) = tree.insert(ColoredPoint::at(7, 1, 99)) {
        println!("second insert at (7, 1): {err}");
    }
    println!("{tree:?}, depth {}", tree.depth());

    let order: Vec<_> = tree.iter().map(|p| p.position().to_string()).collect();
    println!("in order: {}", order.join(" "));

    let probe = Position::new(5, 0);
    println!(
        "around missing {probe}: predecessor {:?}, successor {:?}",
        tree.predecessor(probe).map(|p| p.position()),
        tree.successor(probe).map(|p| p.position()),
    );

    // A splice, a successor takeover at the root, then a node reverting to terminal.
    for key in [Position::new(2, 5), Position::new(4, 0), Position::new(2, 1)] {
        let removed = tree.remove(key).unwrap();
        println!("removed {} (color {})", removed.position(), removed.color());
    }
    let order: Vec<_> = tree.iter().map(|p| p.position().to_string()).collect();
    println!("remaining: {}", order.join(" "));
    assert_eq!(tree.len(), 3, "three of six points should remain");
}
