// Copyright 2025 the Raster Figure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Figure collision.
//!
//! Slide a small user-moved figure across a fixed one and report where the bounding boxes
//! overlap and where pixels actually collide.
//!
//! Run:
//! - `RUST_LOG=raster_figure=trace cargo run -p raster_demos --example figure_collision`

use raster_dict::{ColoredPoint, Position};
use raster_figure::{Figure, FigureKind, PixelScan};
use tracing_subscriber::EnvFilter;

fn diamond(id: u32, kind: FigureKind, at: Position) -> Figure {
    let mut f = Figure::new(id, 6, 6, kind, at);
    for x in 0..=6_i32 {
        for y in 0..=6_i32 {
            if (x - 3).abs() + (y - 3).abs() <= 3 {
                f.add_point(ColoredPoint::at(x, y, 0x3366_CCFF)).unwrap();
            }
        }
    }
    f
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let fixed = diamond(1, FigureKind::Fixed, Position::new(10, 0));
    let mut player = diamond(2, FigureKind::UserMoved, Position::ORIGIN);
    println!("fixed figure {} covers {:?}", fixed.id(), fixed.world_rect());

    for x in 0..=20 {
        player.set_offset(Position::new(x, 0));
        let boxes = player.world_bounds().overlaps(&fixed.world_bounds());
        let hit = player.intersects(&fixed);
        let hit_all = player.intersects_with(&fixed, PixelScan::Inclusive);
        println!("offset {x:2}: boxes {boxes:5} pixels {hit:5} (inclusive {hit_all:5})");
    }

    let tip = player.world_point(Position::new(6, 3));
    let center: kurbo::Point = fixed.world_rect().center();
    println!(
        "player tip at {tip:?}, {:.1} from the fixed figure's center",
        tip.distance(center)
    );
}
