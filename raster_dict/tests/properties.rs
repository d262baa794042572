// Copyright 2025 the Raster Figure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Model-based checks of `PointTree` against `BTreeMap`.

use std::collections::BTreeMap;
use std::ops::Bound;

use proptest::prelude::*;
use raster_dict::{ColoredPoint, PointTree, PointTreeError, Position};

fn position() -> impl Strategy<Value = Position> {
    (-8_i32..8, -8_i32..8).prop_map(|(x, y)| Position::new(x, y))
}

fn build(points: &[(Position, u32)]) -> (PointTree, BTreeMap<Position, u32>) {
    let mut tree = PointTree::new();
    let mut model = BTreeMap::new();
    for &(pos, color) in points {
        let result = tree.insert(ColoredPoint::new(pos, color));
        if model.contains_key(&pos) {
            assert_eq!(result, Err(PointTreeError::DuplicateKey(pos)));
        } else {
            assert_eq!(result, Ok(()));
            model.insert(pos, color);
        }
    }
    (tree, model)
}

fn assert_matches(tree: &PointTree, model: &BTreeMap<Position, u32>) {
    assert_eq!(tree.len(), model.len());
    let walked: Vec<_> = tree.iter().map(|c| (c.position(), c.color())).collect();
    let expected: Vec<_> = model.iter().map(|(&k, &v)| (k, v)).collect();
    assert_eq!(walked, expected);
    for (&k, &v) in model {
        assert_eq!(tree.find(k).map(|c| c.color()), Some(v));
    }
}

proptest! {
    #[test]
    fn inserts_match_model(points in prop::collection::vec((position(), any::<u32>()), 0..64)) {
        let (tree, model) = build(&points);
        assert_matches(&tree, &model);
        match model.first_key_value() {
            Some((k, _)) => prop_assert_eq!(tree.minimum().unwrap().position(), *k),
            None => prop_assert_eq!(tree.minimum(), Err(PointTreeError::EmptyDictionary)),
        }
        match model.last_key_value() {
            Some((k, _)) => prop_assert_eq!(tree.maximum().unwrap().position(), *k),
            None => prop_assert_eq!(tree.maximum(), Err(PointTreeError::EmptyDictionary)),
        }
    }

    #[test]
    fn removals_match_model(
        points in prop::collection::vec((position(), any::<u32>()), 0..64),
        removals in prop::collection::vec(position(), 0..64),
    ) {
        let (mut tree, mut model) = build(&points);
        for key in removals {
            let result = tree.remove(key);
            match model.remove(&key) {
                Some(color) => prop_assert_eq!(result.map(|c| c.color()), Ok(color)),
                None => prop_assert_eq!(result, Err(PointTreeError::MissingKey(key))),
            }
            prop_assert_eq!(tree.find(key), None);
            assert_matches(&tree, &model);
        }
    }

    #[test]
    fn neighbours_match_model(
        points in prop::collection::vec((position(), any::<u32>()), 0..48),
        probes in prop::collection::vec(position(), 1..32),
    ) {
        let (tree, model) = build(&points);
        for key in probes {
            let next = model
                .range((Bound::Excluded(key), Bound::Unbounded))
                .next()
                .map(|(k, _)| *k);
            let prev = model.range(..key).next_back().map(|(k, _)| *k);
            prop_assert_eq!(tree.successor(key).map(|c| c.position()), next);
            prop_assert_eq!(tree.predecessor(key).map(|c| c.position()), prev);
        }
    }
}
