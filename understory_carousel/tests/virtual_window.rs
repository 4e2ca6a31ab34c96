// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_carousel` crate.
//!
//! These pin down concrete windows for small, large and empty sources, then
//! check the structural laws (length, active slot, circularity) across a grid
//! of configurations.

use hashbrown::HashMap;
use understory_carousel::{
    ActivePosition, ConfigError, VirtualWindow, WindowConfig, build_keyed_window,
    build_virtual_window, keyed_values, try_build_virtual_window, window_indices,
};

use ActivePosition::{Center, Start};

fn one_to(n: u32) -> Vec<u32> {
    (1..=n).collect()
}

fn config(
    active_index: usize,
    position: ActivePosition,
    slides_per_move: usize,
    slides_per_page: usize,
) -> WindowConfig {
    WindowConfig::new(slides_per_page, slides_per_move)
        .with_active_index(active_index)
        .with_active_position(position)
}

fn window(source: &[u32], config: WindowConfig) -> Vec<u32> {
    build_virtual_window(source, &config)
        .into_iter()
        .copied()
        .collect()
}

#[test]
fn small_source_small_window() {
    let source = one_to(3);
    assert_eq!(window(&source, config(0, Start, 1, 3)), [3, 1, 2, 3, 1]);
    assert_eq!(window(&source, config(0, Center, 1, 3)), [2, 3, 1, 2, 3]);
}

#[test]
fn small_source_large_window() {
    let source = one_to(4);
    assert_eq!(
        window(&source, config(2, Start, 3, 4)),
        [4, 1, 2, 3, 4, 1, 2, 3, 4, 1]
    );
    assert_eq!(
        window(&source, config(2, Center, 3, 4)),
        [2, 3, 4, 1, 2, 3, 4, 1, 2, 3, 4]
    );
}

#[test]
fn large_source_small_window() {
    let source = one_to(8);
    assert_eq!(window(&source, config(0, Start, 1, 3)), [8, 1, 2, 3, 4]);
    assert_eq!(window(&source, config(0, Center, 1, 3)), [7, 8, 1, 2, 3]);
}

#[test]
fn large_source_wraps_at_both_ends() {
    let source = one_to(30);
    assert_eq!(
        window(&source, config(15, Start, 3, 4)),
        [13, 14, 15, 16, 17, 18, 19, 20, 21, 22]
    );
    assert_eq!(
        window(&source, config(15, Center, 3, 4)),
        [11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21]
    );
    assert_eq!(
        window(&source, config(1, Center, 3, 4)),
        [27, 28, 29, 30, 1, 2, 3, 4, 5, 6, 7]
    );
    assert_eq!(
        window(&source, config(28, Center, 3, 4)),
        [24, 25, 26, 27, 28, 29, 30, 1, 2, 3, 4]
    );
    // An odd page of five needs no widening, so it matches the even page of four.
    assert_eq!(
        window(&source, config(28, Center, 3, 5)),
        [24, 25, 26, 27, 28, 29, 30, 1, 2, 3, 4]
    );
    assert_eq!(
        window(&source, config(28, Center, 3, 6)),
        [23, 24, 25, 26, 27, 28, 29, 30, 1, 2, 3, 4, 5]
    );
}

#[test]
fn even_centered_page_shows_half_slides_on_each_side() {
    let source = one_to(3);
    let config = config(0, Center, 2, 4);
    assert_eq!(window(&source, config), [3, 1, 2, 3, 1, 2, 3, 1, 2]);

    let view = VirtualWindow::new(&source, &config);
    // Page of four plus one: both outermost visible slots are half shown.
    assert_eq!(view.visible(), &[&2, &3, &1, &2, &3]);
    assert_eq!(view.active(), Some(&1));
}

#[test]
fn empty_source_yields_empty_window() {
    let source: Vec<u32> = Vec::new();
    assert!(window(&source, config(1, Start, 3, 4)).is_empty());
    assert!(window(&source, config(1, Center, 3, 4)).is_empty());
    // Even an unusable configuration is accepted for an empty source.
    assert_eq!(
        try_build_virtual_window(&source, &WindowConfig::new(0, 0)),
        Ok(Vec::new())
    );
}

#[test]
fn checked_builder_rejects_bad_configs() {
    let source = one_to(3);
    assert_eq!(
        try_build_virtual_window(&source, &WindowConfig::new(0, 1)),
        Err(ConfigError::ZeroSlidesPerPage)
    );
    assert_eq!(
        try_build_virtual_window(&source, &WindowConfig::new(1, 0)),
        Err(ConfigError::ZeroSlidesPerMove)
    );
    assert_eq!(
        VirtualWindow::try_new(&source, &config(3, Start, 1, 1)),
        Err(ConfigError::ActiveIndexOutOfRange { index: 3, len: 3 })
    );

    let built = try_build_virtual_window(&source, &config(0, Start, 1, 3)).unwrap();
    assert_eq!(built, [&3, &1, &2, &3, &1]);
}

#[test]
fn window_laws_hold_across_configs() {
    for len in 1..=9_u32 {
        let source = one_to(len);
        let n = source.len();
        for position in [Start, Center] {
            for per_page in 1..=6 {
                for per_move in 1..=4 {
                    for active in 0..n {
                        let config = config(active, position, per_move, per_page);
                        let view = VirtualWindow::new(&source, &config);

                        let page = if position == Center && per_page % 2 == 0 {
                            per_page + 1
                        } else {
                            per_page
                        };
                        assert_eq!(view.len(), page + 2 * per_move, "length for {config:?}");

                        let active_slot = match position {
                            Start => per_move,
                            Center => per_move + page / 2,
                        };
                        assert_eq!(view.active_slot(), Some(active_slot));
                        assert_eq!(view.active(), Some(&source[active]), "active for {config:?}");
                        assert_eq!(view.visible().len(), page);

                        for (index, value) in view.iter() {
                            assert_eq!(*value, source[index]);
                        }
                        for pair in view.source_indices().windows(2) {
                            assert_eq!(pair[1], (pair[0] + 1) % n, "circularity for {config:?}");
                        }

                        // Rebuilding is deterministic.
                        assert_eq!(VirtualWindow::new(&source, &config), view);
                    }
                }
            }
        }
    }
}

#[test]
fn indices_match_window_elements() {
    let source = one_to(5);
    let config = config(4, Center, 2, 3);
    let indices: Vec<usize> = window_indices(source.len(), &config).collect();
    let values: Vec<u32> = indices.iter().map(|&i| source[i]).collect();
    assert_eq!(values, window(&source, config));
    assert_eq!(indices, [1, 2, 3, 4, 0, 1, 2]);
}

#[test]
fn hash_map_values_feed_the_builder() {
    let map: HashMap<&str, u32> = [("one", 1), ("two", 2), ("three", 3), ("four", 4)]
        .into_iter()
        .collect();
    let config = config(1, Center, 1, 2);

    let flattened: Vec<u32> = keyed_values(&map).into_iter().copied().collect();
    let from_map: Vec<u32> = build_keyed_window(&map, &config)
        .into_iter()
        .copied()
        .collect();
    assert_eq!(from_map, window(&flattened, config));
    assert_eq!(from_map.len(), 5);
}
