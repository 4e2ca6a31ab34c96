// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: circular virtual windows for infinite-loop carousels.
//!
//! An infinitely looping carousel never renders its source list directly.
//! Instead it renders a fixed-length strip of _virtual slots_ in which the end
//! of the source is repeated before its start and the start is repeated after
//! its end, so the host can animate across the seam without special cases.
//! This crate computes that strip.
//!
//! The core concepts are:
//!
//! - [`WindowConfig`]: which element is active, whether it sits at the
//!   [`Start`](ActivePosition::Start) or [`Center`](ActivePosition::Center) of
//!   the page, how many elements a page shows, and how many elements one move
//!   can travel.
//! - [`window_indices`]: the slot → source index mapping as an iterator.
//! - [`build_virtual_window`]: the strip itself, as references into the source.
//! - [`VirtualWindow`]: the strip plus its geometry (active slot, visible run,
//!   source index of each slot).
//! - [`keyed_values`] and [`build_keyed_window`]: adapters for sources stored
//!   in keyed containers.
//!
//! A window has `effective_page_size + 2 * slides_per_move` slots. The
//! effective page size is `slides_per_page`, widened by one when a centered
//! page has an even size. The `slides_per_move` slots on each side of the page
//! are off-screen and let the host move by up to that many elements without
//! recomputing first.
//!
//! This crate deliberately does **not** render, animate, or handle input. Host
//! frameworks are responsible for:
//!
//! - Owning the slides and their views.
//! - Rebuilding the window whenever the active index or the configuration
//!   changes.
//! - Keeping the active element at [`WindowConfig::active_slot`] while idle.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_carousel::{build_virtual_window, WindowConfig};
//!
//! let slides = [1, 2, 3];
//!
//! // Three slides per page, move one at a time, first slide active.
//! let config = WindowConfig::new(3, 1);
//! let window: Vec<i32> = build_virtual_window(&slides, &config)
//!     .into_iter()
//!     .copied()
//!     .collect();
//!
//! // The last slide leads, the first slide trails.
//! assert_eq!(window, [3, 1, 2, 3, 1]);
//! assert_eq!(window[config.active_slot()], 1);
//! ```
//!
//! Short sources repeat as often as needed, and an empty source always yields
//! an empty window. The lenient builders never fail; [`try_build_virtual_window`]
//! and [`VirtualWindow::try_new`] reject zero-sized pages or moves and
//! out-of-range active indices with a [`ConfigError`].
//!
//! ## Features
//!
//! - `std` (default): no-op marker for dependants that build with `std`.
//! - `tracing`: emits a `trace!` event with the derived geometry whenever a
//!   window is computed.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod source;
mod window;

pub use config::{ActivePosition, WindowConfig};
pub use error::{ConfigError, ParseActivePositionError};
pub use source::{build_keyed_window, keyed_values, try_build_keyed_window};
pub use window::{
    VirtualWindow, WindowIndices, build_virtual_window, try_build_virtual_window, window_indices,
};
