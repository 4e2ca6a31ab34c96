// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circular window computation.
//!
//! A window is laid out as three runs of slots:
//!
//! ```text
//! start:   [ edge buffer ] [ *active* .. page .. ] [ edge buffer ]
//! center:  [ edge buffer ] [ .. *active* .. page ] [ edge buffer ]
//! ```
//!
//! Consecutive slots map to consecutive source indices modulo the source
//! length, so short sources simply repeat.

use alloc::vec::Vec;
use core::iter::FusedIterator;

use smallvec::SmallVec;

use crate::{ConfigError, WindowConfig};

/// Inline capacity of the slot → source index table.
///
/// Covers pages of up to five slots with a move size of up to five without
/// spilling to the heap.
const INLINE_SLOTS: usize = 16;

/// Steps `index` back by `back` positions around a ring of `len` elements.
///
/// Floored wrapping: the result is always in `0..len`, also when `back`
/// exceeds `index` or `len`. `len` must be non-zero.
fn wrap_back(index: usize, back: usize, len: usize) -> usize {
    let index = index % len;
    let back = back % len;
    if index >= back {
        index - back
    } else {
        len - (back - index)
    }
}

/// Source indices of a virtual window, in slot order.
///
/// Created by [`window_indices`].
#[derive(Clone, Debug)]
pub struct WindowIndices {
    next: usize,
    source_len: usize,
    remaining: usize,
}

impl Iterator for WindowIndices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let index = self.next;
        self.next = if index + 1 == self.source_len {
            0
        } else {
            index + 1
        };
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for WindowIndices {}

impl FusedIterator for WindowIndices {}

/// Computes which source index occupies each slot of the window.
///
/// The iterator yields [`WindowConfig::total_slot_count`] indices, each in
/// `0..source_len`, or nothing at all when `source_len` is zero. An
/// `active_index` past the end of the source wraps around.
///
/// ```rust
/// use understory_carousel::{window_indices, WindowConfig};
///
/// let indices: Vec<usize> = window_indices(3, &WindowConfig::new(3, 1)).collect();
/// assert_eq!(indices, [2, 0, 1, 2, 0]);
/// ```
#[must_use]
pub fn window_indices(source_len: usize, config: &WindowConfig) -> WindowIndices {
    if source_len == 0 {
        return WindowIndices {
            next: 0,
            source_len,
            remaining: 0,
        };
    }

    let first = wrap_back(
        wrap_back(config.active_index(), config.edge_buffer(), source_len),
        config.center_offset(),
        source_len,
    );
    let remaining = config.total_slot_count();

    #[cfg(feature = "tracing")]
    tracing::trace!(
        source_len,
        active_index = config.active_index(),
        active_position = %config.active_position(),
        page = config.effective_page_size(),
        edge = config.edge_buffer(),
        first,
        slots = remaining,
        "computed virtual window"
    );

    WindowIndices {
        next: first,
        source_len,
        remaining,
    }
}

/// Builds the virtual window for `source`.
///
/// Every slot borrows an element of `source`; short sources repeat and long
/// sources are only partially covered. An empty source always yields an empty
/// window. This never fails: use [`try_build_virtual_window`] to reject
/// zero-sized pages or moves and out-of-range active indices instead.
///
/// ```rust
/// use understory_carousel::{build_virtual_window, ActivePosition, WindowConfig};
///
/// let slides = [1, 2, 3];
/// let config = WindowConfig::new(3, 1).with_active_position(ActivePosition::Center);
///
/// let window: Vec<i32> = build_virtual_window(&slides, &config)
///     .into_iter()
///     .copied()
///     .collect();
/// assert_eq!(window, [2, 3, 1, 2, 3]);
/// ```
#[must_use]
pub fn build_virtual_window<'a, T>(source: &'a [T], config: &WindowConfig) -> Vec<&'a T> {
    window_indices(source.len(), config)
        .map(|index| &source[index])
        .collect()
}

/// Builds the virtual window for `source` after validating `config`.
///
/// An empty source short-circuits to an empty window before any validation.
pub fn try_build_virtual_window<'a, T>(
    source: &'a [T],
    config: &WindowConfig,
) -> Result<Vec<&'a T>, ConfigError> {
    if source.is_empty() {
        return Ok(Vec::new());
    }
    config.validate(source.len())?;
    Ok(build_virtual_window(source, config))
}

/// A computed virtual window together with its slot geometry.
///
/// Besides the element references this remembers which source index each slot
/// came from and where the visible page and the active element sit, so hosts
/// can key realized views by source index and find the on-screen run without
/// redoing the arithmetic.
///
/// ```rust
/// use understory_carousel::{VirtualWindow, WindowConfig};
///
/// let slides = ["a", "b", "c", "d", "e", "f"];
/// let window = VirtualWindow::new(&slides, &WindowConfig::new(2, 1).with_active_index(5));
///
/// assert_eq!(window.source_indices(), &[4, 5, 0, 1]);
/// assert_eq!(window.visible(), &[&"f", &"a"]);
/// assert_eq!(window.active(), Some(&"f"));
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct VirtualWindow<'a, T> {
    slots: Vec<&'a T>,
    indices: SmallVec<[usize; INLINE_SLOTS]>,
    source_len: usize,
    page_start: usize,
    page_len: usize,
    active_slot: usize,
}

impl<'a, T> VirtualWindow<'a, T> {
    /// Builds the window without validating `config`.
    ///
    /// See [`build_virtual_window`] for the lenient semantics.
    #[must_use]
    pub fn new(source: &'a [T], config: &WindowConfig) -> Self {
        let indices = window_indices(source.len(), config);
        let mut slots = Vec::with_capacity(indices.len());
        let mut table = SmallVec::with_capacity(indices.len());
        for index in indices {
            table.push(index);
            slots.push(&source[index]);
        }
        Self {
            slots,
            indices: table,
            source_len: source.len(),
            page_start: config.edge_buffer(),
            page_len: config.effective_page_size(),
            active_slot: config.active_slot(),
        }
    }

    /// Builds the window after validating `config`.
    ///
    /// An empty source yields an empty window regardless of `config`.
    pub fn try_new(source: &'a [T], config: &WindowConfig) -> Result<Self, ConfigError> {
        if !source.is_empty() {
            config.validate(source.len())?;
        }
        Ok(Self::new(source, config))
    }

    /// Number of slots in the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the window has no slots.
    ///
    /// This only happens for an empty source, or for a lenient configuration
    /// with no page and no move.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Length of the source the window was built from.
    #[must_use]
    pub fn source_len(&self) -> usize {
        self.source_len
    }

    /// Element in `slot`, if the slot exists.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&'a T> {
        self.slots.get(slot).copied()
    }

    /// Source index of the element in `slot`, if the slot exists.
    #[must_use]
    pub fn source_index(&self, slot: usize) -> Option<usize> {
        self.indices.get(slot).copied()
    }

    /// All slots in order.
    #[must_use]
    pub fn slots(&self) -> &[&'a T] {
        &self.slots
    }

    /// Source index of every slot, in slot order.
    #[must_use]
    pub fn source_indices(&self) -> &[usize] {
        &self.indices
    }

    /// Iterates `(source_index, element)` pairs in slot order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (usize, &'a T)> + '_ {
        self.indices.iter().copied().zip(self.slots.iter().copied())
    }

    /// Slot holding the active element, or `None` for an empty window.
    #[must_use]
    pub fn active_slot(&self) -> Option<usize> {
        (self.active_slot < self.slots.len()).then_some(self.active_slot)
    }

    /// The active element, or `None` for an empty window.
    #[must_use]
    pub fn active(&self) -> Option<&'a T> {
        self.get(self.active_slot)
    }

    /// The on-screen run of slots, between the two edge buffers.
    ///
    /// For a centered, even page this includes the two half-visible slots.
    #[must_use]
    pub fn visible(&self) -> &[&'a T] {
        if self.slots.is_empty() {
            return &[];
        }
        let end = self.page_start.saturating_add(self.page_len);
        self.slots.get(self.page_start..end).unwrap_or(&[])
    }

    /// Consumes the window, returning the slot references.
    #[must_use]
    pub fn into_vec(self) -> Vec<&'a T> {
        self.slots
    }
}

impl<T> Clone for VirtualWindow<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            indices: self.indices.clone(),
            source_len: self.source_len,
            page_start: self.page_start,
            page_len: self.page_len,
            active_slot: self.active_slot,
        }
    }
}

impl<'w, 'a, T> IntoIterator for &'w VirtualWindow<'a, T> {
    type Item = &'a T;
    type IntoIter = core::iter::Copied<core::slice::Iter<'w, &'a T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter().copied()
    }
}
