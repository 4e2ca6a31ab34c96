// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters for keyed containers.
//!
//! Carousels are often fed from maps keyed by some slide ID. These helpers take
//! anything that iterates `(&K, &V)` pairs (a borrowed `BTreeMap`, a
//! `hashbrown::HashMap`, an index map, …), drop the keys, and keep the values
//! in the container's own iteration order.

use alloc::vec::Vec;

use crate::{ConfigError, WindowConfig, window_indices};

/// Flattens borrowed map entries into their values, in iteration order.
///
/// ```rust
/// use std::collections::BTreeMap;
/// use understory_carousel::keyed_values;
///
/// let slides = BTreeMap::from([(20, "b"), (10, "a")]);
/// assert_eq!(keyed_values(&slides), [&"a", &"b"]);
/// ```
pub fn keyed_values<'a, K, V, I>(entries: I) -> Vec<&'a V>
where
    K: 'a,
    V: 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    entries.into_iter().map(|(_, value)| value).collect()
}

/// Builds the virtual window over the values of a keyed container.
///
/// Slots borrow straight from the container. Equivalent to calling
/// [`build_virtual_window`](crate::build_virtual_window) on
/// [`keyed_values`].
pub fn build_keyed_window<'a, K, V, I>(entries: I, config: &WindowConfig) -> Vec<&'a V>
where
    K: 'a,
    V: 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    let values = keyed_values(entries);
    window_indices(values.len(), config)
        .map(|index| values[index])
        .collect()
}

/// Builds the virtual window over the values of a keyed container after
/// validating `config`.
///
/// An empty container short-circuits to an empty window before validation.
pub fn try_build_keyed_window<'a, K, V, I>(
    entries: I,
    config: &WindowConfig,
) -> Result<Vec<&'a V>, ConfigError>
where
    K: 'a,
    V: 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    let values = keyed_values(entries);
    if values.is_empty() {
        return Ok(Vec::new());
    }
    config.validate(values.len())?;
    Ok(window_indices(values.len(), config)
        .map(|index| values[index])
        .collect())
}
