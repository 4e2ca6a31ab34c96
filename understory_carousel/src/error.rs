// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// A [`WindowConfig`](crate::WindowConfig) that cannot describe a valid window.
///
/// Returned by the checked entry points such as
/// [`try_build_virtual_window`](crate::try_build_virtual_window) and
/// [`WindowConfig::validate`](crate::WindowConfig::validate). The lenient
/// entry points never produce it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigError {
    /// `slides_per_page` was zero.
    ZeroSlidesPerPage,
    /// `slides_per_move` was zero.
    ZeroSlidesPerMove,
    /// `active_index` does not address an element of the source.
    ActiveIndexOutOfRange {
        /// The configured active index.
        index: usize,
        /// The length of the source it was checked against.
        len: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSlidesPerPage => f.write_str("slides per page must be at least 1"),
            Self::ZeroSlidesPerMove => f.write_str("slides per move must be at least 1"),
            Self::ActiveIndexOutOfRange { index, len } => write!(
                f,
                "active index {index} is out of range for a source of {len} elements"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}

/// The string did not name an [`ActivePosition`](crate::ActivePosition).
///
/// Only `"start"` and `"center"` are accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct ParseActivePositionError;

impl fmt::Display for ParseActivePositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("active position must be \"start\" or \"center\"")
    }
}

impl core::error::Error for ParseActivePositionError {}
