// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positioning configuration for a virtual window.

use core::fmt;
use core::str::FromStr;

use crate::{ConfigError, ParseActivePositionError};

/// Where the active element lands within the visible page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ActivePosition {
    /// The active element is the first on-screen slot.
    #[default]
    Start,
    /// The active element sits in the middle of the page.
    ///
    /// With an even page size no slot is exactly central, so the window
    /// reserves one extra slot and the host shows half of the outermost
    /// element on each side.
    Center,
}

impl ActivePosition {
    /// Returns the lower-case name used in host-facing configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
        }
    }
}

impl fmt::Display for ActivePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivePosition {
    type Err = ParseActivePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Self::Start),
            "center" => Ok(Self::Center),
            _ => Err(ParseActivePositionError),
        }
    }
}

/// Describes which part of a circular source a virtual window covers.
///
/// All derived quantities ([`effective_page_size`](Self::effective_page_size),
/// [`total_slot_count`](Self::total_slot_count), …) depend only on this value,
/// never on the source, so a host can lay out its slot strip before touching
/// any data.
///
/// ```rust
/// use understory_carousel::{ActivePosition, WindowConfig};
///
/// let config = WindowConfig::new(4, 2)
///     .with_active_index(3)
///     .with_active_position(ActivePosition::Center);
///
/// // An even, centered page is widened by one slot.
/// assert_eq!(config.effective_page_size(), 5);
/// assert_eq!(config.total_slot_count(), 9);
/// assert_eq!(config.active_slot(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WindowConfig {
    active_index: usize,
    active_position: ActivePosition,
    slides_per_page: usize,
    slides_per_move: usize,
}

impl WindowConfig {
    /// Creates a start-aligned configuration with the first element active.
    #[must_use]
    pub const fn new(slides_per_page: usize, slides_per_move: usize) -> Self {
        Self {
            active_index: 0,
            active_position: ActivePosition::Start,
            slides_per_page,
            slides_per_move,
        }
    }

    /// Returns a copy with a different active index.
    #[must_use]
    pub const fn with_active_index(mut self, active_index: usize) -> Self {
        self.active_index = active_index;
        self
    }

    /// Returns a copy with a different active position.
    #[must_use]
    pub const fn with_active_position(mut self, active_position: ActivePosition) -> Self {
        self.active_position = active_position;
        self
    }

    /// Returns a copy with a different page size.
    #[must_use]
    pub const fn with_slides_per_page(mut self, slides_per_page: usize) -> Self {
        self.slides_per_page = slides_per_page;
        self
    }

    /// Returns a copy with a different move size.
    #[must_use]
    pub const fn with_slides_per_move(mut self, slides_per_move: usize) -> Self {
        self.slides_per_move = slides_per_move;
        self
    }

    /// Index of the active element within the source.
    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active_index
    }

    /// Where the active element lands within the page.
    #[must_use]
    pub const fn active_position(&self) -> ActivePosition {
        self.active_position
    }

    /// Number of elements visible per page.
    #[must_use]
    pub const fn slides_per_page(&self) -> usize {
        self.slides_per_page
    }

    /// Maximum number of elements one navigation step can move.
    #[must_use]
    pub const fn slides_per_move(&self) -> usize {
        self.slides_per_move
    }

    /// Page size the window budgets for.
    ///
    /// Equal to `slides_per_page`, plus one when the active element is
    /// centered on an even page.
    #[must_use]
    pub const fn effective_page_size(&self) -> usize {
        match self.active_position {
            ActivePosition::Center if self.slides_per_page % 2 == 0 => {
                self.slides_per_page.saturating_add(1)
            }
            _ => self.slides_per_page,
        }
    }

    /// Number of off-screen slots materialized on each side of the page.
    #[must_use]
    pub const fn edge_buffer(&self) -> usize {
        self.slides_per_move
    }

    /// Number of on-screen slots preceding the active element.
    #[must_use]
    pub const fn center_offset(&self) -> usize {
        match self.active_position {
            ActivePosition::Start => 0,
            ActivePosition::Center => self.effective_page_size() / 2,
        }
    }

    /// Length of every non-empty window built from this configuration.
    #[must_use]
    pub const fn total_slot_count(&self) -> usize {
        self.effective_page_size()
            .saturating_add(self.edge_buffer().saturating_mul(2))
    }

    /// Slot of a non-empty window that holds the active element.
    #[must_use]
    pub const fn active_slot(&self) -> usize {
        self.edge_buffer().saturating_add(self.center_offset())
    }

    /// Checks this configuration against a source of `source_len` elements.
    ///
    /// The active index is only checked for a non-empty source.
    pub fn validate(&self, source_len: usize) -> Result<(), ConfigError> {
        if self.slides_per_page == 0 {
            return Err(ConfigError::ZeroSlidesPerPage);
        }
        if self.slides_per_move == 0 {
            return Err(ConfigError::ZeroSlidesPerMove);
        }
        if source_len > 0 && self.active_index >= source_len {
            return Err(ConfigError::ActiveIndexOutOfRange {
                index: self.active_index,
                len: source_len,
            });
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new(1, 1)
    }
}
