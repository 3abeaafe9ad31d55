//! Layout engine
//!
//! Partitions a terminal of arbitrary size into the six dashboard regions. The function is
//! pure: the same `(height, width, ratio)` always yields the same rectangles, which is what
//! lets a resize A -> B -> A reproduce the original layout exactly.
//!
//! ```text
//! +---------------------------+---------+
//! | 0 search                  | 5 help  |   TOP_HEIGHT
//! +---------+-----------------+---------+
//! | 1 lib   |                           |
//! +---------+ 3 main                    |   available height
//! | 2 lists |                           |
//! +---------+---------------------------+
//! | 4 progress                          |   BOTTOM_HEIGHT
//! +-------------------------------------+
//! ```

use crate::error::{DashboardError, Result};
use ratatui::layout::Rect;
use std::fmt;
use std::str::FromStr;

/// Height of the search/help strip.
pub const TOP_HEIGHT: u16 = 3;
/// Height of the progress strip.
pub const BOTTOM_HEIGHT: u16 = 6;
/// Width of the help box in the top-right corner.
pub const HELP_WIDTH: u16 = 20;
/// Number of regions produced by [`compute_layout`].
pub const REGION_COUNT: usize = 6;

/// Smallest height for which every region gets a non-degenerate rectangle.
pub const MIN_HEIGHT: u16 = TOP_HEIGHT + BOTTOM_HEIGHT + 1;
/// Smallest width for which every region gets a non-degenerate rectangle.
pub const MIN_WIDTH: u16 = HELP_WIDTH + 4;

/// Fraction of the middle band given to the library region; the playlist region gets the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitRatio {
    numerator: u16,
    denominator: u16,
}

impl SplitRatio {
    /// Quarter split used by the default build.
    pub const QUARTER: SplitRatio = SplitRatio {
        numerator: 1,
        denominator: 4,
    };
    /// Even split used by the alternate build.
    pub const HALF: SplitRatio = SplitRatio {
        numerator: 1,
        denominator: 2,
    };

    pub fn new(numerator: u16, denominator: u16) -> Result<Self> {
        if denominator == 0 || numerator > denominator {
            return Err(DashboardError::InvalidRatio {
                value: format!("{numerator}/{denominator}"),
            });
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// `floor(total * numerator / denominator)`, computed without floating point.
    pub fn apply(self, total: u16) -> u16 {
        (u32::from(total) * u32::from(self.numerator) / u32::from(self.denominator)) as u16
    }
}

impl Default for SplitRatio {
    fn default() -> Self {
        Self::QUARTER
    }
}

impl fmt::Display for SplitRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl FromStr for SplitRatio {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || DashboardError::InvalidRatio {
            value: s.to_string(),
        };
        let (num, den) = s.trim().split_once('/').ok_or_else(invalid)?;
        let numerator = num.trim().parse::<u16>().map_err(|_| invalid())?;
        let denominator = den.trim().parse::<u16>().map_err(|_| invalid())?;
        Self::new(numerator, denominator).map_err(|_| invalid())
    }
}

/// Compute the six region rectangles for a terminal of `height` x `width` cells.
///
/// Index order is fixed: search, library, playlist, main, progress, help.
///
/// Terminals smaller than [`MIN_HEIGHT`] x [`MIN_WIDTH`] get a degraded layout: the fixed
/// margins are clamped to what fits, so every rectangle stays inside the terminal and the
/// regions still tile it without overlap (some of them with zero area).
pub fn compute_layout(height: u16, width: u16, ratio: SplitRatio) -> [Rect; REGION_COUNT] {
    let top_height = TOP_HEIGHT.min(height);
    let bottom_height = BOTTOM_HEIGHT.min(height - top_height);
    let help_width = HELP_WIDTH.min(width);
    let left_width = width / 4;

    let available_height = height - top_height - bottom_height;
    let library_height = ratio.apply(available_height);
    let playlist_height = available_height - library_height;
    let main_width = width - left_width;

    [
        // search bar
        rect(0, 0, width - help_width, top_height),
        // library
        rect(0, top_height, left_width, library_height),
        // playlists
        rect(0, top_height + library_height, left_width, playlist_height),
        // main content
        rect(left_width, top_height, main_width, available_height),
        // progress bar
        rect(0, height - bottom_height, width, bottom_height),
        // help
        rect(width - help_width, 0, help_width, top_height),
    ]
}

/// True when the terminal is below the size floor and [`compute_layout`] degrades.
pub fn is_degraded(height: u16, width: u16) -> bool {
    height < MIN_HEIGHT || width < MIN_WIDTH
}

/// Clamp a terminal size to the largest area a ratatui buffer can address.
///
/// Buffers index cells with a `u16` area, so sizes whose cell count exceeds `u16::MAX` are
/// scaled down keeping the aspect ratio, the same way the terminal backend sizes its frame.
pub fn addressable_size(width: u16, height: u16) -> (u16, u16) {
    let area = Rect::new(0, 0, width, height);
    (area.width, area.height)
}

/// True when [`addressable_size`] would shrink `width` x `height`.
pub fn exceeds_addressable(width: u16, height: u16) -> bool {
    u32::from(width) * u32::from(height) > u32::from(u16::MAX)
}

// Inputs are already clamped by `addressable_size`; the literal keeps zero-sized rects as-is.
fn rect(x: u16, y: u16, width: u16, height: u16) -> Rect {
    Rect {
        x,
        y,
        width,
        height,
    }
}
