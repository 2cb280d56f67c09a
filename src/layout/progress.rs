//! Progress fill encoding
//!
//! Maps a completion fraction to the fill drawn on a work bar: a flat fill
//! at the extremes, otherwise a hard-split bar (complete color up to the
//! fraction, incomplete color after) so the bar reads as a progress
//! indicator rather than a gradient wash.

use serde::{Deserialize, Serialize};

use crate::scene::Color;

/// Fill color of the done portion of a work bar.
pub const COMPLETE_COLOR: Color = Color::rgb(0x2e, 0x7d, 0x32);

/// Fill color of the remaining portion of a work bar.
pub const INCOMPLETE_COLOR: Color = Color::rgb(0xa9, 0xa9, 0xa9);

/// Tolerance for treating a fraction as exactly complete, so values like
/// 0.9999 from percentage arithmetic still render as a flat bar.
const COMPLETE_EPSILON: f64 = 0.001;

/// Toolkit-neutral description of a work bar fill.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum FillSpec {
    /// Single solid color over the whole bar
    Flat(Color),
    /// Horizontal split: `complete` from 0 to `at`, `incomplete` after,
    /// with a hard transition at the split
    Split {
        complete: Color,
        incomplete: Color,
        at: f64,
    },
}

/// Compute the fill for a completion fraction in [0.0, 1.0].
pub fn progress_fill(progress: f64) -> FillSpec {
    if progress == 0.0 {
        FillSpec::Flat(INCOMPLETE_COLOR)
    } else if (progress - 1.0).abs() < COMPLETE_EPSILON {
        FillSpec::Flat(COMPLETE_COLOR)
    } else {
        FillSpec::Split {
            complete: COMPLETE_COLOR,
            incomplete: INCOMPLETE_COLOR,
            at: progress,
        }
    }
}
