//! Scoring and gravity policies.
//!
//! The two front ends play the same mechanics under different rules: the
//! windowed game rewards multi-line clears quadratically and speeds up with
//! level, the terminal game counts lines one point apiece at a constant
//! pace. Both variants are expressed as a [`Ruleset`] handed to the game
//! state at construction, so the engine itself stays policy-free.

use crate::types::{BASE_DROP_MS, DROP_STEP_MS, LINES_PER_LEVEL, MIN_DROP_MS};

/// How cleared lines convert into points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScorePolicy {
    /// `cleared^2 * 100`: 100 / 400 / 900 / 1600 for 1-4 lines.
    Squared,
    /// One point per cleared line.
    PerLine,
}

impl ScorePolicy {
    /// Points awarded for clearing `cleared` lines in one lock.
    pub fn points(self, cleared: u32) -> u64 {
        match self {
            ScorePolicy::Squared => u64::from(cleared) * u64::from(cleared) * 100,
            ScorePolicy::PerLine => u64::from(cleared),
        }
    }
}

/// How the gravity interval responds to the current level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GravityPolicy {
    /// Interval shrinks `step_ms` per level above 1, floored at `min_ms`.
    Scaling {
        base_ms: u64,
        step_ms: u64,
        min_ms: u64,
    },
    /// Constant interval regardless of level.
    Fixed(u64),
}

impl GravityPolicy {
    /// Milliseconds between gravity steps at `level`.
    pub fn interval_ms(self, level: u32) -> u64 {
        match self {
            GravityPolicy::Scaling {
                base_ms,
                step_ms,
                min_ms,
            } => {
                let reduction = step_ms.saturating_mul(u64::from(level.saturating_sub(1)));
                base_ms.saturating_sub(reduction).max(min_ms)
            }
            GravityPolicy::Fixed(ms) => ms,
        }
    }
}

/// Level reached after clearing `lines` lines in total. Starts at 1 and
/// gains a level every [`LINES_PER_LEVEL`] lines.
pub fn level_for(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL + 1
}

/// Rule bundle for one front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ruleset {
    pub scoring: ScorePolicy,
    pub gravity: GravityPolicy,
    /// Whether the lookahead piece is surfaced to the renderer.
    pub show_next: bool,
}

impl Ruleset {
    /// Rules for the windowed front end: quadratic scoring, level-scaled
    /// gravity, lookahead preview shown.
    pub fn windowed() -> Self {
        Self {
            scoring: ScorePolicy::Squared,
            gravity: GravityPolicy::Scaling {
                base_ms: BASE_DROP_MS,
                step_ms: DROP_STEP_MS,
                min_ms: MIN_DROP_MS,
            },
            show_next: true,
        }
    }

    /// Rules for the terminal front end: a point per line, constant
    /// gravity, no lookahead preview.
    pub fn terminal() -> Self {
        Self {
            scoring: ScorePolicy::PerLine,
            gravity: GravityPolicy::Fixed(BASE_DROP_MS),
            show_next: false,
        }
    }
}
