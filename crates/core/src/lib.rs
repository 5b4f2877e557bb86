//! Core game engine - pure, deterministic, and testable
//!
//! This module contains the game rules, state management, and simulation
//! logic. It has **zero dependencies** on rendering or I/O, making it:
//!
//! - **Deterministic**: the piece source is seedable, so equal seeds and
//!   equal inputs replay identical games
//! - **Testable**: every rule is exercised without a terminal or a window
//! - **Portable**: the same engine drives both front ends and headless tests
//! - **Fast**: the render path refreshes a caller-owned snapshot without
//!   allocating
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with collision detection and line clearing
//! - [`shape`]: tetromino matrices and clockwise rotation
//! - [`spawn`]: uniform random piece source and spawn placement
//! - [`rules`]: scoring and gravity policies, bundled per front end
//! - [`game_state`]: active piece, lookahead, score, and the gravity timer
//! - [`snapshot`]: the per-frame picture handed to renderers
//! - [`session`]: rendering and input seams implemented by front ends
//!
//! # Game Rules
//!
//! This implementation keeps to the classic rules:
//!
//! - **Uniform randomizer**: each piece kind is drawn independently with
//!   equal probability; color is drawn separately from the 7-entry palette
//! - **Plain rotation**: 90 degrees clockwise in place, refused on overlap,
//!   with no wall kicks
//! - **Immediate lock**: a piece locks the moment gravity finds it resting;
//!   soft drops never lock
//! - **Two rule presets**: the windowed game scores `cleared^2 * 100` with
//!   level-scaled gravity, the terminal game scores a point per line at a
//!   constant gravity interval
//!
//! # Example
//!
//! ```
//! use quadfall_core::{GameState, Ruleset, Spawner};
//! use quadfall_types::Command;
//!
//! let spawner = Spawner::with_seed(42);
//! let mut game = GameState::with_spawner(Ruleset::windowed(), spawner);
//!
//! game.apply(Command::MoveLeft);
//! game.apply(Command::Rotate);
//! game.tick(501);
//!
//! assert!(!game.game_over());
//! assert_eq!(game.level(), 1);
//! ```
//!
//! # Timing
//!
//! The engine consumes wall-clock time: call
//! [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed milliseconds. Gravity advances one row each time the accumulated
//! time passes the current drop interval (500ms at level 1 under the scaling
//! policy, constant under the fixed policy).

pub mod board;
pub mod game_state;
pub mod rules;
pub mod session;
pub mod shape;
pub mod snapshot;
pub mod spawn;

pub use quadfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::GameState;
pub use rules::{GravityPolicy, Ruleset, ScorePolicy};
pub use session::{InputSource, Renderer};
pub use shape::{get_shape, Shape};
pub use snapshot::{ActiveSnapshot, FrameSnapshot, NextSnapshot};
pub use spawn::{spawn_offset, Piece, Spawner};
