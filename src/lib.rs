//! Quadfall (workspace facade crate).
//!
//! This package keeps a single `quadfall::{core,input,term,window,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use quadfall_core as core;
pub use quadfall_input as input;
pub use quadfall_term as term;
pub use quadfall_types as types;
pub use quadfall_window as window;
