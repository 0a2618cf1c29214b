//! Core - shared plumbing for the board engine
//!
//! - utils/    - zero-cost indexing macros (exported, must load first)
//! - error     - crate error type
//! - logging   - `log` backend that writes to the browser console

#[macro_use]
pub mod utils;
pub mod error;
pub mod logging;

pub use error::{EngineError, Result};
