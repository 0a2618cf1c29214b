pub mod change_set;
pub mod patterns;
mod presets;

pub use change_set::{ChangeSet, Coord};
pub use patterns::{Pattern, PatternLibrary};
