pub mod walk;

pub use walk::{compile_ignore_patterns, walk_for_discs};
