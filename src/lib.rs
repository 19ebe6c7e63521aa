// vcmp - dot-separated numeric version comparison
// Core library functionality

pub mod cli;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::comparison::{Comparison, Relation};
pub use models::version::{min_sections, parse, Version};
pub use services::comparator::{
    compare, equal, greater_or_equal, greater_than, less_or_equal, less_than, not_equal,
    ordering, VersionOperand,
};
pub use utils::error::ParseError;
