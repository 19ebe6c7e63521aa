// Services module for comparison logic
pub mod comparator;
