// Models module for data structures
pub mod comparison;
pub mod version;
