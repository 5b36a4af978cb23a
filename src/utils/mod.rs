//! Utility modules shared by scoring and search
//!
//! - Counting: tag and distribution counts across a team
//! - Combinatorics: binomial coefficients and index combinations

pub mod counting;
pub mod combinatorics;

// Re-export commonly used helpers
pub use counting::{count_by, count_shared_tags, max_count, sorted_distribution};
pub use combinatorics::{binomial, Combinations};
