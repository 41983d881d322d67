//! Data models for the output dataset.

mod row;

pub use row::SolutionRow;
