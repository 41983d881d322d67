//! Services orchestrating the conversion pipeline.

mod convert;

pub use convert::{ConvertReport, ConvertService, METADATA_FILE, SOLUTION_PREFIX};
